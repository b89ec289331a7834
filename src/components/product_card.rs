use yew::prelude::*;
use web_sys::MouseEvent;
use crate::enquiry::use_enquiry;
use crate::models::Product;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_view_more: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let enquiry = use_enquiry();
    let product = &props.product;

    let on_enquire = {
        let subject = product.subject();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            enquiry.set_subject(subject.clone());
        })
    };

    let on_view_more = {
        let product = product.clone();
        let on_view_more = props.on_view_more.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_view_more.emit(product.clone());
        })
    };

    html! {
        <div class="product-card reveal-up">
            <div class="product-card-image">
                <img src={product.image.clone().unwrap_or_default()} alt={product.name.clone()} loading="lazy" />
                <div class="product-card-actions">
                    <button class="product-view-more" onclick={on_view_more}>{"View More"}</button>
                    <button class="product-enquire" onclick={on_enquire}>{"Enquire"}</button>
                </div>
            </div>
            <h1 class="product-card-name">{ &product.name }</h1>
            {
                if let Some(company) = &product.company_name {
                    html! { <p class="product-card-brand">{ company }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub product: Product,
    pub on_close: Callback<()>,
}

#[function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> Html {
    let enquiry = use_enquiry();
    let product = &props.product;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_enquire = {
        let subject = product.subject();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            enquiry.set_subject(subject.clone());
        })
    };

    let detail = |label: &str, value: &Option<String>| match value {
        Some(value) if !value.is_empty() => html! {
            <div class="product-modal-detail">
                <h3>{ label }</h3>
                <p>{ value }</p>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="product-modal-backdrop">
            <div class="product-modal">
                <span class="product-modal-close" onclick={close}>{"✕"}</span>
                <img src={product.image.clone().unwrap_or_default()} alt={product.name.clone()} />
                <div class="product-modal-body">
                    <h2>{ &product.name }</h2>
                    { detail("Subbrand", &product.company_name) }
                    { detail("Category", &product.category_name) }
                    { detail("Ingredients", &product.ingredients) }
                    { detail("USP", &product.usp) }
                    <button class="product-enquire" onclick={on_enquire}>{"Enquire Now"}</button>
                </div>
            </div>
        </div>
    }
}
