use yew::prelude::*;
use crate::api::{self, use_remote, Loadable};
use crate::components::motion::{translate_x, use_scroll_offset};
use crate::components::product_card::{ProductCard, ProductModal};
use crate::models::Product;

#[derive(Debug, PartialEq)]
pub enum GridView<'a> {
    Loading,
    Empty,
    Cards(&'a [Product]),
}

/// A failed listing shows the same empty message as a listing with no top items.
pub fn grid_view(products: &Loadable<Vec<Product>>) -> GridView<'_> {
    match products {
        Loadable::Loading => GridView::Loading,
        Loadable::Loaded(items) if !items.is_empty() => GridView::Cards(items),
        _ => GridView::Empty,
    }
}

#[derive(Properties, PartialEq)]
pub struct TopProductsProps {
    /// Category id from the route; empty on the home page.
    #[prop_or_default]
    pub id: String,
}

#[function_component(TopProducts)]
pub fn top_products(props: &TopProductsProps) -> Html {
    let products = use_remote("products", props.id.clone(), |id: String| async move {
        api::fetch_products(&id).await.map(api::top_products)
    });
    let heading = use_node_ref();
    let offset = use_scroll_offset(heading.clone(), -100.0, 10.0);

    html! {
        <section class="top-products">
            <div class="section-heading">
                <h1 ref={heading} style={translate_x(offset)}>{"THESE ARE TOP MARKET PRODUCTS"}</h1>
            </div>
            <ProductGrid products={products} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub products: Loadable<Vec<Product>>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    let selected = use_state(|| None::<Product>);

    let on_view_more = {
        let selected = selected.clone();
        Callback::from(move |product: Product| selected.set(Some(product)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    match grid_view(&props.products) {
        GridView::Loading => html! {
            <div class="product-grid-loading"><div class="spinner"></div></div>
        },
        GridView::Empty => html! {
            <h1 class="product-grid-empty">
                {"No products as of Now"}<br />
                {"We are working hard on this one!"}
            </h1>
        },
        GridView::Cards(items) => html! {
            <>
                <div class="product-grid">
                    { for items.iter().map(|product| html! {
                        <ProductCard product={product.clone()} on_view_more={on_view_more.clone()} />
                    }) }
                </div>
                {
                    if let Some(product) = (*selected).clone() {
                        html! { <ProductModal product={product} on_close={on_close} /> }
                    } else {
                        html! {}
                    }
                }
            </>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            company_name: None,
            category_name: None,
            image: None,
            ingredients: None,
            usp: None,
            is_top: true,
        }
    }

    #[test]
    fn zero_top_products_renders_empty_state() {
        assert_eq!(grid_view(&Loadable::Loaded(Vec::new())), GridView::Empty);
    }

    #[test]
    fn server_error_renders_empty_state() {
        let failed = Loadable::from_result(
            Err::<Vec<Product>, _>(FetchError::Status { status: 500, status_text: "Internal Server Error".into() }),
            "products",
        );
        assert_eq!(grid_view(&failed), GridView::Empty);
    }

    #[test]
    fn loaded_products_render_as_cards() {
        let loaded = Loadable::Loaded(vec![product("A"), product("B")]);
        match grid_view(&loaded) {
            GridView::Cards(items) => assert_eq!(items.len(), 2),
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn pending_listing_shows_loading() {
        assert_eq!(grid_view(&Loadable::<Vec<Product>>::Loading), GridView::Loading);
    }
}
