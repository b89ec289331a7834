use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::{
    other_services::OtherServices,
    service_bento::ServiceBento,
    top_products::TopProducts,
};
use crate::enquiry::use_enquiry;

#[function_component(Home)]
pub fn home() -> Html {
    let enquiry = use_enquiry();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Crafting Health, Delivering Trust"}</h1>
                <p>{"Third-party manufacturing, private label and PCD franchise solutions across derma, cosmetic, nutraceutical and ayurvedic ranges."}</p>
                <div class="hero-buttons">
                    <button class="hero-cta" onclick={enquiry.toggle_callback()}>{"Enquire Now"}</button>
                    <Link<Route> to={Route::About} classes="hero-secondary">{"About Us"}</Link<Route>>
                </div>
            </section>
            <TopProducts />
            <ServiceBento />
            <OtherServices />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VerticalProps {
    pub id: String,
}

/// Top products of a single category.
#[function_component(Vertical)]
pub fn vertical(props: &VerticalProps) -> Html {
    html! {
        <div class="vertical-page">
            <TopProducts id={props.id.clone()} />
            <OtherServices />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
        </div>
    }
}
