use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod api;
mod config;
mod enquiry;
mod models;
mod components {
    pub mod certification;
    pub mod contact;
    pub mod mission;
    pub mod motion;
    pub mod other_services;
    pub mod product_card;
    pub mod service_bento;
    pub mod top_products;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod services;
}

use components::{
    contact::{ContactOverlay, ContactPage},
    other_services::ServiceKind,
};
use enquiry::{use_enquiry, EnquiryProvider};
use pages::{
    about::About,
    home::{Home, NotFound, Vertical},
    services::ServicePage,
};

const NAV_SCROLL_THRESHOLD: f64 = 600.0;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/pcd-franchise")]
    PcdFranchise,
    #[at("/private-label")]
    PrivateLabel,
    #[at("/custom-formulations")]
    CustomFormulations,
    #[at("/verticals/:id")]
    Vertical { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::PcdFranchise => {
            info!("Rendering PCD Franchise page");
            html! { <ServicePage kind={ServiceKind::PcdFranchise} /> }
        },
        Route::PrivateLabel => {
            info!("Rendering Private Label page");
            html! { <ServicePage kind={ServiceKind::PrivateLabel} /> }
        },
        Route::CustomFormulations => {
            info!("Rendering Custom Formulations page");
            html! { <ServicePage kind={ServiceKind::CustomFormulations} /> }
        },
        Route::Vertical { id } => {
            info!("Rendering Vertical page {}", id);
            html! { <Vertical id={id} /> }
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let enquiry = use_enquiry();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open_contact = {
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            if !enquiry.is_open() {
                enquiry.toggle();
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"MAXNOVA"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::PcdFranchise} classes="nav-link">{"PCD Franchise"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::PrivateLabel} classes="nav-link">{"Private Label"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::CustomFormulations} classes="nav-link">{"Custom Formulations"}</Link<Route>>
                    </div>
                    <button class="nav-contact-button" onclick={open_contact}>
                        {"Contact"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Renders the enquiry overlay while it is open.
#[function_component(EnquiryOverlay)]
fn enquiry_overlay() -> Html {
    let enquiry = use_enquiry();
    if enquiry.is_open() {
        html! { <ContactOverlay /> }
    } else {
        html! {}
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <EnquiryProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <EnquiryOverlay />
            </BrowserRouter>
        </EnquiryProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
