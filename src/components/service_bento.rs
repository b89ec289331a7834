use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::api::{self, use_remote, Loadable, ServicesOverview};
use crate::enquiry::use_enquiry;
use crate::models::BentoData;

const VERTICAL_ICONS: [&str; 4] = [
    "/images/derma.svg",
    "/images/cosmo.svg",
    "/images/neutra.svg",
    "/images/ayurv.svg",
];

pub fn vertical_icon(index: usize) -> &'static str {
    VERTICAL_ICONS[index % VERTICAL_ICONS.len()]
}

/// Rows the headline tile spans so it lines up with the category tiles.
pub fn vertical_row_span(count: usize) -> usize {
    (count + count % 2) / 2
}

pub fn first_sentence(description: &str) -> String {
    let sentence = description.split('.').next().unwrap_or_default().trim();
    if sentence.is_empty() {
        return String::new();
    }
    format!("{}.", sentence)
}

#[function_component(ServiceBento)]
pub fn service_bento() -> Html {
    let enquiry = use_enquiry();
    let overview = use_remote("service bento", (), |_| api::fetch_services_overview());

    match overview {
        Loadable::Loading => html! {
            <section class="bento bento-loading"><div class="spinner"></div></section>
        },
        Loadable::Failed(error) => html! {
            <section class="bento bento-error">
                <p>{ format!("Error: {}", error) }</p>
            </section>
        },
        Loadable::Loaded(ServicesOverview { categories, bento }) => {
            let bento = bento.unwrap_or_default();
            let span = vertical_row_span(categories.len());
            html! {
                <section class="bento">
                    <div class="bento-tile bento-headline" style={format!("grid-row: span {};", span.max(1))}>
                        <h1>{"Driven by Resilient R&D approach"}</h1>
                        <img src={bento.box1_image.clone()} alt="box1_image" />
                    </div>
                    { for categories.iter().enumerate().map(|(index, vertical)| html! {
                        <div
                            class="bento-tile bento-vertical"
                            key={vertical.id.clone()}
                            style={vertical.image.as_ref().map(|image| format!("background-image: url({});", image))}
                        >
                            <div class="bento-vertical-top">
                                <img class="bento-icon" src={vertical_icon(index)} alt={vertical.name.clone()} />
                                <Link<Route> to={Route::Vertical { id: vertical.id.clone() }} classes="bento-arrow">
                                    <img src="/images/arrow.svg" alt={vertical.name.clone()} width="20" height="20" />
                                </Link<Route>>
                            </div>
                            <h1>{ &vertical.name }</h1>
                            <p>{ first_sentence(vertical.description.as_deref().unwrap_or_default()) }</p>
                        </div>
                    }) }
                    { value_tile(&bento.value1_image, &bento.value1_head, &bento.value1_desc) }
                    { value_tile(&bento.value2_image, &bento.value2_head, &bento.value2_desc) }
                    { contact_tile(&bento, enquiry.toggle_callback()) }
                </section>
            }
        }
    }
}

fn value_tile(image: &str, head: &str, desc: &str) -> Html {
    html! {
        <div class="bento-tile bento-value">
            <div class="bento-value-image">
                <img src={image.to_string()} alt={head.to_string()} />
            </div>
            <h1>{ head }</h1>
            {
                if desc.is_empty() {
                    html! {}
                } else {
                    html! { <p>{ desc }</p> }
                }
            }
        </div>
    }
}

fn contact_tile(bento: &BentoData, on_contact: Callback<MouseEvent>) -> Html {
    html! {
        <div class="bento-tile bento-contact">
            <div>
                <h2>{"What about a call?"}</h2>
                <button class="bento-contact-button" onclick={on_contact}>{"Contact Us"}</button>
            </div>
            <img src={bento.contact_image.clone()} alt="contact_image" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_cycle_through_the_four_verticals() {
        assert_eq!(vertical_icon(0), "/images/derma.svg");
        assert_eq!(vertical_icon(3), "/images/ayurv.svg");
        assert_eq!(vertical_icon(4), "/images/derma.svg");
    }

    #[test]
    fn row_span_rounds_odd_counts_up() {
        assert_eq!(vertical_row_span(0), 0);
        assert_eq!(vertical_row_span(3), 2);
        assert_eq!(vertical_row_span(4), 2);
        assert_eq!(vertical_row_span(5), 3);
    }

    #[test]
    fn first_sentence_keeps_the_lead() {
        assert_eq!(first_sentence("Skin care range. Backed by research."), "Skin care range.");
        assert_eq!(first_sentence("No full stop"), "No full stop.");
        assert_eq!(first_sentence(""), "");
        assert_eq!(first_sentence("  . trailing"), "");
    }
}
