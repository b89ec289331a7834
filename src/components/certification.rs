use yew::prelude::*;
use web_sys::MouseEvent;
use crate::api::{self, use_remote, Loadable};
use crate::models::Certificate;

#[function_component(Certification)]
pub fn certification() -> Html {
    let certificates = use_remote("certificates", (), |_| api::fetch_certificates());

    let body = match certificates {
        Loadable::Loading => html! {
            <div class="certification-state"><div class="spinner"></div></div>
        },
        Loadable::Failed(error) => html! {
            <div class="certification-state certification-error">{ format!("Error: {}", error) }</div>
        },
        Loadable::Loaded(items) if items.is_empty() => html! {
            <div class="certification-state">{"No certificates available."}</div>
        },
        Loadable::Loaded(items) => html! { <Certified certificates={items} /> },
    };

    html! {
        <section class="certification">
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CertifiedProps {
    certificates: Vec<Certificate>,
}

#[function_component(Certified)]
fn certified(props: &CertifiedProps) -> Html {
    let current = use_state(|| 0usize);
    let caption = props
        .certificates
        .get(*current)
        .map(|c| c.text.clone())
        .unwrap_or_default();

    html! {
        <main class="certified">
            <div class="certified-text">
                <h1>{"Your Trusted Partner"}</h1>
                <h2 key={*current} class="certified-caption fade-in">{ caption }</h2>
            </div>
            <div class="certified-gallery" aria-label="Certificate Gallery">
                { for props.certificates.iter().enumerate().map(|(index, certificate)| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            current.set(index);
                        })
                    };
                    let key = if certificate.id.is_empty() {
                        format!("cert-{}", index)
                    } else {
                        certificate.id.clone()
                    };
                    html! {
                        <div
                            key={key}
                            class={classes!("certificate-card", (*current == index).then(|| "active"))}
                            role="button"
                            tabindex="0"
                            {onclick}
                        >
                            <img src={certificate.image.clone()} alt={certificate.image_alt.clone()} loading="lazy" />
                        </div>
                    }
                }) }
            </div>
        </main>
    }
}
