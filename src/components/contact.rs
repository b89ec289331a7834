use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_console::error;
use log::info;
use crate::api::{self, SubmitOutcome};
use crate::enquiry::{subject_line, use_enquiry};
use crate::models::ContactMessage;

const ADDRESS: &str = "MAXNOVA HEALTHCARE Ambala Chandigarh Expy, Baldev Nagar, Ambala City, Haryana 134007";
const MAP_LINK: &str = "https://maps.app.goo.gl/NpL5ffHfyz8eXX1K8";
const PHONES: [&str; 2] = ["+91 9034061629", "+91 9728461626"];
const MAIL: &str = "gm@maxnovahealthcare.com";

#[derive(Clone, Copy, PartialEq)]
pub enum FormField {
    FullName,
    Phone,
    Email,
    Message,
}

impl FormField {
    const ALL: [FormField; 4] = [FormField::FullName, FormField::Phone, FormField::Email, FormField::Message];

    fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Phone => "Phone no.",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    fn is_required(&self) -> bool {
        !matches!(self, FormField::Message)
    }

    fn input_type(&self) -> &'static str {
        match self {
            FormField::Phone => "tel",
            FormField::Email => "email",
            _ => "text",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            FormField::FullName => "Enter Your Name",
            FormField::Phone => "Enter Your Phone no.",
            FormField::Email => "Your Email",
            FormField::Message => "Tell us about your query",
        }
    }

    fn value<'a>(&self, form: &'a ContactMessage) -> &'a str {
        match self {
            FormField::FullName => &form.full_name,
            FormField::Phone => &form.phone,
            FormField::Email => &form.email,
            FormField::Message => &form.message,
        }
    }
}

pub fn with_field(form: &ContactMessage, field: FormField, value: String) -> ContactMessage {
    let mut next = form.clone();
    match field {
        FormField::FullName => next.full_name = value,
        FormField::Phone => next.phone = value,
        FormField::Email => next.email = value,
        FormField::Message => next.message = value,
    }
    next
}

/// Where the form is in its send cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Sending,
    Done(SubmitOutcome),
}

impl SubmitState {
    /// `None` while a send is already in flight.
    pub fn begin(self) -> Option<SubmitState> {
        match self {
            SubmitState::Sending => None,
            _ => Some(SubmitState::Sending),
        }
    }

    pub fn finish(outcome: SubmitOutcome) -> SubmitState {
        SubmitState::Done(outcome)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Sending)
    }

    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            SubmitState::Done(outcome) => Some(outcome.message()),
            _ => None,
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let enquiry = use_enquiry();
    let form = use_state(ContactMessage::default);
    let submit_state = use_state(|| SubmitState::Idle);

    // Cleared whenever the enquiry overlay is toggled.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                form.set(ContactMessage::default());
                || ()
            },
            enquiry.reset_epoch(),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(sending) = submit_state.begin() else {
                return;
            };
            submit_state.set(sending);
            let message = (*form).clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                let outcome = api::send_message(&message).await;
                match outcome {
                    SubmitOutcome::Sent => info!("Contact message sent"),
                    SubmitOutcome::Rejected => error!("Contact message rejected by server"),
                    SubmitOutcome::Failed => error!("Contact message failed to send"),
                }
                let done = SubmitState::finish(outcome);
                submit_state.set(done);
                if let Some(text) = done.acknowledgement() {
                    alert(text);
                }
            });
        })
    };

    let field_html = |field: FormField| {
        let value = field.value(&form).to_string();
        if !field.is_required() {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    form.set(with_field(&form, field, input.value()));
                })
            };
            html! {
                <div class="contact-field">
                    <label>{ field.label() }</label>
                    <textarea name="message" placeholder={field.placeholder()} {value} {oninput} />
                </div>
            }
        } else {
            let oninput = {
                let form = form.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    form.set(with_field(&form, field, input.value()));
                })
            };
            html! {
                <div class="contact-field">
                    <label>{ field.label() }</label>
                    <input required={field.is_required()} type={field.input_type()} placeholder={field.placeholder()} {value} {oninput} />
                </div>
            }
        }
    };

    html! {
        <div class="contact-form-wrapper">
            <div class="contact-subject">{ subject_line(enquiry.subject()) }</div>
            <form class="contact-form" {onsubmit}>
                { for FormField::ALL.into_iter().map(field_html) }
                <button type="submit" class="contact-submit" disabled={submit_state.is_pending()}>
                    { if submit_state.is_pending() { "Sending..." } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}

fn contact_info() -> Html {
    html! {
        <div class="contact-info">
            <h1>{"Get in touch"}</h1>
            <div class="contact-info-item">
                <h3>{"Where"}</h3>
                <a href={MAP_LINK} target="_blank">{ ADDRESS }</a>
            </div>
            <div class="contact-info-item">
                <h3>{"Phone no."}</h3>
                { for PHONES.iter().map(|phone| html! { <p>{ *phone }</p> }) }
            </div>
            <div class="contact-info-item">
                <h3>{"Mail to:"}</h3>
                <a href={format!("mailto:{}", MAIL)} target="_blank">{ MAIL }</a>
            </div>
        </div>
    }
}

/// The enquiry form shown on top of the page while the overlay is open.
#[function_component(ContactOverlay)]
pub fn contact_overlay() -> Html {
    let enquiry = use_enquiry();

    html! {
        <main class="contact-overlay">
            <section class="contact-panel scale-in">
                <span class="contact-close" onclick={enquiry.toggle_callback()}>{"✕"}</span>
                { contact_info() }
                <ContactForm />
            </section>
        </main>
    }
}

/// Standalone contact page; same form, no close control.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <main class="contact-page">
            <section class="contact-panel">
                { contact_info() }
                <ContactForm />
            </section>
        </main>
    }
}
