use std::future::Future;
use gloo_net::http::Request;
use log::{error, info};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::models::{
    BentoData, BentoEntry, Category, CategoryListing, Certificate, ContactMessage, Product,
    ProductListing, SendMessageResponse,
};

pub const SEND_MESSAGE_PATH: &str = "/send-whatsapp-message";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

/// Turns a finished response into a typed body.
pub fn decode<T: DeserializeOwned>(status: u16, status_text: &str, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { status, status_text: status_text.to_string() });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = config::api_url(path);
    let response = Request::get(&url).send().await?;
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await?;
    decode(status, &status_text, &body)
}

pub async fn fetch_products(id: &str) -> Result<Vec<Product>, FetchError> {
    let listing: ProductListing = get_json(&format!("/api/product/{}", id)).await?;
    Ok(listing.find_product)
}

pub fn top_products(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(|p| p.is_top).collect()
}

pub async fn fetch_categories() -> Result<Vec<Category>, FetchError> {
    let listing: CategoryListing = get_json("/api/category").await?;
    Ok(listing.all_category)
}

pub async fn fetch_certificates() -> Result<Vec<Certificate>, FetchError> {
    get_json("/api/utils/get-certificate").await
}

pub async fn fetch_bento() -> Result<Option<BentoData>, FetchError> {
    let entries: Vec<BentoEntry> = get_json("/api/utils/get-bento").await?;
    Ok(first_bento(entries))
}

fn first_bento(entries: Vec<BentoEntry>) -> Option<BentoData> {
    entries.into_iter().next().map(|entry| entry.service_bento)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServicesOverview {
    pub categories: Vec<Category>,
    pub bento: Option<BentoData>,
}

/// Categories and bento content, requested together.
pub async fn fetch_services_overview() -> Result<ServicesOverview, FetchError> {
    let (categories, bento) = futures::future::try_join(fetch_categories(), fetch_bento()).await?;
    Ok(ServicesOverview { categories, bento })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected,
    Failed,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => "Your message was sent successfully!",
            SubmitOutcome::Rejected => "There was an issue sending your message.",
            SubmitOutcome::Failed => "Your message could not be sent. Please try again later.",
        }
    }
}

/// Status decides; a 2xx body that says `ok: false` still counts as rejected.
pub fn submission_outcome(status: u16, body: &str) -> SubmitOutcome {
    if !(200..300).contains(&status) {
        return SubmitOutcome::Rejected;
    }
    match serde_json::from_str::<SendMessageResponse>(body) {
        Ok(SendMessageResponse { ok: Some(false) }) => SubmitOutcome::Rejected,
        _ => SubmitOutcome::Sent,
    }
}

pub async fn send_message(message: &ContactMessage) -> SubmitOutcome {
    let request = match Request::post(SEND_MESSAGE_PATH).json(message) {
        Ok(req) => req,
        Err(e) => {
            error!("Could not encode contact message: {}", e);
            return SubmitOutcome::Failed;
        }
    };
    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    error!("Could not read send-message response body: {}", e);
                    String::new()
                }
            };
            submission_outcome(status, &body)
        }
        Err(e) => {
            error!("Error submitting form: {}", e);
            SubmitOutcome::Failed
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, FetchError>, what: &str) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => {
                error!("Error loading {}: {}", what, e);
                Loadable::Failed(e.to_string())
            }
        }
    }
}

/// Counts fetches issued by one hook so stale responses can be dropped.
#[derive(Debug, Default)]
pub struct FetchGeneration(u32);

impl FetchGeneration {
    pub fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

/// Runs `fetch` whenever `deps` change and tracks the result of the latest one.
#[hook]
pub fn use_remote<T, D, F, Fut>(what: &'static str, deps: D, fetch: F) -> Loadable<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = use_state(|| Loadable::Loading);
    let generation = use_mut_ref(FetchGeneration::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |deps: &D| {
                state.set(Loadable::Loading);
                let ticket = generation.borrow_mut().next();
                let deps = deps.clone();
                spawn_local(async move {
                    let result = fetch(deps).await;
                    if generation.borrow().is_current(ticket) {
                        state.set(Loadable::from_result(result, what));
                    } else {
                        info!("Dropping stale {} response", what);
                    }
                });
                || ()
            },
            deps,
        );
    }
    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_is_a_status_error() {
        let result: Result<CategoryListing, _> = decode(500, "Internal Server Error", "oops");
        assert_eq!(
            result.unwrap_err(),
            FetchError::Status { status: 500, status_text: "Internal Server Error".into() }
        );
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let result: Result<CategoryListing, _> = decode(200, "OK", r#"{"categories":[]}"#);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn failed_fetch_degrades_to_failed_state() {
        let result: Result<Vec<Certificate>, _> = decode(500, "Internal Server Error", "");
        let state = Loadable::from_result(result, "certificates");
        assert!(matches!(state, Loadable::Failed(msg) if msg.contains("500")));
    }

    #[test]
    fn top_products_keeps_only_flagged_items() {
        let listing: ProductListing = decode(
            200,
            "OK",
            r#"{"findProduct":[{"name":"A","is_top":true},{"name":"B","is_top":false},{"name":"C"}]}"#,
        )
        .unwrap();
        let top = top_products(listing.find_product);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "A");
    }

    #[test]
    fn no_top_products_yields_empty_list() {
        let listing: ProductListing =
            decode(200, "OK", r#"{"findProduct":[{"name":"B","is_top":false}]}"#).unwrap();
        assert!(top_products(listing.find_product).is_empty());
    }

    #[test]
    fn bento_takes_first_entry_or_none() {
        let entries: Vec<BentoEntry> = decode(
            200,
            "OK",
            r#"[{"service_bento":{"value1_head":"Quality"}},{"service_bento":{"value1_head":"Other"}}]"#,
        )
        .unwrap();
        assert_eq!(first_bento(entries).map(|b| b.value1_head), Some("Quality".to_string()));
        let empty: Vec<BentoEntry> = decode(200, "OK", "[]").unwrap();
        assert!(first_bento(empty).is_none());
    }

    #[test]
    fn only_the_latest_fetch_is_current() {
        let mut generation = FetchGeneration::default();
        let first = generation.next();
        assert!(generation.is_current(first));
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn submission_outcomes() {
        assert_eq!(submission_outcome(200, r#"{"ok":true}"#), SubmitOutcome::Sent);
        assert_eq!(submission_outcome(200, "not json"), SubmitOutcome::Sent);
        // An unreadable body falls back to an empty one.
        assert_eq!(submission_outcome(200, ""), SubmitOutcome::Sent);
        assert_eq!(submission_outcome(200, r#"{"ok":false}"#), SubmitOutcome::Rejected);
        assert_eq!(submission_outcome(502, r#"{"ok":true}"#), SubmitOutcome::Rejected);
    }

    #[test]
    fn every_outcome_has_a_distinct_acknowledgement() {
        let sent = SubmitOutcome::Sent.message();
        assert_ne!(sent, SubmitOutcome::Rejected.message());
        assert_ne!(sent, SubmitOutcome::Failed.message());
    }
}
