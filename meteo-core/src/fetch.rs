//! Lookup orchestration: the state machine driving one weather lookup and
//! the HTTP client behind it.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::card::{WeatherCard, build_card};
use crate::error::{ErrorBody, ErrorBodyParse, FetchFailure, classify};

/// Validation message for a blank submit.
pub const EMPTY_INPUT_MESSAGE: &str = "Merci d’entrer une ville ou un village.";

/// UI state of the lookup pipeline. One slot, replaced wholesale on every
/// transition.
#[derive(Debug, Clone)]
pub enum LookupState {
    Idle,
    Loading { city: String },
    Success(WeatherCard),
    Error(String),
}

/// Events fed into [`transition`].
#[derive(Debug)]
pub enum LookupEvent {
    /// Raw text from the city field.
    Submit { input: String },
    /// Outcome of the request issued for the current lookup.
    Completed(Result<Value, FetchFailure>),
}

/// Pure state-transition function.
///
/// Every arm replaces the state wholesale, whatever it currently is: a
/// submit is accepted from any state (there is no in-flight guard), and a
/// completion overwrites whatever is current, so with overlapping lookups
/// the last response to arrive wins regardless of submission order.
pub fn transition(state: &LookupState, event: LookupEvent) -> LookupState {
    match (state, event) {
        (_, LookupEvent::Submit { input }) => {
            let city = input.trim();
            if city.is_empty() {
                LookupState::Error(EMPTY_INPUT_MESSAGE.to_string())
            } else {
                LookupState::Loading { city: city.to_string() }
            }
        }
        (_, LookupEvent::Completed(Ok(raw))) => LookupState::Success(build_card(&raw)),
        (_, LookupEvent::Completed(Err(failure))) => LookupState::Error(classify(&failure)),
    }
}

/// Source of raw weather payloads for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<Value, FetchFailure>;
}

/// HTTP client for the weather backend's `/api/weather` endpoint.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url, http: Client::new() }
    }
}

#[async_trait]
impl WeatherSource for BackendClient {
    async fn fetch(&self, city: &str) -> Result<Value, FetchFailure> {
        let url = format!("{}/api/weather", self.base_url.trim_end_matches('/'));

        debug!(city, url, "dispatching weather lookup");
        let res = self.http.get(&url).query(&[("city", city)]).send().await?;

        let status = res.status();
        debug!(status = status.as_u16(), "backend answered");

        if !status.is_success() {
            let body = match res.json::<ErrorBody>().await {
                Ok(body) => ErrorBodyParse::Parsed(body),
                Err(err) => {
                    warn!(error = %err, "error body was not valid JSON");
                    ErrorBodyParse::Failed
                }
            };
            return Err(FetchFailure::Http { status: status.as_u16(), body });
        }

        // An unparseable success body surfaces as a transport failure, the
        // same bucket a connection error lands in.
        let raw = res.json::<Value>().await?;
        Ok(raw)
    }
}

/// Top-level orchestrator: owns the single state slot, drives one submit
/// through validation, the request and completion, and invokes the render
/// callback once per state change.
pub struct WeatherFetcher {
    source: Box<dyn WeatherSource>,
    state: LookupState,
}

impl WeatherFetcher {
    pub fn new(source: Box<dyn WeatherSource>) -> Self {
        Self { source, state: LookupState::Idle }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Run one lookup. Renders the post-validation state first; when that
    /// state is `Loading`, issues the request and renders the completion.
    pub async fn submit<F>(&mut self, input: &str, mut render: F)
    where
        F: FnMut(&LookupState),
    {
        self.state = transition(&self.state, LookupEvent::Submit { input: input.to_string() });
        render(&self.state);

        let city = match &self.state {
            LookupState::Loading { city } => city.clone(),
            _ => return,
        };

        let outcome = self.source.fetch(&city).await;
        self.state = transition(&self.state, LookupEvent::Completed(outcome));
        render(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorBody, ErrorBodyParse};
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Scripted source: pops one outcome per call and counts calls.
    #[derive(Debug, Default)]
    struct StubSource {
        calls: Arc<AtomicUsize>,
        script: Mutex<VecDeque<Result<Value, FetchFailure>>>,
    }

    impl StubSource {
        fn scripted(outcome: Result<Value, FetchFailure>) -> Self {
            let stub = Self::default();
            stub.script.lock().expect("script lock").push_back(outcome);
            stub
        }
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        async fn fetch(&self, _city: &str) -> Result<Value, FetchFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .expect("script lock")
                .pop_front()
                .expect("stub called more often than scripted")
        }
    }

    fn state_tag(state: &LookupState) -> &'static str {
        match state {
            LookupState::Idle => "idle",
            LookupState::Loading { .. } => "loading",
            LookupState::Success(_) => "success",
            LookupState::Error(_) => "error",
        }
    }

    #[test]
    fn submit_trims_and_enters_loading() {
        let next = transition(
            &LookupState::Idle,
            LookupEvent::Submit { input: "  Paris  ".to_string() },
        );
        match next {
            LookupState::Loading { city } => assert_eq!(city, "Paris"),
            other => panic!("expected Loading, got {other:?}"),
        }
    }

    #[test]
    fn blank_submit_short_circuits_to_validation_error() {
        for input in ["", "   ", "\t\n"] {
            let next = transition(
                &LookupState::Idle,
                LookupEvent::Submit { input: input.to_string() },
            );
            match next {
                LookupState::Error(msg) => assert_eq!(msg, EMPTY_INPUT_MESSAGE),
                other => panic!("expected Error, got {other:?}"),
            }
        }
    }

    #[test]
    fn submit_is_accepted_from_error_success_and_loading() {
        let from_error = LookupState::Error("x".to_string());
        let from_success = LookupState::Success(build_card(&json!({ "temperature": 12 })));
        let from_loading = LookupState::Loading { city: "Lyon".to_string() };
        for state in [&from_error, &from_success, &from_loading] {
            let next =
                transition(state, LookupEvent::Submit { input: "Nantes".to_string() });
            assert_eq!(state_tag(&next), "loading");
        }
    }

    #[test]
    fn stale_completion_overwrites_newer_loading_state() {
        // A second submit replaced the state while the first request was in
        // flight; its late completion still wins.
        let newer = LookupState::Loading { city: "Brest".to_string() };
        let next = transition(
            &newer,
            LookupEvent::Completed(Ok(json!({ "city": "Paris", "temperature": 18 }))),
        );
        match next {
            LookupState::Success(card) => assert_eq!(card.city, "Paris"),
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_input_issues_no_request() {
        let source = StubSource::default();
        let calls = Arc::clone(&source.calls);
        let mut fetcher = WeatherFetcher::new(Box::new(source));

        let mut seen = Vec::new();
        fetcher.submit("   ", |s| seen.push(state_tag(s))).await;

        assert_eq!(seen, ["error"]);
        match fetcher.state() {
            LookupState::Error(msg) => assert_eq!(msg, EMPTY_INPUT_MESSAGE),
            other => panic!("expected Error, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_lookup_renders_loading_then_card() {
        let source = StubSource::scripted(Ok(json!({
            "city": "Paris",
            "temperature": 18.6,
            "condition": "Cloudy skies",
        })));
        let mut fetcher = WeatherFetcher::new(Box::new(source));

        let mut seen = Vec::new();
        fetcher.submit("Paris", |s| seen.push(state_tag(s))).await;

        assert_eq!(seen, ["loading", "success"]);
        match fetcher.state() {
            LookupState::Success(card) => {
                assert_eq!(card.city, "Paris");
                assert_eq!(card.temperature, "19°C");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_failure_renders_classified_message() {
        let source = StubSource::scripted(Err(FetchFailure::Http {
            status: 404,
            body: ErrorBodyParse::Parsed(ErrorBody { error: Some("no such city".to_string()) }),
        }));
        let mut fetcher = WeatherFetcher::new(Box::new(source));

        let mut seen = Vec::new();
        fetcher.submit("Atlantide", |s| seen.push(state_tag(s))).await;

        assert_eq!(seen, ["loading", "error"]);
        match fetcher.state() {
            LookupState::Error(msg) => assert_eq!(msg, "Ville introuvable dans l’API météo."),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
