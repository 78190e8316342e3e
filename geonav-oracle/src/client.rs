//! `RouteOracle` implementation backed by a generative completion service.
//!
//! # Architecture
//!
//! The [`RouteOracle`] trait is synchronous to keep the core embeddable in
//! synchronous contexts. This client bridges the async HTTP call to the
//! sync interface by blocking on a Tokio runtime it owns. When called from
//! within an existing multi-threaded Tokio runtime it uses that runtime's
//! handle with [`tokio::task::block_in_place`] to avoid nested runtime
//! panics; inside a `current_thread` runtime it falls back to its own.
//!
//! # Degradation
//!
//! `order_stops` never fails. A missing credential or an empty stop list
//! short-circuits to the pass-through ordering without touching the
//! network; transport errors, non-2xx statuses, empty candidate lists, and
//! shape mismatches in the reply are logged and mapped to the same
//! pass-through with a fixed apology explanation. One request per
//! invocation, no retries, no caching.

use std::time::Duration;

use geo::Coord;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use geonav_core::{
    OrderedRoute, RouteOracle, Stop, DEGRADED_EXPLANATION, NOT_OPTIMISED_EXPLANATION,
};

use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, OrderingReply,
    Part,
};

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "GEONAV_API_KEY";

/// Default base URL of the completion service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model consulted for route ordering.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Default user agent for oracle requests.
pub const DEFAULT_USER_AGENT: &str = "geonav-routing/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for [`GeminiRouteOracle`] construction failures.
#[derive(Debug, Error)]
pub enum OracleBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Internal errors on the ordering path.
///
/// These never escape [`RouteOracle::order_stops`]; they are logged and
/// collapsed into the degraded pass-through result.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Transport-level failure reaching the service.
    #[error("network error calling {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("service returned HTTP {status} for {url}")]
    HttpStatus {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service produced no usable candidate text.
    #[error("service reply contained no candidate text")]
    EmptyReply,
    /// The reply body or embedded JSON did not match the expected shape.
    #[error("could not parse service reply: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
}

/// Configuration for [`GeminiRouteOracle`].
#[derive(Debug, Clone)]
pub struct GeminiRouteOracleConfig {
    /// Base URL of the completion service.
    pub base_url: String,
    /// Model name appended to the `generateContent` path.
    pub model: String,
    /// Service credential; `None` selects the no-op fallback path.
    pub api_key: Option<String>,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for GeminiRouteOracleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GeminiRouteOracleConfig {
    /// Default configuration with the credential read from [`API_KEY_ENV`].
    ///
    /// An absent or empty variable leaves the credential unset; that is a
    /// recognised state, not an error.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the service credential.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Per-stop payload embedded in the prompt.
#[derive(Serialize)]
struct StopPayload<'a> {
    id: &'a str,
    name: &'a str,
    lat: f64,
    lng: f64,
}

/// Route-ordering oracle speaking the `generateContent` wire format.
///
/// The client owns a Tokio runtime that is reused across calls, avoiding
/// the overhead of creating a new runtime per request.
pub struct GeminiRouteOracle {
    client: Client,
    config: GeminiRouteOracleConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for GeminiRouteOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRouteOracle")
            .field("client", &self.client)
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .field("has_api_key", &self.config.api_key.is_some())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl GeminiRouteOracle {
    /// Create an oracle configured from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn from_env() -> Result<Self, OracleBuildError> {
        Self::with_config(GeminiRouteOracleConfig::from_env())
    }

    /// Create an oracle with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: GeminiRouteOracleConfig) -> Result<Self, OracleBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(OracleBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(OracleBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the `generateContent` URL for the configured model.
    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the natural-language ordering instruction.
    ///
    /// Names the start coordinate and the stop list (id, name, lat, lng as
    /// JSON) and demands a strict JSON object in reply.
    fn build_prompt(start: Coord<f64>, stops: &[Stop]) -> Result<String, OracleError> {
        let payload: Vec<StopPayload<'_>> = stops
            .iter()
            .map(|stop| StopPayload {
                id: &stop.id,
                name: &stop.name,
                lat: stop.location.y,
                lng: stop.location.x,
            })
            .collect();
        let stops_json = serde_json::to_string(&payload).map_err(|err| OracleError::Parse {
            message: err.to_string(),
        })?;

        Ok(format!(
            "I am at position [{lat}, {lng}].\n\
             I must visit the following stops: {stops_json}.\n\
             Optimise the visiting order to minimise total travel time \
             (travelling salesman problem).\n\
             Return ONLY a JSON object with two properties:\n\
             1. \"orderedIds\": an array of the stop ids in optimised visiting order.\n\
             2. \"explanation\": a short description of the route.",
            lat = start.y,
            lng = start.x,
        ))
    }

    /// JSON schema the service is asked to follow.
    fn ordering_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "orderedIds": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "explanation": { "type": "STRING" }
            }
        })
    }

    /// Parse the JSON document embedded in the reply text.
    ///
    /// A shape mismatch is treated the same as a transport failure by the
    /// caller, never allowed to propagate downstream.
    fn parse_reply(text: &str) -> Result<OrderingReply, OracleError> {
        serde_json::from_str(text).map_err(|err| OracleError::Parse {
            message: err.to_string(),
        })
    }

    /// Convert a reqwest error to an [`OracleError`].
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> OracleError {
        if error.is_timeout() {
            return OracleError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return OracleError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            };
        }

        OracleError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Perform the single round-trip to the service.
    async fn request_ordering(
        &self,
        api_key: &str,
        prompt: String,
    ) -> Result<OrderingReply, OracleError> {
        let url = self.request_url();
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::ordering_schema(),
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: GenerateContentResponse =
            response.json().await.map_err(|err| OracleError::Parse {
                message: err.to_string(),
            })?;

        let text = body.first_text().ok_or(OracleError::EmptyReply)?;
        Self::parse_reply(text)
    }

    /// Drive `request_ordering` to completion from a synchronous caller.
    fn block_on_ordering(
        &self,
        api_key: &str,
        prompt: String,
    ) -> Result<OrderingReply, OracleError> {
        let future = self.request_ordering(api_key, prompt);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}

impl RouteOracle for GeminiRouteOracle {
    fn order_stops(&self, start: Coord<f64>, stops: &[Stop]) -> OrderedRoute {
        if stops.is_empty() {
            return OrderedRoute::passthrough(stops, NOT_OPTIMISED_EXPLANATION);
        }
        let Some(api_key) = self.config.api_key.as_deref() else {
            log::debug!("no oracle credential configured; returning pass-through ordering");
            return OrderedRoute::passthrough(stops, NOT_OPTIMISED_EXPLANATION);
        };

        let prompt = match Self::build_prompt(start, stops) {
            Ok(prompt) => prompt,
            Err(err) => {
                log::warn!("could not encode ordering prompt: {err}");
                return OrderedRoute::passthrough(stops, DEGRADED_EXPLANATION);
            }
        };

        match self.block_on_ordering(api_key, prompt) {
            Ok(reply) => OrderedRoute::from_oracle(reply.ordered_ids, reply.explanation),
            Err(err) => {
                log::warn!("route ordering degraded: {err}");
                OrderedRoute::passthrough(stops, DEGRADED_EXPLANATION)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sample_stops() -> Vec<Stop> {
        vec![
            Stop::new("1", "A", Coord { x: -13.6785, y: 9.537 }),
            Stop::new("2", "B", Coord { x: -13.71, y: 9.5123 }),
        ]
    }

    fn offline_oracle(api_key: Option<&str>) -> GeminiRouteOracle {
        // Port 1 on loopback is never serviced; any attempted call fails
        // fast with a connection error.
        let mut config = GeminiRouteOracleConfig::default()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_millis(500));
        config.api_key = api_key.map(str::to_owned);
        GeminiRouteOracle::with_config(config).expect("oracle should build")
    }

    #[rstest]
    fn request_url_includes_model_path() {
        let oracle = offline_oracle(None);
        assert_eq!(
            oracle.request_url(),
            format!("http://127.0.0.1:1/v1beta/models/{DEFAULT_MODEL}:generateContent")
        );
    }

    #[rstest]
    fn request_url_strips_trailing_slash() {
        let config = GeminiRouteOracleConfig::default().with_base_url("http://oracle.example.com/");
        let oracle = GeminiRouteOracle::with_config(config).expect("oracle should build");
        assert!(oracle
            .request_url()
            .starts_with("http://oracle.example.com/v1beta/"));
        assert!(!oracle.request_url().contains("//v1beta"));
    }

    #[rstest]
    fn prompt_names_start_and_every_stop(sample_stops: Vec<Stop>) {
        let start = Coord { x: -13.7122, y: 9.5092 };

        let prompt = GeminiRouteOracle::build_prompt(start, &sample_stops).expect("should build");

        assert!(prompt.contains("[9.5092, -13.7122]"));
        assert!(prompt.contains(r#""id":"1""#));
        assert!(prompt.contains(r#""name":"B""#));
        assert!(prompt.contains("orderedIds"));
    }

    #[rstest]
    fn parse_reply_accepts_expected_shape() {
        let reply = GeminiRouteOracle::parse_reply(
            r#"{"orderedIds": ["2", "1"], "explanation": "B then A"}"#,
        )
        .expect("should parse");
        assert_eq!(reply.ordered_ids, vec!["2", "1"]);
    }

    #[rstest]
    #[case("not json at all")]
    #[case(r#"{"orderedIds": [1, 2], "explanation": "ids must be strings"}"#)]
    #[case(r#"{"explanation": "missing ids"}"#)]
    fn parse_reply_rejects_malformed_text(#[case] text: &str) {
        assert!(matches!(
            GeminiRouteOracle::parse_reply(text),
            Err(OracleError::Parse { .. })
        ));
    }

    #[rstest]
    fn missing_credential_returns_input_order_without_network(sample_stops: Vec<Stop>) {
        let oracle = offline_oracle(None);
        let start = Coord { x: 0.0, y: 0.0 };

        let route = oracle.order_stops(start, &sample_stops);

        assert_eq!(route.ordered_ids, vec!["1", "2"]);
        assert_eq!(route.explanation, NOT_OPTIMISED_EXPLANATION);
        assert!(route.degraded);
    }

    #[rstest]
    fn empty_stop_list_short_circuits() {
        let oracle = offline_oracle(Some("key"));

        let route = oracle.order_stops(Coord { x: 5.0, y: 5.0 }, &[]);

        assert!(route.ordered_ids.is_empty());
        assert_eq!(route.explanation, NOT_OPTIMISED_EXPLANATION);
        assert!(route.degraded);
    }

    #[rstest]
    fn transport_failure_degrades_to_apology(sample_stops: Vec<Stop>) {
        let oracle = offline_oracle(Some("key"));

        let route = oracle.order_stops(Coord { x: 0.0, y: 0.0 }, &sample_stops);

        assert_eq!(route.ordered_ids, vec!["1", "2"]);
        assert_eq!(route.explanation, DEGRADED_EXPLANATION);
        assert!(route.degraded);
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = GeminiRouteOracleConfig::default()
            .with_base_url("http://example.com")
            .with_model("test-model")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn debug_output_hides_credential() {
        let oracle = offline_oracle(Some("secret"));
        let rendered = format!("{oracle:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("has_api_key"));
    }
}
