//! HTTP client for the external route-ordering oracle.
//!
//! The oracle is a generative text-completion service asked to return a
//! JSON-shaped visiting order for a set of stops. It is treated as an
//! opaque, unreliable collaborator: one request per invocation, no
//! retries, and every failure path degrades to the pass-through ordering
//! defined in `geonav-core` instead of surfacing an error.

#![forbid(unsafe_code)]

mod client;
mod wire;

pub use client::{
    GeminiRouteOracle, GeminiRouteOracleConfig, OracleBuildError, OracleError, API_KEY_ENV,
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_USER_AGENT,
};
pub use wire::OrderingReply;
