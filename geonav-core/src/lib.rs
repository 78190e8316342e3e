//! Core domain types for the GeoNav routing console.
//!
//! This crate defines the vocabulary shared by the oracle client and the
//! map renderer: points of interest, stop selections, ordered routes, and
//! the trait seams for the external ordering oracle and the notification
//! sink. It deliberately contains no I/O; HTTP and rendering live in
//! sibling crates.

#![forbid(unsafe_code)]

mod notify;
mod oracle;
mod poi;
mod route;
mod selection;
pub mod test_support;

pub use notify::{NotificationSink, Toast, ToastTone};
pub use oracle::RouteOracle;
pub use poi::{Category, Poi};
pub use route::{OrderedRoute, Stop, DEGRADED_EXPLANATION, NOT_OPTIMISED_EXPLANATION};
pub use selection::{StopSelection, TransportMode};
