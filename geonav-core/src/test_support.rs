//! Test-only, in-memory collaborators used by unit and behaviour tests.

use geo::Coord;

use crate::{Category, NotificationSink, Poi, Toast};

/// Notification sink that records every toast it receives.
///
/// Intended for assertions on notification tone and ordering in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Toasts in delivery order.
    pub toasts: Vec<Toast>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently delivered toast, if any.
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

/// Build a minimal POI for tests.
pub fn sample_poi(id: &str, name: &str, lng: f64, lat: f64) -> Poi {
    Poi::new(id, name, Category::Other, Coord { x: lng, y: lat })
}
