//! Interactive stop selection state.
//!
//! The selection is a set of POI ids plus the chosen transport mode. It
//! carries no ordering; ordering is the oracle's job.

use std::collections::HashSet;

/// Transport modes offered by the console.
///
/// Selection state only; the ordering oracle receives coordinates, not the
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    /// Travel by car.
    #[default]
    Driving,
    /// Travel on foot.
    Walking,
    /// Public transport.
    Transit,
    /// Travel by bicycle.
    Bicycling,
    /// Travel by air.
    Flight,
}

impl TransportMode {
    /// Return the mode as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
            Self::Bicycling => "bicycling",
            Self::Flight => "flight",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "transit" => Ok(Self::Transit),
            "bicycling" => Ok(Self::Bicycling),
            "flight" => Ok(Self::Flight),
            _ => Err(format!("unknown transport mode '{s}'")),
        }
    }
}

/// The user's chosen subset of POIs awaiting ordering.
///
/// Membership follows set semantics: toggling an id twice restores the
/// previous state. There are no error conditions and no side effects
/// beyond the selection's own state.
///
/// # Examples
/// ```
/// use geonav_core::StopSelection;
///
/// let mut selection = StopSelection::new();
/// selection.toggle("a");
/// assert!(selection.contains("a"));
/// selection.toggle("a");
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopSelection {
    ids: HashSet<String>,
    mode: TransportMode,
}

impl StopSelection {
    /// Create an empty selection with the default transport mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the selection if absent, remove it if present.
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Whether `id` is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected stops.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no stops are selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over selected ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Set the transport mode.
    pub fn set_mode(&mut self, mode: TransportMode) {
        self.mode = mode;
    }

    /// The currently chosen transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn toggle_is_idempotent_under_repeated_pairs() {
        let mut selection = StopSelection::new();
        selection.toggle("1");
        selection.toggle("2");
        selection.toggle("1");
        selection.toggle("1");
        assert!(selection.contains("1"));
        assert!(selection.contains("2"));
        assert_eq!(selection.len(), 2);
    }

    #[rstest]
    fn toggle_enforces_set_semantics() {
        let mut selection = StopSelection::new();
        selection.toggle("1");
        selection.toggle("1");
        assert!(selection.is_empty());
    }

    #[rstest]
    fn mode_defaults_to_driving() {
        let selection = StopSelection::new();
        assert_eq!(selection.mode(), TransportMode::Driving);
    }

    #[rstest]
    #[case("walking", TransportMode::Walking)]
    #[case("FLIGHT", TransportMode::Flight)]
    fn mode_parses_case_insensitively(#[case] text: &str, #[case] expected: TransportMode) {
        assert_eq!(TransportMode::from_str(text).unwrap(), expected);
    }

    #[rstest]
    fn mode_parsing_rejects_unknown() {
        assert!(TransportMode::from_str("teleport").is_err());
    }
}
