//! Points of interest and their categories.

use geo::Coord;

/// A named, geolocated place managed by the POI catalogue.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The core
/// performs no range validation on coordinates; out-of-range values are
/// carried through unchanged, matching the catalogue's permissive policy.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use geonav_core::{Category, Poi};
///
/// let poi = Poi::new("1", "Musée National", Category::Museum, Coord { x: -13.71, y: 9.51 });
/// assert_eq!(poi.id, "1");
/// assert_eq!(poi.category, Category::Museum);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Closed category classification.
    pub category: Category,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Free-text description.
    pub description: String,
    /// Optional postal or street address.
    pub address: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
}

impl Poi {
    /// Construct a `Poi` without description, address, or image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            location,
            description: String::new(),
            address: None,
            image: None,
        }
    }

    /// Set the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Closed enumeration of POI categories.
///
/// # Examples
/// ```
/// use geonav_core::Category;
///
/// assert_eq!(Category::GasStation.as_str(), "gas-station");
/// assert_eq!(Category::Park.to_string(), "park");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Restaurants and eateries.
    Restaurant,
    /// Hotels and guest houses.
    Hotel,
    /// Parks and green spaces.
    Park,
    /// Museums and galleries.
    Museum,
    /// Shops and markets.
    Shop,
    /// Fuel stations.
    GasStation,
    /// Car parks.
    Parking,
    /// Anything else.
    Other,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Park => "park",
            Self::Museum => "museum",
            Self::Shop => "shop",
            Self::GasStation => "gas-station",
            Self::Parking => "parking",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "hotel" => Ok(Self::Hotel),
            "park" => Ok(Self::Park),
            "museum" => Ok(Self::Museum),
            "shop" => Ok(Self::Shop),
            "gas-station" | "gas station" => Ok(Self::GasStation),
            "parking" => Ok(Self::Parking),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(Category::Restaurant, "restaurant")]
    #[case(Category::GasStation, "gas-station")]
    #[case(Category::Other, "other")]
    fn category_round_trips_through_str(#[case] category: Category, #[case] text: &str) {
        assert_eq!(category.as_str(), text);
        assert_eq!(Category::from_str(text).unwrap(), category);
    }

    #[rstest]
    fn category_parsing_rejects_unknown() {
        let err = Category::from_str("volcano").unwrap_err();
        assert!(err.contains("unknown category"));
    }

    #[rstest]
    fn poi_builder_sets_optional_fields() {
        let poi = Poi::new("7", "Hôtel Kaloum", Category::Hotel, Coord { x: 0.0, y: 0.0 })
            .with_description("Waterfront hotel")
            .with_address("Boulevard du Commerce");
        assert_eq!(poi.description, "Waterfront hotel");
        assert_eq!(poi.address.as_deref(), Some("Boulevard du Commerce"));
        assert!(poi.image.is_none());
    }
}
