//! The `optimize` subcommand: request loading, ordering, and reporting.

use std::io::Write;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use serde::{Deserialize, Serialize};

use geonav_core::{Category, Poi, RouteOracle, Stop, StopSelection, TransportMode};
use geonav_map::build_route_path;
use geonav_oracle::{GeminiRouteOracle, GeminiRouteOracleConfig};

use crate::CliError;

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Load a JSON request holding a POI catalogue, a stop \
                  selection, and an optional start position; ask the \
                  completion-service oracle for a visiting order; and print \
                  the ordered route with its resolved path. All oracle \
                  failures degrade to the pass-through ordering.",
    about = "Order a stop selection into a route"
)]
pub struct OptimizeArgs {
    /// Path to a JSON optimize request.
    #[arg(value_name = "path")]
    pub request_path: Utf8PathBuf,
    /// Override the completion service base URL.
    #[arg(long, value_name = "url")]
    pub base_url: Option<String>,
    /// Override the model name.
    #[arg(long, value_name = "name")]
    pub model: Option<String>,
    /// Override the service credential (defaults to $GEONAV_API_KEY).
    #[arg(long, value_name = "key")]
    pub api_key: Option<String>,
}

/// A latitude/longitude pair as it appears on the wire.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

/// POI record in the request document.
#[derive(Debug, Deserialize)]
struct PoiRecord {
    id: String,
    name: String,
    category: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl PoiRecord {
    fn into_poi(self) -> Result<Poi, CliError> {
        let category = Category::from_str(&self.category).map_err(CliError::InvalidCategory)?;
        let mut poi = Poi::new(
            self.id,
            self.name,
            category,
            Coord {
                x: self.longitude,
                y: self.latitude,
            },
        );
        poi.description = self.description;
        poi.address = self.address;
        poi.image = self.image;
        Ok(poi)
    }
}

/// The optimize request document.
#[derive(Debug, Deserialize)]
struct OptimizeRequest {
    /// Start position; defaults to the first selected stop when absent.
    #[serde(default)]
    start: Option<LatLng>,
    /// Transport mode label; selection state only.
    #[serde(default)]
    mode: Option<String>,
    /// POI catalogue.
    pois: Vec<PoiRecord>,
    /// Selected POI ids.
    selected: Vec<String>,
}

/// Report printed on success.
#[derive(Debug, Serialize)]
struct OptimizeReport {
    #[serde(rename = "orderedIds")]
    ordered_ids: Vec<String>,
    explanation: String,
    degraded: bool,
    /// Resolved path as lat/lng pairs, starting at the start position.
    path: Vec<LatLng>,
}

/// Execute the subcommand, writing the report to `out`.
pub(crate) fn run(args: &OptimizeArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let request = load_request(&args.request_path)?;
    let (pois, selection, start) = resolve_request(request)?;

    let oracle = GeminiRouteOracle::with_config(oracle_config(args))?;
    let report = order_and_report(&oracle, &pois, &selection, start);

    let rendered = serde_json::to_string_pretty(&report).map_err(CliError::EncodeReport)?;
    writeln!(out, "{rendered}").map_err(CliError::WriteReport)
}

fn load_request(path: &Utf8PathBuf) -> Result<OptimizeRequest, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadRequest {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseRequest {
        path: path.clone(),
        source,
    })
}

/// Turn the wire document into domain values.
///
/// The start position falls back to the first selected stop so the
/// ordering call never lacks a start point.
fn resolve_request(
    request: OptimizeRequest,
) -> Result<(Vec<Poi>, StopSelection, Coord<f64>), CliError> {
    let pois = request
        .pois
        .into_iter()
        .map(PoiRecord::into_poi)
        .collect::<Result<Vec<_>, _>>()?;

    let mut selection = StopSelection::new();
    for id in &request.selected {
        selection.toggle(id.clone());
    }
    if let Some(mode) = request.mode.as_deref() {
        selection.set_mode(TransportMode::from_str(mode).map_err(CliError::InvalidMode)?);
    }

    let first_selected = pois
        .iter()
        .find(|poi| selection.contains(&poi.id))
        .ok_or(CliError::EmptySelection)?;
    let start = request
        .start
        .map_or(first_selected.location, Coord::from);

    Ok((pois, selection, start))
}

fn oracle_config(args: &OptimizeArgs) -> GeminiRouteOracleConfig {
    let mut config = GeminiRouteOracleConfig::from_env();
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(api_key) = &args.api_key {
        config = config.with_api_key(api_key);
    }
    config
}

fn order_and_report(
    oracle: &GeminiRouteOracle,
    pois: &[Poi],
    selection: &StopSelection,
    start: Coord<f64>,
) -> OptimizeReport {
    let stops: Vec<Stop> = pois
        .iter()
        .filter(|poi| selection.contains(&poi.id))
        .map(Stop::from_poi)
        .collect();
    let route = oracle.order_stops(start, &stops);
    let path = build_route_path(start, &route.ordered_ids, pois)
        .into_iter()
        .map(|point| LatLng {
            lat: point.y,
            lng: point.x,
        })
        .collect();

    OptimizeReport {
        ordered_ids: route.ordered_ids,
        explanation: route.explanation,
        degraded: route.degraded,
        path,
    }
}
