//! Error type for the GeoNav CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use geonav_oracle::OracleBuildError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request file could not be read.
    #[error("could not read request file {path}: {source}")]
    ReadRequest {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The request file was not valid JSON for the expected shape.
    #[error("could not parse request file {path}: {source}")]
    ParseRequest {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// A POI carried an unknown category string.
    #[error("{0}")]
    InvalidCategory(String),
    /// The request named an unknown transport mode.
    #[error("{0}")]
    InvalidMode(String),
    /// The selection matched none of the supplied POIs.
    #[error("selection matches no POIs in the request")]
    EmptySelection,
    /// The oracle client could not be constructed.
    #[error(transparent)]
    OracleBuild(#[from] OracleBuildError),
    /// The report could not be encoded.
    #[error("could not encode report: {0}")]
    EncodeReport(#[source] serde_json::Error),
    /// The report could not be written out.
    #[error("could not write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
