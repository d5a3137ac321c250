use std::io;
use std::path::PathBuf;
use thiserror::Error;


/// Errors of the path length computation
#[derive(Debug, Error, PartialEq)]
pub enum LengthError {
    #[error("No LineString or MultiLineString geometry found")]
    UnsupportedGeometry,

    #[error("Invalid coordinate at position {index}: {reason}")]
    InvalidCoordinate { index: usize, reason: String },

    #[error("Malformed GeoJSON document: {0}")]
    MalformedDocument(String),

    #[error("Invalid lap time: {0}")]
    InvalidLapTime(String),
}

/// Errors of the command line tool
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Can't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?}: {source}")]
    Length {
        path: PathBuf,
        #[source]
        source: LengthError,
    },

    #[error(transparent)]
    Calc(#[from] LengthError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("No input files given")]
    NoInput,

    #[error("{failed} of {total} files could not be measured")]
    Failed { failed: usize, total: usize },
}
