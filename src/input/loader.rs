use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

use crate::common::errors::*;
use crate::input::geojson::*;


/// Reads and decodes a GeoJSON file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<GeoJson, AppError> {
    let path = path.as_ref();
    let content = read_to_string(path)
        .map_err(|source| AppError::Io {path: path.to_path_buf(), source})?;
    debug!(path = %path.display(), bytes = content.len(), "read GeoJSON file");

    content.parse::<GeoJson>()
        .map_err(|source| AppError::Length {path: path.to_path_buf(), source})
}
