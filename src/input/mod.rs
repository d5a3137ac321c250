pub mod geojson;
pub mod loader;
