pub mod haversine;
pub mod length;
pub mod speed;
