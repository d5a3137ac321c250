use std::path::Path;

use crate::common::types::*;


/// Formats a number with at most `precision` decimals, dropping trailing zeros
pub fn format_number(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Formats a distance in the given unit, e.g. "5.891 km"
pub fn format_distance(meters: Meters, unit: Unit) -> String {
    let precision = match unit {
        Unit::Meters => 1,
        Unit::Kilometers | Unit::Miles => 3,
    };
    format!("{} {}", format_number(unit.from_meters(meters), precision), unit.symbol())
}

/// Name of the file without directories, for console output
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}
