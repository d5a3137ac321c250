use std::sync::LazyLock;
use std::time::Duration;
use regex::Regex;

use crate::common::errors::*;
use crate::common::types::*;


const SECONDS_PER_HOUR: f64 = 3600.0;

static LAP_TIME_MS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)ms$").unwrap());
static LAP_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+):)?(\d+)(?:\.(\d{1,9}))?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
/// Average speed over a lap
pub struct Speed {
    pub meters_per_second: f64,
}

impl Speed {
    pub fn kph(&self) -> f64 {
        self.meters_per_second * SECONDS_PER_HOUR / METERS_PER_KILOMETER
    }

    pub fn mph(&self) -> f64 {
        self.meters_per_second * SECONDS_PER_HOUR / METERS_PER_MILE
    }
}

/// Converts miles per hour to kilometers per hour
pub fn mph_to_kph(mph: f64) -> f64 {
    mph * METERS_PER_MILE / METERS_PER_KILOMETER
}

/// Average speed for a distance covered in the given time; the sign of the distance is ignored
pub fn average_speed(meters: Meters, lap_time: Duration) -> Result<Speed, LengthError> {
    if lap_time.is_zero() {
        return Err(LengthError::InvalidLapTime("lap time must be greater than 0".to_string()));
    }
    Ok(Speed {meters_per_second: meters.abs() / lap_time.as_secs_f64()})
}

/// Formats a lap time as m:ss.fff
pub fn format_lap_time(lap_time: Duration) -> String {
    let millis = lap_time.as_millis();
    format!("{}:{:02}.{:03}", millis / 60_000, millis / 1000 % 60, millis % 1000)
}

/// Parses a lap time: "1:27.369", "87.369" or "87369ms"
pub fn parse_lap_time(value: &str) -> Result<Duration, LengthError> {
    let invalid = || LengthError::InvalidLapTime(format!("'{}' is not m:ss.fff, ss.fff or <n>ms", value));

    if let Some(caps) = LAP_TIME_MS.captures(value.trim()) {
        let ms = caps[1].parse::<u64>().map_err(|_| invalid())?;
        return Ok(Duration::from_millis(ms));
    }

    let caps = LAP_TIME.captures(value.trim()).ok_or_else(invalid)?;

    let minutes = match caps.get(1) {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| invalid())?,
        None => 0,
    };
    let seconds = caps[2].parse::<u64>().map_err(|_| invalid())?;
    if caps.get(1).is_some() && seconds >= 60 {
        return Err(invalid());
    }
    let nanos = match caps.get(3) {
        // right-pad the fraction to nanoseconds
        Some(f) => format!("{:0<9}", f.as_str()).parse::<u32>().map_err(|_| invalid())?,
        None => 0,
    };

    let secs = minutes.checked_mul(60)
        .and_then(|s| s.checked_add(seconds))
        .ok_or_else(invalid)?;
    Ok(Duration::new(secs, nanos))
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const ONE_HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn speed_of_sound_t0() {
        let speed = average_speed(767.0 * METERS_PER_MILE, ONE_HOUR).unwrap();
        assert!((speed.mph() - 767.0).abs() < 1e-9);
        assert!((speed.kph() - mph_to_kph(767.0)).abs() < 1e-9);
    }

    #[test]
    fn negative_distance_t0() {
        let speed = average_speed(-767.0 * METERS_PER_MILE, ONE_HOUR).unwrap();
        assert!((speed.mph() - 767.0).abs() < 1e-9);
    }

    #[test]
    fn zero_lap_time_t0() {
        assert_matches!(average_speed(1000.0, Duration::ZERO), Err(LengthError::InvalidLapTime(_)));
    }

    #[test]
    fn parse_lap_time_t0() {
        assert_eq!(parse_lap_time("1:27.369"), Ok(Duration::from_millis(87_369)));
        assert_eq!(parse_lap_time("87.369"), Ok(Duration::from_millis(87_369)));
        assert_eq!(parse_lap_time("87369ms"), Ok(Duration::from_millis(87_369)));
        assert_eq!(parse_lap_time(" 90 "), Ok(Duration::from_secs(90)));
        assert_eq!(parse_lap_time("2:00.5"), Ok(Duration::from_millis(120_500)));
    }

    #[test]
    fn parse_lap_time_invalid_t0() {
        for value in ["", "fast", "1:75.000", "1:27.", "-3.0", "1:2:3"] {
            assert_matches!(parse_lap_time(value), Err(LengthError::InvalidLapTime(_)), "{}", value);
        }
    }

    #[test]
    fn format_lap_time_t0() {
        assert_eq!(format_lap_time(Duration::from_millis(87_369)), "1:27.369");
        assert_eq!(format_lap_time(Duration::from_millis(5_004)), "0:05.004");
        assert_eq!(format_lap_time(Duration::from_secs(600)), "10:00.000");
    }

    #[test]
    fn mph_to_kph_t0() {
        assert!((mph_to_kph(1.0) - 1.609344).abs() < 1e-12);
    }
}
