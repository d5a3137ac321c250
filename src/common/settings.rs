use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::common::args::*;
use crate::common::errors::*;
use crate::common::types::*;
use crate::measure::length::LengthOptions;


/// Reads the settings file
fn read_settings_file(filepath: &str) -> Result<String, AppError> {
    read_to_string(filepath)
        .map_err(|err| AppError::Settings(format!("Can't load settings from {}: {}", filepath, err)))
}

/// Parses settings text; an empty document gives `Yaml::Null`
pub fn parse_settings_yaml(s: &str) -> Result<Yaml, AppError> {
    let docs = YamlLoader::load_from_str(s)
        .map_err(|err| AppError::Settings(err.to_string()))?;
    Ok(docs.into_iter().next().unwrap_or(Yaml::Null))
}

/// Reads the settings file, if any.
///
/// An explicitly given file must exist; the default one is optional.
pub fn get_settings_yaml(filepath: Option<&str>) -> Result<Option<Yaml>, AppError> {
    let (filepath, required) = match filepath {
        Some(f) => (f, true),
        None => (DEFAULT_SETTINGS_FILE, false),
    };
    if !required && !Path::new(filepath).is_file() {
        debug!(filepath, "no settings file, using defaults");
        return Ok(None);
    }
    let s = read_settings_file(filepath)?;
    debug!(filepath, "loaded settings file");
    parse_settings_yaml(&s).map(Some)
}

/// Main settings structure
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    /// output unit
    pub unit: Unit,
    /// earth radius
    pub radius: EarthRadius,
    /// close every ring
    pub close_loop: bool,
}

impl Settings {
    /// Merges command line arguments over the settings file over defaults
    pub fn make_settings(args: &dyn Args, settings: Option<&Yaml>) -> Result<Self, AppError> {
        let defaults = Settings::default();
        let y = settings.unwrap_or(&Yaml::Null);

        let unit = match args.unit() {
            Some(unit) => unit,
            None => get_parameter_unit(y)?.unwrap_or(defaults.unit),
        };
        let radius = match args.radius() {
            Some(radius) => radius,
            None => get_parameter_radius(y)?.unwrap_or(defaults.radius),
        };
        let close_loop = args.close_loop() || get_parameter_bool(y, "close_loop")?.unwrap_or(defaults.close_loop);

        Ok(Settings {unit, radius, close_loop})
    }

    pub fn length_options(&self) -> LengthOptions {
        LengthOptions {radius: self.radius, close_loop: self.close_loop}
    }
}

fn invalid_parameter(parameter: &str) -> AppError {
    AppError::Settings(format!("invalid '{}' parameter in the settings file", parameter))
}

// Returns the unit parameter value
fn get_parameter_unit(y: &Yaml) -> Result<Option<Unit>, AppError> {
    match &y["unit"] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(s) => s.parse::<Unit>().map(Some).map_err(|_| invalid_parameter("unit")),
        _ => Err(invalid_parameter("unit")),
    }
}

// Returns the radius parameter value, a name or a number of meters
fn get_parameter_radius(y: &Yaml) -> Result<Option<EarthRadius>, AppError> {
    let radius = match &y["radius"] {
        Yaml::BadValue | Yaml::Null => return Ok(None),
        Yaml::String(s) => s.parse::<EarthRadius>(),
        Yaml::Real(s) => s.parse::<EarthRadius>(),
        Yaml::Integer(i) => i.to_string().parse::<EarthRadius>(),
        _ => return Err(invalid_parameter("radius")),
    };
    radius.map(Some).map_err(|_| invalid_parameter("radius"))
}

// Returns bool parameter value
fn get_parameter_bool(y: &Yaml, parameter: &str) -> Result<Option<bool>, AppError> {
    match &y[parameter] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        value => value.as_bool().map(Some).ok_or_else(|| invalid_parameter(parameter)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use assert_matches::assert_matches;

    fn length_args(argv: &[&str]) -> CLIArgsLength {
        let tl: TopLevelCommands = argh::FromArgs::from_args(&["pathlen"], argv).unwrap();
        match tl.inner_enum {
            MySubCommandEnum::SubCommandLength(args) => args,
            _ => panic!("not length"),
        }
    }

    #[test]
    fn defaults_t0() {
        let args = length_args(&["length", "a.json"]);
        let settings = Settings::make_settings(&args, None).unwrap();
        assert_eq!(settings, Settings {unit: Unit::Kilometers, radius: EarthRadius::Mean, close_loop: false});
    }

    #[test]
    fn file_over_defaults_t0() {
        let y = parse_settings_yaml("unit: mi\nradius: 6371000\nclose_loop: true\n").unwrap();
        let args = length_args(&["length", "a.json"]);
        let settings = Settings::make_settings(&args, Some(&y)).unwrap();
        assert_eq!(settings, Settings {
            unit: Unit::Miles,
            radius: EarthRadius::Custom(6_371_000.0),
            close_loop: true,
        });
    }

    #[test]
    fn args_over_file_t0() {
        let y = parse_settings_yaml("unit: mi\nradius: volumetric\n").unwrap();
        let args = length_args(&["length", "a.json", "--unit", "m", "--radius", "mean", "--close-loop"]);
        let settings = Settings::make_settings(&args, Some(&y)).unwrap();
        assert_eq!(settings, Settings {unit: Unit::Meters, radius: EarthRadius::Mean, close_loop: true});
        assert_eq!(settings.length_options(), LengthOptions {radius: EarthRadius::Mean, close_loop: true});
    }

    #[test]
    fn invalid_parameters_t0() {
        let args = length_args(&["length", "a.json"]);
        for text in ["unit: parsec", "radius: -5", "radius: [1, 2]", "close_loop: sometimes"] {
            let y = parse_settings_yaml(text).unwrap();
            assert_matches!(Settings::make_settings(&args, Some(&y)), Err(AppError::Settings(_)), "{}", text);
        }
    }

    #[test]
    fn empty_settings_t0() {
        assert_eq!(parse_settings_yaml("").unwrap(), Yaml::Null);
        assert_matches!(parse_settings_yaml("unit: [km"), Err(AppError::Settings(_)));
    }

    #[test]
    fn get_settings_yaml_t0() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unit: m").unwrap();
        let path = file.path().to_str().unwrap();

        let y = get_settings_yaml(Some(path)).unwrap().unwrap();
        assert_eq!(y["unit"].as_str(), Some("m"));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("settings.yaml");
        assert_matches!(get_settings_yaml(missing.to_str()), Err(AppError::Settings(_)));
    }
}
