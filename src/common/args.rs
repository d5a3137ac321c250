use std::time::Duration;
use argh::FromArgs;

use crate::common::types::*;
use crate::measure::speed::parse_lap_time;


pub const DEFAULT_SETTINGS_FILE: &str = "./settings.yaml";


/// Get output unit depending on specific command argument
fn get_unit(value: &str) -> Result<Unit, String> {
    value.parse::<Unit>()
}

/// Get earth radius depending on specific command argument
fn get_radius(value: &str) -> Result<EarthRadius, String> {
    value.parse::<EarthRadius>()
}

/// Get lap duration depending on specific command argument
fn get_lap_time(value: &str) -> Result<Duration, String> {
    parse_lap_time(value).map_err(|err| err.to_string())
}

/// Default log filter
fn default_log_level() -> String {
    "warn".to_string()
}

/// Measures race-track paths stored as GeoJSON
#[derive(FromArgs, PartialEq, Debug)]
pub struct TopLevelCommands {
    /// log filter used when RUST_LOG is not set (default: warn)
    #[argh(option, default = "default_log_level()")]
    pub log_level: String,

    #[argh(subcommand)]
    pub inner_enum: MySubCommandEnum,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum MySubCommandEnum {
    SubCommandLength(CLIArgsLength),
    SubCommandLap(CLIArgsLap),
}

/// Common arguments getters trait
pub trait Args {
    fn unit(&self) -> Option<Unit>;
    fn radius(&self) -> Option<EarthRadius>;
    fn close_loop(&self) -> bool;
    fn settings_file(&self) -> Option<&String>;
}

/// Subcommand printing path lengths
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "length")]
pub struct CLIArgsLength {
    /// paths of GeoJSON files to measure
    #[argh(positional)]
    pub files: Vec<String>,

    /// output unit: m, km or mi (default: km)
    #[argh(option, from_str_fn(get_unit))]
    pub unit: Option<Unit>,

    /// earth radius: mean, volumetric, equatorial or meters (default: mean)
    #[argh(option, from_str_fn(get_radius))]
    pub radius: Option<EarthRadius>,

    /// join the end of every path back to its start
    #[argh(switch)]
    pub close_loop: bool,

    /// print the length of each feature
    #[argh(switch)]
    pub per_feature: bool,

    /// settings file (default: ./settings.yaml, if present)
    #[argh(option)]
    pub settings: Option<String>,
}

impl Args for CLIArgsLength {
    fn unit(&self) -> Option<Unit> {
        self.unit
    }
    fn radius(&self) -> Option<EarthRadius> {
        self.radius
    }
    fn close_loop(&self) -> bool {
        self.close_loop
    }
    fn settings_file(&self) -> Option<&String> {
        self.settings.as_ref()
    }
}

/// Subcommand printing the average speed of a lap
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "lap")]
pub struct CLIArgsLap {
    /// path of the GeoJSON track file
    #[argh(positional)]
    pub file: String,

    /// lap time as m:ss.fff, ss.fff or <n>ms
    #[argh(positional, from_str_fn(get_lap_time))]
    pub lap_time: Duration,

    /// output unit for the track length: m, km or mi (default: km)
    #[argh(option, from_str_fn(get_unit))]
    pub unit: Option<Unit>,

    /// earth radius: mean, volumetric, equatorial or meters (default: mean)
    #[argh(option, from_str_fn(get_radius))]
    pub radius: Option<EarthRadius>,

    /// join the end of the track back to its start
    #[argh(switch)]
    pub close_loop: bool,

    /// settings file (default: ./settings.yaml, if present)
    #[argh(option)]
    pub settings: Option<String>,
}

impl Args for CLIArgsLap {
    fn unit(&self) -> Option<Unit> {
        self.unit
    }
    fn radius(&self) -> Option<EarthRadius> {
        self.radius
    }
    fn close_loop(&self) -> bool {
        self.close_loop
    }
    fn settings_file(&self) -> Option<&String> {
        self.settings.as_ref()
    }
}

impl TopLevelCommands {
    /// Arguments shared by every subcommand
    pub fn args(&self) -> &dyn Args {
        match &self.inner_enum {
            MySubCommandEnum::SubCommandLength(args) => args,
            MySubCommandEnum::SubCommandLap(args) => args,
        }
    }
}
