//! # pathlen tool
//!
//! Prints the length of race-track paths stored as GeoJSON files,
//! and the average speed of a lap around them.

use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pathlen::common::args::*;
use pathlen::common::errors::*;
use pathlen::common::settings::*;
use pathlen::common::util::*;
use pathlen::input::loader::load_file;
use pathlen::measure::length::*;
use pathlen::measure::speed::*;
use pathlen::common::args::MySubCommandEnum::*;


/// Loads a file and measures it, optionally per feature
fn measure_file(calc: &PathLengthCalculator, file: &str, per_feature: bool)
        -> Result<(f64, Vec<FeatureLength>), AppError> {
    let doc = load_file(file)?;
    let with_path = |source| AppError::Length {path: file.into(), source};

    let meters = calc.length(&doc).map_err(with_path)?;
    let parts = if per_feature {calc.feature_lengths(&doc).map_err(with_path)?} else {vec![]};
    info!(file, meters, "measured");
    Ok((meters, parts))
}

/// Prints one line per file; files that fail are reported and skipped
fn print_lengths(args: &CLIArgsLength, settings: &Settings) -> Result<(), AppError> {
    if args.files.is_empty() {
        return Err(AppError::NoInput);
    }
    let calc = PathLengthCalculator::new(settings.length_options());
    let width = args.files.iter().map(|f| display_name(f).len()).max().unwrap_or(0);

    let mut failed = 0;
    for file in &args.files {
        match measure_file(&calc, file, args.per_feature) {
            Ok((meters, parts)) => {
                println!("{:<width$} distance: {}", display_name(file), format_distance(meters, settings.unit));
                for part in parts {
                    let label = part.name.unwrap_or_else(|| format!("feature #{}", part.index));
                    println!("    {}: {}", label, format_distance(part.meters, settings.unit));
                }
            },
            Err(err) => {
                error!("{}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        Err(AppError::Failed {failed, total: args.files.len()})
    } else {
        Ok(())
    }
}

/// Prints track length and average lap speed
fn print_lap(args: &CLIArgsLap, settings: &Settings) -> Result<(), AppError> {
    let calc = PathLengthCalculator::new(settings.length_options());
    let (meters, _) = measure_file(&calc, &args.file, false)?;
    let speed = average_speed(meters, args.lap_time)?;

    println!("{} distance: {}", display_name(&args.file), format_distance(meters, settings.unit));
    println!("lap {} average speed: {} kph ({} mph)",
        format_lap_time(args.lap_time),
        format_number(speed.kph(), 2),
        format_number(speed.mph(), 2),
    );
    Ok(())
}

/// Does everything that is needed to measure the given files
fn measure(tl_commands: &TopLevelCommands) -> Result<(), AppError> {
    let args = tl_commands.args();
    let settings_yaml = get_settings_yaml(args.settings_file().map(String::as_str))?;
    let settings = Settings::make_settings(args, settings_yaml.as_ref())?;

    match &tl_commands.inner_enum {
        SubCommandLength(args) => print_lengths(args, &settings),
        SubCommandLap(args) => print_lap(args, &settings),
    }
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let tl_commands: TopLevelCommands = argh::from_env();
    init_logging(&tl_commands.log_level);

    match measure(&tl_commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
