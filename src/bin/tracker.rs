//! Tracker CLI - Command-line interface for the workout tracker
//!
//! Commands:
//! - summary: Summarize sensor packages read from a file or stdin
//! - calc: Summarize one package given on the command line
//! - demo: Summarize the built-in sample packages
//! - validate: Validate sensor packages
//! - codes: List supported workout codes

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use workout_tracker::package::{PackageReader, SensorPackage};
use workout_tracker::{
    sample_packages, BatchReport, InfoMessage, WorkoutKind, WorkoutTracker, PRODUCER_NAME,
    TRACKER_VERSION,
};

/// Tracker - workout statistics from fitness sensor packages
#[derive(Parser)]
#[command(name = "tracker")]
#[command(author = "Synheart AI Inc")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Compute distance, speed and calories from sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize sensor packages from a file or stdin
    Summary {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Keep going when a package fails; failures are logged
        #[arg(long)]
        keep_going: bool,
    },

    /// Summarize one package given on the command line
    Calc {
        /// Workout code (SWM, RUN, WLK)
        code: String,

        /// Positional readings for the workout code
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Summarize the built-in sample packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Validate sensor packages
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported workout codes and their readings
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per workout
    Text,
    /// Newline-delimited JSON (one summary per line)
    Ndjson,
    /// JSON array of summaries
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    match cli.command {
        Commands::Summary {
            input,
            input_format,
            output_format,
            keep_going,
        } => cmd_summary(&input, input_format, output_format, keep_going),

        Commands::Calc {
            code,
            values,
            output_format,
        } => cmd_calc(code, values, output_format),

        Commands::Demo { output_format } => cmd_demo(output_format),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Codes { json } => cmd_codes(json),
    }
}

fn cmd_summary(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    keep_going: bool,
) -> Result<(), TrackerCliError> {
    let packages = read_packages(input, input_format)?;

    if packages.is_empty() {
        return Err(TrackerCliError::NoPackages);
    }

    let mut tracker = WorkoutTracker::new();
    let report = tracker.process_batch(&packages);

    if !keep_going {
        if let Some((index, e)) = report.failures.into_iter().next() {
            return Err(TrackerCliError::PackageFailed(index, e));
        }
    } else if !report.is_clean() {
        info!(
            "{} of {} packages skipped",
            report.failures.len(),
            packages.len()
        );
    }

    print!("{}", format_output(&report.summaries, &output_format)?);

    Ok(())
}

fn cmd_calc(
    code: String,
    values: Vec<f64>,
    output_format: OutputFormat,
) -> Result<(), TrackerCliError> {
    let package = SensorPackage::new(code, values);
    let info = WorkoutTracker::new()
        .process(&package)
        .map_err(|e| TrackerCliError::PackageFailed(0, e))?;

    print!("{}", format_output(&[info], &output_format)?);

    Ok(())
}

fn cmd_demo(output_format: OutputFormat) -> Result<(), TrackerCliError> {
    let mut tracker = WorkoutTracker::new();
    let BatchReport { summaries, failures } = tracker.process_batch(&sample_packages());

    if let Some((index, e)) = failures.into_iter().next() {
        return Err(TrackerCliError::PackageFailed(index, e));
    }

    print!("{}", format_output(&summaries, &output_format)?);

    Ok(())
}

fn cmd_validate(
    input: &Path,
    input_format: InputFormat,
    json: bool,
) -> Result<(), TrackerCliError> {
    let packages = read_packages(input, input_format)?;
    let failures = PackageReader::validate_packages(&packages);

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - failures.len(),
        invalid_packages: failures.len(),
        errors: failures
            .iter()
            .map(|f| ValidationErrorDetail {
                index: f.index,
                workout_type: f.workout_type.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Package {} (index {}): {}",
                    err.workout_type, err.index, err.error
                );
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(TrackerCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

fn cmd_codes(json: bool) -> Result<(), TrackerCliError> {
    let codes: Vec<CodeInfo> = WorkoutKind::ALL
        .iter()
        .map(|kind| CodeInfo {
            code: kind.as_code(),
            workout: kind.display_name(),
            fields: kind.fields(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        println!("{} {}", PRODUCER_NAME, TRACKER_VERSION);
        println!();
        for code in &codes {
            println!("{}  {:<14} [{}]", code.code, code.workout, code.fields.join(", "));
        }
    }

    Ok(())
}

// Helper functions

fn read_packages(
    input: &Path,
    input_format: InputFormat,
) -> Result<Vec<SensorPackage>, TrackerCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            info!("reading packages from terminal, finish with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    debug!("read {} packages from {}", packages.len(), input.display());

    Ok(packages)
}

fn format_output(
    summaries: &[InfoMessage],
    format: &OutputFormat,
) -> Result<String, TrackerCliError> {
    match format {
        OutputFormat::Text | OutputFormat::Ndjson if summaries.is_empty() => Ok(String::new()),
        OutputFormat::Text => {
            let lines: Vec<String> = summaries.iter().map(InfoMessage::get_message).collect();
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(serde_json::to_string(summary)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(summaries)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(summaries)? + "\n"),
    }
}

// Error types

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Parse(workout_tracker::TrackerError),
    Json(serde_json::Error),
    PackageFailed(usize, workout_tracker::TrackerError),
    NoPackages,
    ValidationFailed(usize),
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<workout_tracker::TrackerError> for TrackerCliError {
    fn from(e: workout_tracker::TrackerError) -> Self {
        TrackerCliError::Parse(e)
    }
}

impl From<serde_json::Error> for TrackerCliError {
    fn from(e: serde_json::Error) -> Self {
        TrackerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrackerCliError::Parse(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Each package needs a workout_type and a data array".to_string()),
            },
            TrackerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            TrackerCliError::PackageFailed(index, e) => CliError {
                code: package_error_code(&e).to_string(),
                message: format!("Package {}: {}", index, e),
                hint: Some("Run 'tracker codes' for the expected readings".to_string()),
            },
            TrackerCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            TrackerCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}

fn package_error_code(e: &workout_tracker::TrackerError) -> &'static str {
    use workout_tracker::TrackerError;

    match e {
        TrackerError::UnknownWorkout(_) => "UNKNOWN_WORKOUT",
        TrackerError::NotImplemented(_) => "NOT_IMPLEMENTED",
        TrackerError::WrongArity { .. } => "WRONG_ARITY",
        TrackerError::InvalidValue { .. } => "INVALID_VALUE",
        TrackerError::ParseError(_) | TrackerError::JsonError(_) => "PARSE_ERROR",
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}

#[derive(serde::Serialize)]
struct CodeInfo {
    code: &'static str,
    workout: &'static str,
    fields: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn running_summary() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_line_formats_print_nothing_without_summaries() {
        assert_eq!(format_output(&[], &OutputFormat::Text).unwrap(), "");
        assert_eq!(format_output(&[], &OutputFormat::Ndjson).unwrap(), "");
        assert_eq!(format_output(&[], &OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_text_output_ends_with_newline() {
        let output = format_output(&[running_summary()], &OutputFormat::Text).unwrap();

        assert_eq!(output, format!("{}\n", running_summary().get_message()));
    }

    #[test]
    fn test_ndjson_output_one_record_per_line() {
        let summaries = vec![running_summary(), running_summary()];
        let output = format_output(&summaries, &OutputFormat::Ndjson).unwrap();

        assert_eq!(output.lines().count(), 2);
        let parsed: InfoMessage = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(parsed, running_summary());
    }
}
