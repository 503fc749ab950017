/// RGB565 Hex to Binary Converter
/// This tool converts hex text captures from an ESP32 camera into raw
/// RGB565 image files
///
/// The main entry point for the converter application. It parses command-line
/// arguments, resolves the configuration and coordinates the analysis and
/// conversion phases.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{error, info, LevelFilter};
use serde::Deserialize;

use rgb565_converter::core::analyzer::analyze_file;
use rgb565_converter::core::converter::{convert_file, ConvertOptions};
use rgb565_converter::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "rgb565_converter",
    version,
    about = "Convert hex text captures into raw RGB565 image files",
    long_about = "Converts a text capture of hexadecimal pixel data (as printed by the ESP32
camera firmware over its serial channel) into a raw binary RGB565 image:
- analyzes the capture and reports character/marker statistics
- extracts the payload between the DATA_START and DATA_END markers, if present
- strips everything that is not a hexadecimal digit and decodes the pairs
- writes the raw bytes and verifies the count against width x height x 2"
)]
struct Args {
    /// Path to the hex text capture (default: raw_rgb565.txt)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Path for the decoded binary image (default: image.rgb565)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Image width in pixels (default: 96)
    #[arg(long = "width", value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Image height in pixels (default: 96)
    #[arg(long = "height", value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Suppress console reports (errors are still logged)
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Redirect log output to a file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Configuration file contents
///
/// The recognized options mirror the conversion parameters; each one is
/// independently overridable by the matching CLI flag.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Main entry point function
fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    if !args.quiet {
        println!("{}", "RGB565 Hex to Binary Converter".bold());
        println!("{}", "=".repeat(40));
    }

    // Resolve configuration: defaults, then config file, then CLI flags
    let file_config = load_config(args.config.as_deref());
    let options = resolve_options(&args, file_config);

    // Analysis phase: diagnostic only, never fatal
    match analyze_file(&options.input) {
        Ok(report) => {
            if !args.quiet {
                println!("{}", output_formatter::format_analysis(&report));
            }
        }
        Err(e) => error!("Error analyzing file: {}", e),
    }

    if !args.quiet {
        println!("{}", "=".repeat(40));
    }

    // Conversion phase
    let success = match convert_file(&options) {
        Ok(report) => {
            if !args.quiet {
                println!("{}", output_formatter::format_conversion(&report));
            }
            true
        }
        Err(e) => {
            error!("Error: {}", e);
            false
        }
    };

    if !args.quiet {
        if success {
            println!("\n{}", "✓ Conversion completed successfully!".green().bold());
            println!(
                "You can now open '{}' in your RGB565 raw image viewer",
                options.output.display()
            );
            println!(
                "Settings: {}x{}, RGB565 format, Little Endian",
                options.width, options.height
            );
        } else {
            println!("\n{}", "✗ Conversion failed!".red().bold());
        }
    }

    if !success {
        process::exit(1);
    }
}

/// Set up logging with console or file output
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use std::io::Write;

        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Redirect to a file when requested
    if let Some(path) = &args.log_file {
        if let Ok(file) = File::create(path) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    // Initialize logger
    builder.init();

    Ok(())
}

/// Load configuration from file if provided
///
/// Missing or malformed configuration is logged and ignored so a bad config
/// file can never stop a conversion.
fn load_config(config_path: Option<&Path>) -> FileConfig {
    let Some(path) = config_path else {
        return FileConfig::default();
    };

    if !path.exists() {
        error!("Configuration file not found: {}", path.display());
        return FileConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(config_str) => match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                FileConfig::default()
            }
        },
        Err(e) => {
            error!("Error reading configuration file: {}", e);
            FileConfig::default()
        }
    }
}

/// Merge defaults, config file and CLI flags into the conversion options.
///
/// Each recognized option is independently overridable: a CLI flag wins over
/// the config file, which wins over the built-in default.
fn resolve_options(args: &Args, file_config: FileConfig) -> ConvertOptions {
    let defaults = ConvertOptions::default();

    ConvertOptions {
        input: args
            .input
            .clone()
            .or(file_config.input_file)
            .unwrap_or(defaults.input),
        output: args
            .output
            .clone()
            .or(file_config.output_file)
            .unwrap_or(defaults.output),
        width: args.width.or(file_config.width).unwrap_or(defaults.width),
        height: args.height.or(file_config.height).unwrap_or(defaults.height),
    }
}
