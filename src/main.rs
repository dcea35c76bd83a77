// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use log::{debug, LevelFilter, Level, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use clap::error::ErrorKind;

use c2rs::errors::AppError;
use c2rs::line_translator;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// c2rs - translate C header constants into Rust
///
/// Reads one C header file and writes the translated text to standard
/// output: `#define NAME VALUE` macros and `NAME = VALUE` enum-style
/// assignments become `pub const NAME: i32 = VALUE;` declarations, with
/// trailing block comments preserved as `///` doc comments. Lines that
/// match nothing are forwarded untouched.
#[derive(Parser, Debug)]
#[command(name = "c2rs")]
#[command(version = "1.0.0")]
#[command(about = "Translate C header constant definitions into Rust constants")]
#[command(long_about = "c2rs reads a C header file and prints Rust constant declarations.

EXAMPLES:
    c2rs errno.h                    # Translate a header to stdout
    c2rs errno.h > errno.rs         # Redirect into a Rust source file
    c2rs --log-level debug errno.h  # Show per-run statistics on stderr")]
struct CommandLineOptions {
    /// Input C header file to translate
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: CliLogLevel,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            // Logging goes to stderr so stdout stays clean for the
            // translated text.
            let mut stderr = io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Parse command line arguments using clap. A usage mistake prints
    // the short usage line on stdout and exits with status 1; help and
    // version keep their stock clap behavior.
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "c2rs".to_string());
            println!("Usage: {} input-file", program);
            std::process::exit(1);
        }
    };

    run(cli)
}

fn run(options: CommandLineOptions) -> Result<()> {
    CustomLogger::init(options.log_level.into()).context("Failed to initialize logger")?;

    debug!("Translating header file: {:?}", options.input_file);

    // A failed open propagates out of run and terminates with a
    // diagnostic trace; there is no recovery path.
    let file = File::open(&options.input_file)
        .map_err(|e| AppError::File(format!("{}: {}", options.input_file.display(), e)))?;
    let mut reader = BufReader::new(file);

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let stats = line_translator::translate(&mut reader, &mut writer)
        .map_err(AppError::Translation)?;

    debug!(
        "Translated {} lines: {} constants, {} doc comments, {} passed through",
        stats.lines, stats.constants, stats.doc_comments, stats.passed_through
    );

    Ok(())
}
