//! # Cli
//!
//! Argument parsing for the `oclminify` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Minifies a single OpenCL C translation unit.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The source file to minify. Omit (or pass "-") to read from stdin.
    #[arg(index = 1)]
    pub input: Option<PathBuf>,

    /// Write the minified source here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Assign kernels fresh short names too, instead of only their
    /// arguments and locals.
    #[arg(long)]
    pub rename_kernels: bool,

    /// Append this suffix to every kernel name. Implies --rename-kernels.
    #[arg(long, default_value = "")]
    pub global_postfix: String,

    /// Emit `{source, kernels, functions, diagnostics}` as JSON instead of
    /// writing the minified source alone.
    #[arg(long)]
    pub json: bool,

    /// Accepted for compatibility with the original tool's orthogonal
    /// post-processing step; this binary does not compress its output any
    /// further than the rewrite already does.
    #[arg(long)]
    pub compress: bool,

    /// Accepted for compatibility with the original tool; this binary does
    /// not emit a C header of the renamed kernel signatures.
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Specify the log level of the minifier.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

/// Enum for specifying the log level of oclminify.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// Also log non-fatal findings raised during the rewrite.
    #[value(alias("1"))]
    Warn,

    /// Also log the stages of the pipeline as they run.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally.
    #[value(alias("3"))]
    Debug,

    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
