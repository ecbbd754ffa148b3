use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Whitted-style ray tracer for spheres over a checkerboard")]
pub struct Args {
    /// JSON scene/render config; the built-in showcase is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output image path (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of render threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
