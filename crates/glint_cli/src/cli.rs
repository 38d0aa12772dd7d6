use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Scene id that is accepted but renders nothing.
pub const DISABLED_SCENE: u32 = 3;

/// Log levels selectable on the command line
#[derive(Debug, Clone, ValueEnum)]
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A recursive Whitted-style ray tracer")]
pub struct Args {
    /// Output image path; the format follows the extension
    #[arg(long, default_value = "zout.bmp")]
    pub out: PathBuf,

    /// Scene to render (1 or 2; 3 is disabled and exits immediately)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3))]
    pub scene: u32,

    /// Number of worker threads (0 or invalid means 1; all cores if omitted)
    #[arg(long, value_parser = parse_threads, allow_hyphen_values = true)]
    pub threads: Option<usize>,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Maximum reflection/refraction depth
    #[arg(long, default_value_t = 5)]
    pub max_depth: u32,

    /// Average a 2x2 grid of samples per pixel
    #[arg(long)]
    pub supersample: bool,

    /// Environment map used by scene 2
    #[arg(long, default_value = "envmap.jpg")]
    pub envmap: PathBuf,

    /// OBJ mesh used by scene 2
    #[arg(long, default_value = "heliosbust.obj")]
    pub mesh: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Parse arguments, accepting `-out` style single-dash long flags.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }
}

/// Thread counts that are zero or do not parse fall back to a single worker.
fn parse_threads(s: &str) -> Result<usize, String> {
    Ok(s.trim().parse::<usize>().unwrap_or(0).max(1))
}

/// Rewrite single-dash long flags (`-out`) to their double-dash form.
///
/// Short flags (`-h`), double-dash flags and negative numbers are kept as is.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_long(s) => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(name) = arg.strip_prefix('-') else {
        return false;
    };

    name.len() > 1 && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
