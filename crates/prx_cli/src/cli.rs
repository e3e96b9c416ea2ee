use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

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
///
/// Flags given here override the matching values from `--scene`.
#[derive(Debug, Parser)]
#[command(name = "prx")]
#[command(about = "CPU ray tracer with Phong shading and mirror reflections")]
pub struct Args {
    /// JSON scene file (camera, render settings, objects, lights).
    /// Without it the built-in demo scene is rendered.
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image path; the format follows the extension
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Maximum number of mirror bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Render on the calling thread only
    #[arg(long)]
    pub single_threaded: bool,

    /// Let other objects block light
    #[arg(long)]
    pub shadows: bool,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
