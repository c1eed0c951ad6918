use clap::{Parser, ValueEnum};
use log::LevelFilter;
use recursive_raytracer::{LightSettings, RenderSettings, ShadingMode};

use crate::scenes::SceneKind;

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

#[derive(Parser, Debug)]
#[command(name = "recursive_raytracer")]
#[command(about = "Recursive ray tracer with point-light shadows and absorbing glass")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "beer")]
    pub scene: SceneKind,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Scatter events allowed per camera ray
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Edge length of the square tiles handed to worker threads
    #[arg(long, default_value_t = 32)]
    pub tile_size: u32,

    /// Cast shadow rays and add specular highlights
    #[arg(long)]
    pub shadows: bool,

    /// Shadow rays per hit; more than one gives soft shadows
    #[arg(long, default_value_t = 1)]
    pub shadow_samples: u32,

    /// Lens aperture; 0 is a pinhole
    #[arg(long, default_value_t = 0.0)]
    pub aperture: f64,

    /// Output PPM path, or "-" for stdout
    #[arg(short, long, default_value = "output_render.ppm")]
    pub output: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            tile_size: self.tile_size,
            mode: if self.shadows {
                ShadingMode::Shadowed
            } else {
                ShadingMode::PathTraced
            },
            light: LightSettings {
                shadow_samples: self.shadow_samples,
                ..LightSettings::default()
            },
        }
    }
}
