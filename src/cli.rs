use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use eray_rtiow::prelude::{CameraConfig, PpmFormat, RenderConfig};

#[derive(Debug, Clone, ValueEnum)]
/// Verbosity accepted by `--log-level`, mapped onto [LevelFilter].
pub enum LogLevel {
    /// Failures only
    Error,
    /// Failures and warnings
    Warn,
    /// Render start, 10% progress steps and timing
    Info,
    /// Every scanline
    Debug,
    /// Derived configuration
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text P3
    Ascii,
    /// Raw P6
    Binary,
}

impl From<OutputFormat> for PpmFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Ascii => PpmFormat::Ascii,
            OutputFormat::Binary => PpmFormat::Binary,
        }
    }
}

/// Accepts either a decimal (`1.5`) or a fraction (`16/9`).
fn parse_aspect_ratio(value: &str) -> Result<f64, String> {
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid number `{v}`: {err}"))
    };

    match value.split_once('/') {
        Some((num, den)) => Ok(parse(num)? / parse(den)?),
        None => parse(value),
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "eray-rtiow")]
#[command(about = "Renders a normal-shaded sphere scene to a PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image width / height, as a decimal or a fraction
    #[arg(long, default_value = "16/9", value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    /// Viewport height in world units
    #[arg(long, default_value_t = 2.)]
    pub viewport_height: f64,

    /// Distance from the camera to the viewport
    #[arg(long, default_value_t = 1.)]
    pub focal_length: f64,

    /// PPM flavour
    #[arg(short, long, value_enum, default_value = "ascii")]
    pub format: OutputFormat,

    /// Output file path, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            camera: CameraConfig {
                viewport_height: self.viewport_height,
                focal_length: self.focal_length,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aspect_ratio_forms() {
        assert_eq!(Ok(1.5), parse_aspect_ratio("1.5"));
        assert_eq!(Ok(2.), parse_aspect_ratio(" 4 / 2 "));
        assert!(parse_aspect_ratio("wide").is_err());
        assert!(parse_aspect_ratio("16/").is_err());
    }

    #[test]
    fn defaults_match_library() {
        let args = Args::parse_from(["eray-rtiow"]);

        assert_eq!(RenderConfig::default(), args.render_config());
        assert!(args.output.is_none());
        assert_eq!(PpmFormat::Ascii, PpmFormat::from(args.format));
    }

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "eray-rtiow",
            "--width",
            "200",
            "--aspect-ratio",
            "2",
            "-f",
            "binary",
            "-o",
            "out/image.ppm",
        ]);

        assert_eq!((200, 100), args.render_config().size());
        assert_eq!(Some(PathBuf::from("out/image.ppm")), args.output);
        assert_eq!(PpmFormat::Binary, PpmFormat::from(args.format));
    }

    #[test]
    fn log_levels() {
        let args = Args::parse_from(["eray-rtiow"]);
        assert_eq!(LevelFilter::Info, LevelFilter::from(args.log_level));

        for (name, level) in [
            ("error", LevelFilter::Error),
            ("warn", LevelFilter::Warn),
            ("debug", LevelFilter::Debug),
            ("trace", LevelFilter::Trace),
        ] {
            let args = Args::parse_from(["eray-rtiow", "--log-level", name]);
            assert_eq!(level, LevelFilter::from(args.log_level));
        }

        assert!(Args::try_parse_from(["eray-rtiow", "--log-level", "loud"]).is_err());
    }
}
