//! marker-heading CLI: headings and bearings from recorded marker detections.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use image::ImageReader;
use serde::Serialize;

use marker_heading::overlay::OverlayAnnotator;
use marker_heading::{
    process_frame, process_image, DetectionLog, FrameAnnotator, FrameReport, HeadingConfig,
    ReplayDetector, ReplayError,
};

#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};
#[cfg(feature = "tracing")]
use tracing::{info, warn};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "marker-heading")]
#[command(about = "Marker headings and three-marker bearing from recorded detections")]
#[command(version)]
struct Cli {
    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Emit JSON log lines (only with the `tracing` feature).
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute headings and the bearing for every recorded frame.
    Angles(AnglesArgs),

    /// Draw the overlay for one recorded frame onto an image.
    Annotate(AnnotateArgs),
}

#[derive(Debug, Clone, Args)]
struct AnglesArgs {
    /// Recorded detections (JSON marker map or array of marker maps).
    #[arg(long)]
    detections: PathBuf,

    /// Optional config JSON (`{"heading": ..., "overlay": ...}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to write the report JSON; printed to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct AnnotateArgs {
    /// Input image.
    #[arg(long)]
    image: PathBuf,

    /// Recorded detections for the image.
    #[arg(long)]
    detections: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Index of the recorded frame to draw.
    #[arg(long, default_value = "0")]
    frame: usize,

    /// Optional config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the frame report JSON here.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[cfg(not(feature = "tracing"))]
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Serialize)]
struct FrameEntry {
    index: usize,
    report: Option<FrameReport>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnglesReport {
    detections_path: String,
    num_frames: usize,
    frames: Vec<FrameEntry>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match cli.command {
        Commands::Angles(args) => run_angles(&args),
        Commands::Annotate(args) => run_annotate(&args),
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) -> CliResult<()> {
    marker_heading::core::init_with_level(cli.log_level.into())?;
    if cli.log_json {
        warn!("--log-json needs the `tracing` feature; using plain logs");
    }
    Ok(())
}

/// `RUST_LOG` drives the filter here; `--log-level` is ignored.
#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) -> CliResult<()> {
    marker_heading::core::init_tracing(cli.log_json);
    Ok(())
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(args)))]
fn run_angles(args: &AnglesArgs) -> CliResult<()> {
    let cfg = load_config(args.config.as_deref())?;
    let log = DetectionLog::load(&args.detections)?;
    info!("{} recorded frame(s)", log.len());

    let frames: Vec<FrameEntry> = log
        .frames()
        .iter()
        .enumerate()
        .map(|(index, markers)| match process_frame(markers, &cfg.heading) {
            Ok(report) => FrameEntry {
                index,
                report: Some(report),
                error: None,
            },
            Err(err) => {
                warn!("frame {index}: {err}");
                FrameEntry {
                    index,
                    report: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    let report = AnglesReport {
        detections_path: args.detections.to_string_lossy().into_owned(),
        num_frames: frames.len(),
        frames,
    };
    let json = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(path) => {
            write_text(path, &json)?;
            println!("wrote report JSON to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(args)))]
fn run_annotate(args: &AnnotateArgs) -> CliResult<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut canvas = ImageReader::open(&args.image)?.decode()?.to_rgb8();

    let mut detector: ReplayDetector<image::RgbImage> =
        ReplayDetector::new(DetectionLog::load(&args.detections)?);
    detector.skip_frames(args.frame);
    let (markers, report) = process_image::<_, ReplayError>(&mut detector, &canvas, &cfg.heading)?;
    match report.bearing {
        Some(deg) => info!("{} markers, bearing {deg:.2} deg", report.num_markers),
        None => info!("{} markers, bearing unavailable", report.num_markers),
    }

    let annotator = OverlayAnnotator::new(cfg.overlay.clone(), cfg.heading.bearing);
    annotator.annotate(&mut canvas, &markers, &report)?;

    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)?;
    }
    canvas.save(&args.out)?;
    println!("wrote annotated image to {}", args.out.display());

    if let Some(path) = &args.report {
        write_text(path, &serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> CliResult<HeadingConfig> {
    match path {
        Some(path) => Ok(HeadingConfig::load(path)?),
        None => Ok(HeadingConfig::default()),
    }
}

fn write_text(path: &Path, text: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
