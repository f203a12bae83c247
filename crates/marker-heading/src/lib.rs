//! High-level facade for the `marker-heading-*` workspace.
//!
//! This crate provides:
//! - re-exports of the geometric core (`marker-heading-core`),
//! - JSON I/O for recorded detector output and pipeline configuration,
//! - a [`ReplayDetector`] that feeds recorded detections through the pipeline,
//! - (feature `image`) an overlay renderer for `image::RgbImage`,
//! - (feature `cli`) the `marker-heading` binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! use marker_heading::{process_frame, DetectionLog, HeadingParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let log = DetectionLog::load("detections.json")?;
//! for markers in log.frames() {
//!     let report = process_frame(markers, &HeadingParams::default())?;
//!     println!("{:?} bearing={:?}", report.orientations, report.bearing);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `marker_heading::core`: corner sets, calculators, frame pipeline, collaborator traits.
//! - `marker_heading::detections`: [`DetectionLog`] loading and saving.
//! - `marker_heading::config`: [`HeadingConfig`] and [`OverlayStyle`].
//! - `marker_heading::replay`: [`ReplayDetector`].
//! - `marker_heading::overlay` (feature `image`): [`OverlayAnnotator`](overlay::OverlayAnnotator).

pub use marker_heading_core as core;

pub use marker_heading_core::{
    bearing_deg, orientation_deg, process_frame, process_image, BearingParams, CornerSet,
    FrameAnnotator, FrameReport, HeadingError, HeadingParams, MarkerDetector, MarkerId, MarkerMap,
};

pub mod config;
pub mod detections;
pub mod replay;

#[cfg(feature = "image")]
pub mod overlay;

pub use config::{ConfigError, HeadingConfig, OverlayStyle};
pub use detections::{DetectionIoError, DetectionLog};
pub use replay::{ReplayDetector, ReplayError};
