//! Core geometry for marker heading estimation.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete marker detector or image type: a detector is any
//! [`MarkerDetector`] that turns an image into a [`MarkerMap`], and a renderer
//! is any [`FrameAnnotator`].
//!
//! All angles are computed in the *flipped-y* convention: image `y` grows
//! downwards, so it is negated before any trigonometry and angles are measured
//! counter-clockwise from the positive `x` axis.

mod bearing;
mod corners;
mod error;
mod frame;
mod logger;
mod orientation;
mod seams;

pub use bearing::{bearing_deg, bearing_from_centroids, BearingParams};
pub use corners::{flip_y, CornerSet, MarkerId, MarkerMap};
pub use error::HeadingError;
pub use frame::{process_frame, process_image, FrameReport, HeadingParams};
pub use orientation::{orientation_deg, orientation_from_vector};
pub use seams::{FrameAnnotator, MarkerDetector};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
