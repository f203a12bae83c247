//! Per-frame pipeline: headings for every marker, then the bearing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bearing::{bearing_deg, BearingParams};
use crate::corners::{MarkerId, MarkerMap};
use crate::error::HeadingError;
use crate::orientation::orientation_deg;
use crate::seams::MarkerDetector;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Parameters of the per-frame pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingParams {
    pub bearing: BearingParams,
}

/// Everything computed for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub num_markers: usize,
    /// Heading per marker id, whole degrees in `[0, 360)`.
    pub orientations: BTreeMap<MarkerId, f32>,
    /// Interior angle at the vertex marker, `None` while any of the three
    /// bearing markers is missing.
    pub bearing: Option<f32>,
}

/// Process one frame of detections.
///
/// Frames are independent; nothing is carried between calls. The first
/// degenerate marker aborts the frame with [`HeadingError::Marker`].
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(markers, params), fields(num_markers = markers.len()))
)]
pub fn process_frame(
    markers: &MarkerMap,
    params: &HeadingParams,
) -> Result<FrameReport, HeadingError> {
    let orientations = markers
        .iter()
        .map(|(&id, corners)| {
            orientation_deg(corners)
                .map(|deg| (id, deg))
                .map_err(|source| HeadingError::Marker {
                    id,
                    source: Box::new(source),
                })
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let bearing = bearing_deg(markers, &params.bearing)?;
    match bearing {
        Some(deg) => log::debug!("{} markers, bearing {:.2} deg", markers.len(), deg),
        None => log::debug!("{} markers, bearing unavailable", markers.len()),
    }

    Ok(FrameReport {
        num_markers: markers.len(),
        orientations,
        bearing,
    })
}

/// Run `detector` on `image`, then [`process_frame`] on its output.
///
/// Returns the detections alongside the report so a renderer can draw both.
pub fn process_image<D, E>(
    detector: &mut D,
    image: &D::Image,
    params: &HeadingParams,
) -> Result<(MarkerMap, FrameReport), E>
where
    D: MarkerDetector,
    E: From<D::Error> + From<HeadingError>,
{
    let markers = detector.detect(image)?;
    let report = process_frame(&markers, params)?;
    Ok((markers, report))
}
