//! Collaborator traits around the geometric core.

use crate::corners::MarkerMap;
use crate::frame::FrameReport;

/// Black-box marker detector: image in, identified corner sets out.
///
/// Implementations must report corners in top-left, top-right, bottom-right,
/// bottom-left order.
pub trait MarkerDetector {
    type Image: ?Sized;
    type Error;

    fn detect(&mut self, image: &Self::Image) -> Result<MarkerMap, Self::Error>;
}

/// Renderer that draws per-frame results onto the source image.
pub trait FrameAnnotator {
    type Image: ?Sized;
    type Error;

    fn annotate(
        &self,
        image: &mut Self::Image,
        markers: &MarkerMap,
        report: &FrameReport,
    ) -> Result<(), Self::Error>;
}
