//! Draw marker corners, headings and the bearing triangle onto an RGB image.
//!
//! Text (ids, bearing value) is not rasterised; it lives in the JSON report.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use nalgebra::{Point2, Vector2};

use crate::{BearingParams, FrameAnnotator, FrameReport, MarkerId, MarkerMap, OverlayStyle};

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("report has a heading for marker {id} but the marker map does not")]
    UnknownMarker { id: MarkerId },
}

/// [`FrameAnnotator`] for `image::RgbImage`.
#[derive(Clone, Debug, Default)]
pub struct OverlayAnnotator {
    pub style: OverlayStyle,
    /// Markers spanning the bearing triangle; legs are drawn when the report
    /// carries a bearing.
    pub bearing: BearingParams,
}

impl OverlayAnnotator {
    pub fn new(style: OverlayStyle, bearing: BearingParams) -> Self {
        Self { style, bearing }
    }

    fn draw_bearing_legs(&self, image: &mut RgbImage, markers: &MarkerMap) {
        let ids = [self.bearing.vertex, self.bearing.first, self.bearing.second];
        let [Some(v), Some(a), Some(b)] = ids.map(|id| markers.get(&id)) else {
            return;
        };
        let color = Rgb(self.style.bearing_color);
        let vertex = v.centroid_px();
        draw_thick_line(image, vertex, a.centroid_px(), 1, color);
        draw_thick_line(image, vertex, b.centroid_px(), 1, color);
    }
}

impl FrameAnnotator for OverlayAnnotator {
    type Image = RgbImage;
    type Error = AnnotateError;

    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, image, markers, report),
            fields(width = image.width(), height = image.height())
        )
    )]
    fn annotate(
        &self,
        image: &mut RgbImage,
        markers: &MarkerMap,
        report: &FrameReport,
    ) -> Result<(), AnnotateError> {
        if report.bearing.is_some() {
            self.draw_bearing_legs(image, markers);
        }

        for &id in report.orientations.keys() {
            let corners = markers.get(&id).ok_or(AnnotateError::UnknownMarker { id })?;
            let centre = corners.centroid_px();

            draw_thick_line(
                image,
                corners.top_midpoint_px(),
                centre,
                self.style.heading_thickness,
                Rgb(self.style.heading_color),
            );
            for (p, color) in corners.corners().iter().zip(self.style.corner_colors) {
                draw_filled_circle_mut(image, px(*p), self.style.corner_radius, Rgb(color));
            }
            draw_filled_circle_mut(
                image,
                px(centre),
                self.style.centroid_radius,
                Rgb(self.style.centroid_color),
            );
        }
        Ok(())
    }
}

#[inline]
fn px(p: Point2<f32>) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Line of `thickness` pixels, drawn as parallel 1 px segments.
fn draw_thick_line(
    image: &mut RgbImage,
    from: Point2<f32>,
    to: Point2<f32>,
    thickness: u32,
    color: Rgb<u8>,
) {
    let dir = to - from;
    let normal = if dir.norm() > 0.0 {
        Vector2::new(-dir.y, dir.x).normalize()
    } else {
        Vector2::zeros()
    };
    let t = thickness.max(1) as f32;
    for k in 0..thickness.max(1) {
        let off = normal * (k as f32 - (t - 1.0) / 2.0);
        let a = from + off;
        let b = to + off;
        draw_line_segment_mut(image, (a.x, a.y), (b.x, b.y), color);
    }
}
