use std::collections::BTreeMap;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::HeadingError;

/// Marker identity as reported by the detector.
pub type MarkerId = u32;

/// Detected markers of one frame, keyed by identity.
pub type MarkerMap = BTreeMap<MarkerId, CornerSet>;

/// Convert an image-space point (y down) into the flipped-y frame (y up).
#[inline]
pub fn flip_y(p: Point2<f32>) -> Point2<f64> {
    Point2::new(p.x as f64, -(p.y as f64))
}

/// The four corners of a square marker in image pixels.
///
/// Order is fixed and meaningful: top-left, top-right, bottom-right,
/// bottom-left, exactly as the detector reports them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f32; 2]>", into = "Vec<[f32; 2]>")]
pub struct CornerSet {
    corners: [Point2<f32>; 4],
}

impl CornerSet {
    /// Build a corner set, rejecting NaN and infinite coordinates.
    pub fn new(corners: [Point2<f32>; 4]) -> Result<Self, HeadingError> {
        if let Some(index) = corners
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HeadingError::NonFiniteCorner { index });
        }
        Ok(Self { corners })
    }

    /// Build a corner set from a detector slice; the slice must hold 4 points.
    pub fn from_slice(points: &[Point2<f32>]) -> Result<Self, HeadingError> {
        let corners: [Point2<f32>; 4] = points
            .try_into()
            .map_err(|_| HeadingError::MalformedCorners { got: points.len() })?;
        Self::new(corners)
    }

    #[inline]
    pub fn corners(&self) -> &[Point2<f32>; 4] {
        &self.corners
    }

    #[inline]
    pub fn top_left(&self) -> Point2<f32> {
        self.corners[0]
    }

    #[inline]
    pub fn top_right(&self) -> Point2<f32> {
        self.corners[1]
    }

    #[inline]
    pub fn bottom_right(&self) -> Point2<f32> {
        self.corners[2]
    }

    #[inline]
    pub fn bottom_left(&self) -> Point2<f32> {
        self.corners[3]
    }

    /// Mean of the four corners in the flipped-y frame.
    pub fn centroid(&self) -> Point2<f64> {
        let (sx, sy) = self
            .corners
            .iter()
            .map(|&p| flip_y(p))
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point2::new(sx / 4.0, sy / 4.0)
    }

    /// Mean of the two top corners in the flipped-y frame.
    pub fn top_midpoint(&self) -> Point2<f64> {
        let tl = flip_y(self.top_left());
        let tr = flip_y(self.top_right());
        Point2::new((tl.x + tr.x) / 2.0, (tl.y + tr.y) / 2.0)
    }

    /// Centroid in image pixels, for drawing.
    pub fn centroid_px(&self) -> Point2<f32> {
        let c = self.centroid();
        Point2::new(c.x as f32, -c.y as f32)
    }

    /// Top midpoint in image pixels, for drawing.
    pub fn top_midpoint_px(&self) -> Point2<f32> {
        let t = self.top_midpoint();
        Point2::new(t.x as f32, -t.y as f32)
    }
}

impl TryFrom<Vec<[f32; 2]>> for CornerSet {
    type Error = HeadingError;

    fn try_from(raw: Vec<[f32; 2]>) -> Result<Self, Self::Error> {
        let points: Vec<Point2<f32>> = raw.into_iter().map(Point2::from).collect();
        Self::from_slice(&points)
    }
}

impl From<CornerSet> for Vec<[f32; 2]> {
    fn from(set: CornerSet) -> Self {
        set.corners.iter().map(|p| [p.x, p.y]).collect()
    }
}
