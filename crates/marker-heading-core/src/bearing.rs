//! Relative bearing between three markers via the law of cosines.
//!
//! The result is the *interior* angle of the centroid triangle at the vertex
//! marker, in `[0, 180]`. It carries no turning direction: mirrored
//! (clockwise vs counter-clockwise) configurations give the same value.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::corners::{MarkerId, MarkerMap};
use crate::error::HeadingError;

/// Slack allowed on the cosine ratio before it counts as out of domain.
const COSINE_SLACK: f64 = 1e-9;

/// Which markers span the bearing triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BearingParams {
    /// Marker whose centroid is the measured vertex.
    pub vertex: MarkerId,
    pub first: MarkerId,
    pub second: MarkerId,
}

impl Default for BearingParams {
    fn default() -> Self {
        Self {
            vertex: 0,
            first: 1,
            second: 2,
        }
    }
}

impl BearingParams {
    fn ids(&self) -> [MarkerId; 3] {
        [self.vertex, self.first, self.second]
    }
}

/// Bearing angle in degrees, or `None` when any of the three markers is absent.
pub fn bearing_deg(
    markers: &MarkerMap,
    params: &BearingParams,
) -> Result<Option<f32>, HeadingError> {
    let [v, a, b] = params.ids();
    let (Some(m0), Some(m1), Some(m2)) = (markers.get(&v), markers.get(&a), markers.get(&b))
    else {
        return Ok(None);
    };

    let centroids = [m0.centroid(), m1.centroid(), m2.centroid()];
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        if centroids[i] == centroids[j] {
            let ids = params.ids();
            return Err(HeadingError::DegenerateTriangle {
                a: ids[i],
                b: ids[j],
            });
        }
    }

    bearing_from_centroids(centroids[0], centroids[1], centroids[2]).map(Some)
}

/// Interior angle at `c0` of the triangle `c0, c1, c2`, in degrees.
///
/// The vertex arms `c0 → c1` and `c0 → c2` must have non-zero length; a
/// collapsed arm is reported with positional ids (`0`, `1`, `2`).
pub fn bearing_from_centroids(
    c0: Point2<f64>,
    c1: Point2<f64>,
    c2: Point2<f64>,
) -> Result<f32, HeadingError> {
    let l01 = nalgebra::distance(&c0, &c1);
    let l02 = nalgebra::distance(&c0, &c2);
    let l12 = nalgebra::distance(&c1, &c2);
    if l01 == 0.0 || l02 == 0.0 {
        return Err(HeadingError::DegenerateTriangle {
            a: 0,
            b: if l01 == 0.0 { 1 } else { 2 },
        });
    }

    let ratio = (l01 * l01 + l02 * l02 - l12 * l12) / (2.0 * l01 * l02);
    if !ratio.is_finite() || ratio.abs() > 1.0 + COSINE_SLACK {
        return Err(HeadingError::CosineDomain { ratio });
    }

    Ok(ratio.clamp(-1.0, 1.0).acos().to_degrees() as f32)
}
