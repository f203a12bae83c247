//! Marker heading from the centroid → top-midpoint vector.

use nalgebra::Point2;

use crate::corners::CornerSet;
use crate::error::HeadingError;

/// Heading of one marker in whole degrees, `[0, 360)`.
///
/// The heading is the direction from the marker centroid to the midpoint of
/// its top edge, counter-clockwise from `+x` in the flipped-y frame. A marker
/// lying upright in the image therefore points at 90°.
pub fn orientation_deg(corners: &CornerSet) -> Result<f32, HeadingError> {
    orientation_from_vector(corners.centroid(), corners.top_midpoint())
}

/// Heading of the vector `centre → top`, both already in the flipped-y frame.
pub fn orientation_from_vector(
    centre: Point2<f64>,
    top: Point2<f64>,
) -> Result<f32, HeadingError> {
    let dx = top.x - centre.x;
    let dy = top.y - centre.y;

    // Vertical headings are final; the quadrant correction below only applies
    // to the arctangent branch.
    if dx == 0.0 {
        return if dy > 0.0 {
            Ok(90.0)
        } else if dy < 0.0 {
            Ok(270.0)
        } else {
            Err(HeadingError::DegenerateMarker)
        };
    }

    let base = (dy / dx).atan().to_degrees();
    let angle = if top.x >= centre.x && top.y < centre.y {
        360.0 + base
    } else if top.x < centre.x {
        180.0 + base
    } else {
        base
    };

    Ok(angle.round().rem_euclid(360.0) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(cx: f32, cy: f32, half: f32) -> CornerSet {
        CornerSet::new([
            Point2::new(cx - half, cy - half),
            Point2::new(cx + half, cy - half),
            Point2::new(cx + half, cy + half),
            Point2::new(cx - half, cy + half),
        ])
        .expect("finite corners")
    }

    /// Square centred at `(cx, cy)` whose heading is `deg` counter-clockwise
    /// (flipped-y frame), built by rotating an upright square by `deg - 90`.
    fn rotated_square(cx: f32, cy: f32, half: f32, deg: f64) -> CornerSet {
        let theta = (deg - 90.0).to_radians();
        let (s, c) = theta.sin_cos();
        // offsets in flipped-y frame for TL, TR, BR, BL of an upright square
        let offsets = [(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];
        let corners = offsets.map(|(ox, oy): (f64, f64)| {
            let ox = ox * half as f64;
            let oy = oy * half as f64;
            let rx = ox * c - oy * s;
            let ry = ox * s + oy * c;
            Point2::new(cx + rx as f32, cy - ry as f32)
        });
        CornerSet::new(corners).expect("finite corners")
    }

    #[test]
    fn axis_aligned_square_points_up() {
        let set = CornerSet::new([
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 100.0),
            Point2::new(200.0, 200.0),
            Point2::new(100.0, 200.0),
        ])
        .unwrap();
        assert_eq!(orientation_deg(&set).unwrap(), 90.0);
    }

    #[test]
    fn upside_down_square_points_down() {
        // top edge at larger image y
        let set = CornerSet::new([
            Point2::new(200.0, 200.0),
            Point2::new(100.0, 200.0),
            Point2::new(100.0, 100.0),
            Point2::new(200.0, 100.0),
        ])
        .unwrap();
        assert_eq!(orientation_deg(&set).unwrap(), 270.0);
    }

    #[test]
    fn due_north_and_south_for_any_length() {
        for len in [0.5, 3.0, 250.0] {
            let c = Point2::new(10.0, -20.0);
            let north = Point2::new(10.0, -20.0 + len);
            let south = Point2::new(10.0, -20.0 - len);
            assert_eq!(orientation_from_vector(c, north).unwrap(), 90.0);
            assert_eq!(orientation_from_vector(c, south).unwrap(), 270.0);
        }
    }

    #[test]
    fn cardinal_east_and_west() {
        let c = Point2::new(0.0, 0.0);
        assert_eq!(orientation_from_vector(c, Point2::new(5.0, 0.0)).unwrap(), 0.0);
        assert_eq!(orientation_from_vector(c, Point2::new(-5.0, 0.0)).unwrap(), 180.0);
    }

    #[test]
    fn each_quadrant_branch() {
        let c = Point2::new(0.0, 0.0);
        assert_eq!(orientation_from_vector(c, Point2::new(1.0, 1.0)).unwrap(), 45.0);
        assert_eq!(orientation_from_vector(c, Point2::new(-1.0, 1.0)).unwrap(), 135.0);
        assert_eq!(orientation_from_vector(c, Point2::new(-1.0, -1.0)).unwrap(), 225.0);
        assert_eq!(orientation_from_vector(c, Point2::new(1.0, -1.0)).unwrap(), 315.0);
    }

    #[test]
    fn just_below_east_wraps_to_zero() {
        let c = Point2::new(0.0, 0.0);
        // atan gives about -0.29 deg; 359.71 rounds to 360 and wraps
        let angle = orientation_from_vector(c, Point2::new(100.0, -0.5)).unwrap();
        assert_eq!(angle, 0.0);
        let angle = orientation_from_vector(c, Point2::new(100.0, -2.0)).unwrap();
        assert_eq!(angle, 359.0);
    }

    #[test]
    fn degenerate_marker_is_an_error() {
        let c = Point2::new(3.0, -4.0);
        assert_eq!(
            orientation_from_vector(c, c),
            Err(HeadingError::DegenerateMarker)
        );
        let collapsed = square_at(50.0, 50.0, 0.0);
        assert_eq!(
            orientation_deg(&collapsed),
            Err(HeadingError::DegenerateMarker)
        );
    }

    #[test]
    fn invariant_under_translation() {
        for deg in [10.0, 75.0, 130.0, 200.0, 300.0] {
            let base = orientation_deg(&rotated_square(0.0, 0.0, 40.0, deg)).unwrap();
            for (tx, ty) in [(320.0, 240.0), (-100.0, 55.0), (1000.0, 1000.0)] {
                let moved = orientation_deg(&rotated_square(tx, ty, 40.0, deg)).unwrap();
                assert_eq!(base, moved, "heading changed after translating {deg} deg marker");
            }
        }
    }

    #[test]
    fn continuous_across_quadrant_boundaries() {
        for boundary in [90.0, 180.0, 270.0, 360.0] {
            for delta in [-1.0, 0.0, 1.0] {
                let deg: f64 = boundary + delta;
                let got = orientation_deg(&rotated_square(320.0, 240.0, 50.0, deg)).unwrap();
                let want = deg.rem_euclid(360.0);
                let diff = (got as f64 - want).abs();
                let diff = diff.min(360.0 - diff);
                assert!(diff <= 1.0, "heading {deg}: got {got}, want {want}");
            }
        }
    }

    #[test]
    fn rotated_markers_round_to_whole_degrees() {
        for deg in (0..360).step_by(7) {
            let got = orientation_deg(&rotated_square(0.0, 0.0, 25.0, deg as f64)).unwrap();
            assert_eq!(got.fract(), 0.0);
            assert!((0.0..360.0).contains(&got), "out of range: {got}");
        }
    }
}
