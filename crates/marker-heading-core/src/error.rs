use crate::corners::MarkerId;

/// Errors produced by the heading and bearing calculators.
///
/// "Not enough markers for a bearing" is not an error; it is reported as
/// `Ok(None)` by [`crate::bearing_deg`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HeadingError {
    #[error("marker must have exactly 4 corners (got {got})")]
    MalformedCorners { got: usize },

    #[error("marker corner {index} has a non-finite coordinate")]
    NonFiniteCorner { index: usize },

    #[error("degenerate marker: top midpoint coincides with centroid")]
    DegenerateMarker,

    #[error("degenerate triangle: centroids of markers {a} and {b} coincide")]
    DegenerateTriangle { a: MarkerId, b: MarkerId },

    #[error("law of cosines ratio {ratio} is outside [-1, 1]")]
    CosineDomain { ratio: f64 },

    #[error("marker {id}: {source}")]
    Marker {
        id: MarkerId,
        #[source]
        source: Box<HeadingError>,
    },
}
