use core::fmt;

/// Errors occurring while converting a polygon into a set of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolygonToCellsError {
    /// The requested combination of containment mode and flags is invalid
    /// (e.g. the geodesic flag combined with `Center` or `OverlappingBbox`).
    InvalidOption,
    /// A loop (outer ring or hole) has fewer than 3 vertices.
    EmptyHole,
    /// The geometry contains a non-finite or out-of-range coordinate.
    InvalidLatLng,
    /// A size estimate could not be computed for the given geometry (e.g. a
    /// bounding box degenerate to a point or a line, or a non-finite
    /// intermediate result).
    Failed,
    /// [`crate::polyfill::polygon_to_cells_into`]'s output buffer is too
    /// small to hold every matching cell.
    MemoryBounds,
}

impl fmt::Display for PolygonToCellsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidOption => {
                write!(f, "invalid containment mode/flags combination")
            }
            Self::EmptyHole => write!(f, "loop has fewer than 3 vertices"),
            Self::InvalidLatLng => write!(f, "invalid latitude/longitude"),
            Self::Failed => write!(f, "failed to compute a size estimate"),
            Self::MemoryBounds => write!(f, "output buffer is too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolygonToCellsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
