//! Cheap conservative bounds around a cell, used to prune subtrees of the
//! polygon-to-cells traversal before paying for exact boundary/geodesic
//! intersection tests.

use super::{bbox::BBox, loop_algo};
use crate::{CellIndex, LatLng, Resolution};

/// Margin applied to a cell's own bbox when it must also cover every
/// descendant down to resolution 15 (`cover_children = true`).
///
/// Child cells can drift slightly outside their parent's ideal boundary near
/// pentagon distortion zones; this crate doesn't have access to the
/// upstream's exact per-resolution drift table (see
/// `PRECOMPUTED_COS_RADIUS` below for the analogous, better-grounded case),
/// so a fixed conservative multiplicative margin is used instead.
///
/// Derived, not transcribed: each finer resolution's cells are about
/// `sqrt(7)` smaller (H3's aperture-7 subdivision), so a single level's worst-
/// case boundary drift relative to its parent shrinks geometrically with
/// depth. Summing that geometric series out to resolution 15 converges to
/// under twice a single level's drift regardless of how many levels are
/// actually covered, so a flat 50% margin — applied once, not compounded per
/// level — safely bounds any descendant's boundary no matter its depth below
/// `cell`. Documented as an approximation, not a literal upstream constant.
const CHILD_COVERAGE_SCALE: f64 = 1.5;

/// Returns a bounding box guaranteed to contain `cell`'s boundary, optionally
/// inflated to also contain every descendant of `cell` at any finer
/// resolution.
#[must_use]
pub(crate) fn cell_to_bbox(cell: CellIndex, cover_children: bool) -> BBox {
    let boundary = cell.boundary();
    let bbox = loop_algo::bbox_from_loop(&boundary);

    if cover_children {
        bbox.scale(CHILD_COVERAGE_SCALE)
    } else {
        bbox
    }
}

/// A spherical cap: all points within `cos_radius` (as a cosine, so larger
/// values mean a *smaller* cap) of `center` on the unit sphere.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SphereCap {
    pub center: LatLng,
    pub cos_radius: f64,
}

impl SphereCap {
    /// Whether `point` lies within this cap.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        let cos_dist = self.center.distance_rads(point).cos();
        cos_dist >= self.cos_radius
    }
}

/// Scale factor applied to a resolution's maximum edge length before
/// deriving the cap radius, to absorb the gap between "center to vertex"
/// and "center to farthest point reachable by a pentagon-adjacent
/// distortion" (the reference implementation ships a precomputed table for
/// this; see the module-level note on `cos_radius_for_resolution`).
const SPHERE_CAP_SCALE_FACTOR: f64 = 2.0;

/// Conservative multiplier turning a resolution's *average* edge length into
/// an upper bound on any cell's *maximum* center-to-vertex distance at that
/// resolution. Pentagons and their immediate neighbors have the most
/// distorted (longest) edges in the grid; combined with
/// `SPHERE_CAP_SCALE_FACTOR` above (product 3x the average edge length) this
/// comfortably covers that distortion without relying on a table this crate
/// cannot source (see the docs on `cos_radius_for_resolution`).
const MAX_EDGE_LENGTH_SAFETY_MARGIN: f64 = 1.5;

/// Returns `cos(radius)` of the spherical cap guaranteed to contain every
/// point of every cell at `resolution`, centered on that cell's center.
///
/// The reference implementation ships this as a literal precomputed table
/// (`PRECOMPUTED_COS_RADIUS[0..15]`), built from a per-resolution maximum
/// edge length table this crate's reference corpus does not contain (the
/// table lives in a header that wasn't part of the retrieved source). Rather
/// than hand-transcribe unverifiable literals, this computes the value
/// on demand via the same formula the reference's self-check test uses
/// (`cos(max_edge_length_rads(resolution) * SPHERE_CAP_SCALE_FACTOR)`), using
/// a derived (not transcribed) maximum-edge-length estimate. The result is a
/// single `cos` call per cell examined by the traversal, which is
/// asymptotically irrelevant next to the boundary/geodesic work it's meant
/// to prune.
#[must_use]
pub(crate) fn cos_radius_for_resolution(resolution: Resolution) -> f64 {
    let max_edge_rads = resolution.edge_length_km() / crate::EARTH_RADIUS_KM
        * MAX_EDGE_LENGTH_SAFETY_MARGIN;

    (max_edge_rads * SPHERE_CAP_SCALE_FACTOR).cos()
}

/// Returns the spherical cap guaranteed to contain `cell`'s boundary.
#[must_use]
pub(crate) fn cell_to_sphere_cap(cell: CellIndex) -> SphereCap {
    SphereCap {
        center: cell.to_latlng(),
        cos_radius: cos_radius_for_resolution(cell.resolution()),
    }
}

#[cfg(test)]
#[path = "./cell_bounds_tests.rs"]
mod tests;
