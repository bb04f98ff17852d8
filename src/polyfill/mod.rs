//! Converts a polygon (with optional holes) into the set of cells, at a
//! given resolution, that satisfy a chosen containment relationship with it.
//!
//! This engine doesn't depend on the `geo`/`geojson` crates: it works
//! directly off `(lat, lng)` vertex lists, and drives the traversal top-down
//! (coarse resolution first) rather than building the full fine-resolution
//! candidate set up front.

mod bbox;
mod cell_bounds;
mod geodesic;
mod loop_algo;

use crate::{error::PolygonToCellsError, CellIndex, LatLng, Resolution};
use bbox::BBox;
use geodesic::GeodesicPolygon;
use loop_algo::VertexLoop as _;

/// How a cell must relate to the input polygon to be part of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ContainmentMode {
    /// The cell's center must fall within the polygon.
    #[default]
    Center,
    /// The cell's entire boundary must fall within the polygon.
    Full,
    /// The cell's boundary must intersect the polygon in any way (shared
    /// area, a boundary vertex inside the other shape, or a crossing edge).
    Overlapping,
    /// The cell's bounding box must overlap the polygon's bounding box
    /// (a cheap, approximate mode).
    OverlappingBbox,
}

/// Options controlling a polygon-to-cells conversion.
#[derive(Debug, Clone, Copy)]
pub struct PolyfillConfig {
    resolution: Resolution,
    containment: ContainmentMode,
    geodesic: bool,
}

impl PolyfillConfig {
    /// Initializes a new config at the given resolution, defaulting to
    /// [`ContainmentMode::Center`] and planar (non-geodesic) containment
    /// tests.
    #[must_use]
    pub const fn new(resolution: Resolution) -> Self {
        Self { resolution, containment: ContainmentMode::Center, geodesic: false }
    }

    /// Sets the containment mode.
    #[must_use]
    pub const fn containment_mode(mut self, containment: ContainmentMode) -> Self {
        self.containment = containment;
        self
    }

    /// Enables geodesic (great-circle) containment tests instead of the
    /// default planar (lat/lng-rectangle) ones.
    ///
    /// Invalid in combination with [`ContainmentMode::Center`] or
    /// [`ContainmentMode::OverlappingBbox`]: both are defined in terms of a
    /// planar test (a single point, or a lat/lng bounding box) that a
    /// geodesic flag has no effect on, so the combination is rejected rather
    /// than silently ignored.
    #[must_use]
    pub const fn geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = geodesic;
        self
    }

    fn validate(self) -> Result<(), PolygonToCellsError> {
        if self.geodesic
            && matches!(
                self.containment,
                ContainmentMode::Center | ContainmentMode::OverlappingBbox
            )
        {
            return Err(PolygonToCellsError::InvalidOption);
        }
        Ok(())
    }
}

/// A closed ring of vertices (an exterior boundary, or a hole).
pub type Ring = Vec<LatLng>;

/// A polygon: one exterior ring plus any number of holes.
#[derive(Debug, Clone)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Initializes a polygon from an exterior ring and a set of holes.
    ///
    /// # Errors
    ///
    /// [`PolygonToCellsError::EmptyHole`] if the exterior ring or any hole
    /// has fewer than 3 vertices.
    pub fn new(
        exterior: Ring,
        holes: Vec<Ring>,
    ) -> Result<Self, PolygonToCellsError> {
        if exterior.len() < 3 {
            return Err(PolygonToCellsError::EmptyHole);
        }
        if holes.iter().any(|hole| hole.len() < 3) {
            return Err(PolygonToCellsError::EmptyHole);
        }

        Ok(Self { exterior, holes })
    }

    fn bbox(&self) -> BBox {
        bbox::BBox::from_loop(self.exterior.iter().copied())
    }

    fn contains_point(&self, point: LatLng) -> bool {
        if !loop_algo::point_inside(self.exterior.as_slice(), point) {
            return false;
        }
        !self
            .holes
            .iter()
            .any(|hole| loop_algo::point_inside(hole.as_slice(), point))
    }

    /// Whether every vertex of `boundary` lies inside the exterior ring and
    /// outside of every hole, with no edge of `boundary` crossing any
    /// polygon edge, and no hole lying entirely within `boundary` (the
    /// combination that means the cell's whole area is covered).
    fn fully_contains(&self, boundary: &crate::Boundary) -> bool {
        if !boundary.iter().all(|&v| self.contains_point(v)) {
            return false;
        }
        if self.crosses(boundary) {
            return false;
        }
        // A hole entirely inside the cell, not touching its boundary, would
        // otherwise go undetected (no shared vertex, no crossing edge).
        if self
            .holes
            .iter()
            .any(|hole| hole.iter().any(|&v| loop_algo::point_inside(boundary, v)))
        {
            return false;
        }
        true
    }

    /// Whether `boundary` shares any area with this polygon at all.
    fn overlaps(&self, boundary: &crate::Boundary) -> bool {
        if boundary.iter().any(|&v| self.contains_point(v)) {
            return true;
        }
        if self.exterior.iter().any(|&v| loop_algo::point_inside(boundary, v)) {
            return true;
        }
        self.crosses(boundary)
    }

    fn crosses(&self, boundary: &crate::Boundary) -> bool {
        let cell_edges: Vec<(LatLng, LatLng)> = boundary.edges().collect();

        let mut poly_edges: Vec<(LatLng, LatLng)> =
            ring_edges(&self.exterior);
        for hole in &self.holes {
            poly_edges.extend(ring_edges(hole));
        }

        poly_edges.iter().any(|&(a1, a2)| {
            cell_edges
                .iter()
                .any(|&(b1, b2)| loop_algo::line_crosses_line(a1, a2, b1, b2))
        })
    }

    fn to_geodesic(&self) -> GeodesicPolygon {
        let exterior = geodesic::GeodesicLoop::new(&self.exterior);
        let holes = self.holes.iter().map(|h| geodesic::GeodesicLoop::new(h)).collect();
        GeodesicPolygon::new(exterior, holes)
    }
}

fn ring_edges(ring: &[LatLng]) -> Vec<(LatLng, LatLng)> {
    (0..ring.len()).map(|i| (ring[i], ring[(i + 1) % ring.len()])).collect()
}

/// Returns an upper bound on the number of cells [`polygon_to_cells`] could
/// produce for `polygon` at `resolution`, without running the traversal.
///
/// Mirrors the reference implementation's size estimator: the polygon's
/// bounding-box hexagon estimate, plus a per-edge line estimate for each
/// ring, plus a small fixed slack buffer.
///
/// # Errors
///
/// [`PolygonToCellsError::Failed`] if the polygon's bounding box is
/// degenerate (zero width or height) or any intermediate estimate is
/// non-finite. A degenerate bbox is real, constructible input (e.g. an
/// exterior ring that is a sliver running exactly along a meridian), not an
/// unreachable internal state.
pub fn max_polygon_to_cells_size(
    polygon: &Polygon,
    resolution: Resolution,
) -> Result<u64, PolygonToCellsError> {
    /// Fixed slack added on top of the bbox/edge estimate, absorbing the
    /// cases where the estimate formulas slightly undercount.
    const BUFFER: u64 = 12;

    let bbox = polygon.bbox();
    let mut estimate = bbox.hex_estimate(resolution)?;

    let mut add_ring_estimate =
        |ring: &Ring| -> Result<(), PolygonToCellsError> {
            for w in ring.windows(2) {
                estimate += BBox::line_hex_estimate(w[0], w[1], resolution)?;
            }
            if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
                estimate += BBox::line_hex_estimate(last, first, resolution)?;
            }
            Ok(())
        };

    add_ring_estimate(&polygon.exterior)?;
    for hole in &polygon.holes {
        add_ring_estimate(hole)?;
    }

    Ok(estimate + BUFFER)
}

/// Compact hierarchical depth-first traversal of the icosahedral grid,
/// yielding every cell at the target resolution matching the configured
/// containment mode.
///
/// The traversal starts from the 122 base cells and descends one resolution
/// at a time, pruning subtrees whose conservative bounds (a bounding box,
/// and optionally a spherical cap) can't intersect the polygon, and
/// fast-forwarding through subtrees already known to be fully contained
/// (emitting every descendant without re-testing each one against the
/// polygon). The pending-cell stack holds at most one entry per resolution
/// level on the current path plus its siblings, so its size is bounded by
/// the grid's fan-out rather than growing with the cell count; the only
/// heap allocation after construction is the (single, reused) boxed
/// iterator used while fast-forwarding through a fully-contained subtree.
pub struct PolygonIter<'p> {
    polygon: &'p Polygon,
    geodesic_polygon: Option<GeodesicPolygon>,
    resolution: Resolution,
    containment: ContainmentMode,
    stack: Vec<CellIndex>,
    flushing: Option<Box<dyn Iterator<Item = CellIndex>>>,
}

impl<'p> PolygonIter<'p> {
    /// Initializes a new iterator over `polygon`'s matching cells.
    ///
    /// # Errors
    ///
    /// [`PolygonToCellsError::InvalidOption`] if `config` pairs the geodesic
    /// flag with a containment mode that doesn't support it.
    pub fn new(
        polygon: &'p Polygon,
        config: PolyfillConfig,
    ) -> Result<Self, PolygonToCellsError> {
        config.validate()?;

        let bbox = polygon.bbox();
        let stack: Vec<CellIndex> = CellIndex::base_cells()
            .filter(|cell| {
                bbox.overlaps(&cell_bounds::cell_to_bbox(*cell, true))
            })
            .collect();

        let geodesic_polygon = config.geodesic.then(|| polygon.to_geodesic());

        Ok(Self {
            polygon,
            geodesic_polygon,
            resolution: config.resolution,
            containment: config.containment,
            stack,
            flushing: None,
        })
    }

    fn test_leaf(&self, cell: CellIndex) -> bool {
        let boundary = cell.boundary();

        match (self.containment, &self.geodesic_polygon) {
            (ContainmentMode::Center, _) => {
                self.polygon.contains_point(cell.to_latlng())
            }
            (ContainmentMode::OverlappingBbox, _) => {
                let cell_bbox = bbox::BBox::from_loop(boundary.iter().copied());
                if !self.polygon.bbox().overlaps(&cell_bbox) {
                    return false;
                }
                // A cell bbox that sits entirely within a hole's bbox, and
                // whose center genuinely falls inside that hole (not just
                // its bbox), covers no polygon area at all.
                !self.polygon.holes.iter().any(|hole| {
                    let hole_bbox = bbox::BBox::from_loop(hole.iter().copied());
                    hole_bbox.contains_bbox(&cell_bbox)
                        && loop_algo::point_inside(hole.as_slice(), cell.to_latlng())
                })
            }
            (ContainmentMode::Full, Some(geo)) => geo.contains_boundary(&boundary),
            (ContainmentMode::Full, None) => self.polygon.fully_contains(&boundary),
            (ContainmentMode::Overlapping, Some(geo)) => {
                geo.contains_boundary(&boundary) || geo.intersects_boundary(&boundary)
            }
            (ContainmentMode::Overlapping, None) => self.polygon.overlaps(&boundary),
        }
    }

    fn is_fully_contained(&self, cell: CellIndex) -> bool {
        let boundary = cell.boundary();
        match &self.geodesic_polygon {
            Some(geo) => geo.contains_boundary(&boundary),
            None => self.polygon.fully_contains(&boundary),
        }
    }

    fn may_intersect(&self, cell: CellIndex) -> bool {
        let cover_children = cell.resolution() != self.resolution;
        let cell_bbox = cell_bounds::cell_to_bbox(cell, cover_children);
        if !self.polygon.bbox().overlaps(&cell_bbox) {
            return false;
        }
        if let Some(geo) = &self.geodesic_polygon {
            let cap = cell_bounds::cell_to_sphere_cap(cell);
            if !geo.may_intersect_cap(&cap) {
                return false;
            }
        }
        true
    }
}

impl Iterator for PolygonIter<'_> {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(it) = &mut self.flushing {
                match it.next() {
                    Some(cell) => return Some(cell),
                    None => self.flushing = None,
                }
            }

            let cell = self.stack.pop()?;

            if !self.may_intersect(cell) {
                continue;
            }

            if cell.resolution() == self.resolution {
                if self.test_leaf(cell) {
                    return Some(cell);
                }
                continue;
            }

            if self.is_fully_contained(cell) {
                self.flushing = Some(Box::new(cell.children(self.resolution)));
                continue;
            }

            let Some(next_res) = cell.resolution().succ() else {
                continue;
            };
            self.stack.extend(cell.children(next_res));
        }
    }
}

/// An expanding variant of [`PolygonIter`] that owns its polygon, for
/// callers that want a `'static`, by-value iterator (e.g. to store it in a
/// struct, or return it from a function) instead of borrowing from a
/// caller-held [`Polygon`].
pub struct ExpandingPolygonIter {
    polygon: Box<Polygon>,
    // Safety-free self-reference avoidance: the iterator is rebuilt lazily
    // from the boxed polygon on first `next()` call rather than stored as a
    // borrowing `PolygonIter`, since the latter would require unsafe
    // self-referential struct tricks this crate's lint configuration
    // (`#![deny(unsafe_code)]`) forbids.
    config: PolyfillConfig,
    inner: Option<Vec<CellIndex>>,
    cursor: usize,
}

impl ExpandingPolygonIter {
    /// Initializes a new expanding iterator over `polygon`'s matching cells.
    ///
    /// # Errors
    ///
    /// [`PolygonToCellsError::InvalidOption`] if `config` pairs the geodesic
    /// flag with a containment mode that doesn't support it.
    pub fn new(
        polygon: Polygon,
        config: PolyfillConfig,
    ) -> Result<Self, PolygonToCellsError> {
        config.validate()?;
        Ok(Self { polygon: Box::new(polygon), config, inner: None, cursor: 0 })
    }
}

impl Iterator for ExpandingPolygonIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.is_none() {
            let cells = PolygonIter::new(&self.polygon, self.config)
                .expect("validated at construction")
                .collect();
            self.inner = Some(cells);
        }

        let cells = self.inner.as_ref().expect("just initialized");
        let cell = cells.get(self.cursor).copied();
        self.cursor += 1;
        cell
    }
}

/// Fills `polygon` with cells at `resolution` matching the configured
/// containment mode, appending them to `out`.
///
/// # Errors
///
/// [`PolygonToCellsError::InvalidOption`] if `config` pairs the geodesic
/// flag with a containment mode that doesn't support it.
pub fn polygon_to_cells(
    polygon: &Polygon,
    config: PolyfillConfig,
    out: &mut Vec<CellIndex>,
) -> Result<(), PolygonToCellsError> {
    out.extend(PolygonIter::new(polygon, config)?);
    Ok(())
}

/// Fills `polygon` with cells at `resolution` matching the configured
/// containment mode into a fixed-capacity, caller-supplied buffer, mirroring
/// the C ABI's caller-supplied-output-buffer contract (as opposed to
/// [`polygon_to_cells`]'s growable `Vec`).
///
/// Returns the number of cells written to `out`. Unlike `polygon_to_cells`,
/// this never grows `out`: if `out` is too small to hold every matching
/// cell, it stops writing and returns
/// [`PolygonToCellsError::MemoryBounds`], leaving `out` filled with as many
/// matching cells (in the same order `polygon_to_cells` would produce) as
/// fit.
///
/// # Errors
///
/// [`PolygonToCellsError::InvalidOption`] if `config` pairs the geodesic
/// flag with a containment mode that doesn't support it;
/// [`PolygonToCellsError::MemoryBounds`] if `out` is too small.
pub fn polygon_to_cells_into(
    polygon: &Polygon,
    config: PolyfillConfig,
    out: &mut [CellIndex],
) -> Result<usize, PolygonToCellsError> {
    let mut written = 0;

    for cell in PolygonIter::new(polygon, config)? {
        let slot =
            out.get_mut(written).ok_or(PolygonToCellsError::MemoryBounds)?;
        *slot = cell;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
#[path = "./mod_tests.rs"]
mod tests;
