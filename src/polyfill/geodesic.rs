//! Geodesic (great-circle, as opposed to planar lat/lng) polygon
//! representation used to accelerate the traversal when the geodesic flag
//! is requested: edges, loops and the polygon carry precomputed 3D vectors
//! so that cap/boundary/point containment tests avoid repeated trig.

use super::cell_bounds::SphereCap;
use crate::{Boundary, LatLng, Vec3d};

/// Axis-aligned bounding box in the 3D embedding of the unit sphere.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Aabb3 {
    min: Vec3d,
    max: Vec3d,
}

impl Aabb3 {
    fn from_points(points: impl IntoIterator<Item = Vec3d>) -> Self {
        let mut min = Vec3d::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Vec3d::new(f64::MIN, f64::MIN, f64::MIN);

        for p in points {
            min = Vec3d::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Vec3d::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }

        Self { min, max }
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            min: Vec3d::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vec3d::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Squared distance from `p` to the nearest point of this box.
    fn dist2(&self, p: &Vec3d) -> f64 {
        let dx = p.x.clamp(self.min.x, self.max.x) - p.x;
        let dy = p.y.clamp(self.min.y, self.max.y) - p.y;
        let dz = p.z.clamp(self.min.z, self.max.z) - p.z;

        dx.mul_add(dx, dy.mul_add(dy, dz * dz))
    }

    /// Whether this box could intersect the spherical cap `cap` (may return
    /// a false positive, never a false negative).
    fn may_intersect_cap(&self, cap: &SphereCap) -> bool {
        let center = Vec3d::from(cap.center);
        // Chord-length bound equivalent to the cap's angular radius:
        // |p - c|^2 = 2 - 2*cos(angle(p, c)).
        let chord2 = 2. - 2. * cap.cos_radius;
        self.dist2(&center) <= chord2
    }
}

/// Number of intermediate samples used to approximate a great-circle arc's
/// 3D bounding box. The arc's extrema along an axis needn't fall on its
/// endpoints; sampling (then letting the enclosing box be slightly
/// conservative) avoids solving for the exact extremum per axis, at the
/// cost of a small, pruning-only (never correctness-affecting) slack.
const ARC_AABB_SAMPLES: usize = 4;

/// One edge of a [`GeodesicLoop`]: the great-circle arc between two
/// vertices, with the quantities `geodesicPolygon`-style point tests need
/// precomputed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GeodesicEdge {
    from: Vec3d,
    to: Vec3d,
    /// Unit normal of the great-circle plane containing this edge, i.e.
    /// `normalize(from x to)`.
    normal: Vec3d,
    aabb: Aabb3,
}

impl GeodesicEdge {
    fn new(from: Vec3d, to: Vec3d) -> Self {
        let normal = from.cross(&to).normalized();
        let samples = (0..=ARC_AABB_SAMPLES).map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / ARC_AABB_SAMPLES as f64;
            slerp(from, to, t)
        });

        Self { from, to, normal, aabb: Aabb3::from_points(samples) }
    }

    /// Which side of this edge's great circle `p` falls on (sign of the
    /// scalar triple product); used by both the crossing test and the
    /// "is this query ray segment separated by the edge's plane" test.
    fn side(&self, p: &Vec3d) -> f64 {
        self.normal.dot(p)
    }

    /// Whether the arc `(a, b)` crosses this edge's arc. Both arcs are
    /// assumed shorter than a hemisphere, which always holds for polygon
    /// edges and for the point-to-pole query arcs built in this module.
    fn crosses(&self, a: &Vec3d, b: &Vec3d) -> bool {
        let side_a = self.side(a);
        let side_b = self.side(b);
        if (side_a > 0.) == (side_b > 0.) {
            return false;
        }

        let query_normal = a.cross(b).normalized();
        let side_from = query_normal.dot(&self.from);
        let side_to = query_normal.dot(&self.to);

        (side_from > 0.) != (side_to > 0.)
    }
}

fn slerp(a: Vec3d, b: Vec3d, t: f64) -> Vec3d {
    let cos_angle = a.dot(&b).clamp(-1., 1.);
    let angle = cos_angle.acos();
    if angle.abs() < f64::EPSILON {
        return a;
    }
    let sin_angle = angle.sin();
    let fa = ((1. - t) * angle).sin() / sin_angle;
    let fb = (t * angle).sin() / sin_angle;

    Vec3d::new(
        fa.mul_add(a.x, fb * b.x),
        fa.mul_add(a.y, fb * b.y),
        fa.mul_add(a.z, fb * b.z),
    )
}

/// A closed loop of geodesic edges (an exterior ring or a hole).
#[derive(Debug, Clone)]
pub(crate) struct GeodesicLoop {
    edges: Vec<GeodesicEdge>,
    /// Unit vector toward the loop's vertex centroid, used as the reference
    /// direction for `contains_point`'s ray cast.
    centroid: Vec3d,
    aabb: Aabb3,
}

impl GeodesicLoop {
    pub(crate) fn new(vertices: &[LatLng]) -> Self {
        let points: Vec<Vec3d> = vertices.iter().map(|&v| Vec3d::from(v)).collect();
        let edges: Vec<GeodesicEdge> = points
            .iter()
            .enumerate()
            .map(|(i, &from)| {
                let to = points[(i + 1) % points.len()];
                GeodesicEdge::new(from, to)
            })
            .collect();

        let centroid_sum = points.iter().fold(Vec3d::new(0., 0., 0.), |acc, p| {
            Vec3d::new(acc.x + p.x, acc.y + p.y, acc.z + p.z)
        });
        let centroid = centroid_sum.normalized();

        let aabb = edges
            .iter()
            .map(|e| e.aabb)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Aabb3 {
                min: Vec3d::new(0., 0., 0.),
                max: Vec3d::new(0., 0., 0.),
            });

        Self { edges, centroid, aabb }
    }

    pub(crate) fn from_boundary(boundary: &Boundary) -> Self {
        let vertices: Vec<LatLng> = boundary.iter().copied().collect();
        Self::new(&vertices)
    }

    fn may_intersect_cap(&self, cap: &SphereCap) -> bool {
        self.aabb.may_intersect_cap(cap)
    }

    /// Whether `point` lies inside this loop.
    ///
    /// Fast-rejects points more than a hemisphere away from the loop's own
    /// centroid: every loop this code operates on (an input polygon ring, or
    /// a grid cell boundary) is far smaller than a hemisphere, so such a
    /// point can never be inside it. Otherwise casts a great-circle arc from
    /// `point` to the antipode of the centroid and counts edge crossings;
    /// odd parity means inside. Using the centroid's antipode rather than a
    /// fixed pole keeps the reference point away from the loop regardless of
    /// where on the sphere the loop sits, including around the poles
    /// themselves, where a fixed-pole ray can run alongside (rather than
    /// across) the loop's edges.
    ///
    /// As with the planar ray-casting algorithm, a query point placed
    /// exactly on the reference point (or exactly on an edge) is a
    /// degenerate case that is not specially handled.
    fn contains_point(&self, point: Vec3d) -> bool {
        if point.dot(&self.centroid) < 0. {
            return false;
        }

        let antipode = Vec3d::new(-self.centroid.x, -self.centroid.y, -self.centroid.z);
        let mut inside = false;

        for edge in &self.edges {
            if edge.crosses(&point, &antipode) {
                inside = !inside;
            }
        }

        inside
    }
}

/// A polygon on the sphere: one exterior loop plus any number of holes,
/// with precomputed geometry for the traversal's geodesic fast paths.
#[derive(Debug, Clone)]
pub(crate) struct GeodesicPolygon {
    exterior: GeodesicLoop,
    holes: Vec<GeodesicLoop>,
}

impl GeodesicPolygon {
    pub(crate) fn new(exterior: GeodesicLoop, holes: Vec<GeodesicLoop>) -> Self {
        Self { exterior, holes }
    }

    /// Whether `point` lies inside the exterior loop and outside every hole.
    #[must_use]
    pub(crate) fn contains_point(&self, point: LatLng) -> bool {
        let v = Vec3d::from(point);
        if !self.exterior.contains_point(v) {
            return false;
        }

        !self.holes.iter().any(|hole| hole.contains_point(v))
    }

    /// Whether every vertex of `boundary` lies inside the polygon, no edge
    /// of `boundary` crosses a polygon edge, and no hole is entirely
    /// swallowed by `boundary` (the geodesic analogue of `FULL`
    /// containment, mirroring `Polygon::fully_contains`).
    ///
    /// The first check alone misses a concave notch (or a hole) that dips
    /// into `boundary` without any polygon vertex actually leaving it; the
    /// crossing and hole checks below are what this method's callers (the
    /// traversal's bulk-emit optimization for fully-contained subtrees) rely
    /// on to stay sound.
    #[must_use]
    pub(crate) fn contains_boundary(&self, boundary: &Boundary) -> bool {
        if !boundary.iter().all(|&v| self.contains_point(v)) {
            return false;
        }
        if self.crosses_boundary(boundary) {
            return false;
        }

        let cell_loop = GeodesicLoop::from_boundary(boundary);
        !self.holes.iter().any(|hole| {
            hole.edges.iter().any(|edge| cell_loop.contains_point(edge.from))
        })
    }

    /// Whether `boundary`'s arcs intersect any edge of the polygon, or any
    /// of its vertices lie inside the polygon (the geodesic analogue of
    /// `OVERLAPPING` containment).
    #[must_use]
    pub(crate) fn intersects_boundary(&self, boundary: &Boundary) -> bool {
        if boundary.iter().any(|&v| self.contains_point(v)) {
            return true;
        }

        self.crosses_boundary(boundary)
    }

    /// Whether any edge of `boundary` crosses any edge of this polygon
    /// (exterior or hole).
    fn crosses_boundary(&self, boundary: &Boundary) -> bool {
        let cell_loop = GeodesicLoop::from_boundary(boundary);

        let all_loops =
            std::iter::once(&self.exterior).chain(self.holes.iter());
        for geo_loop in all_loops {
            for poly_edge in &geo_loop.edges {
                for cell_edge in &cell_loop.edges {
                    if poly_edge.crosses(&cell_edge.from, &cell_edge.to) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Whether this polygon could possibly intersect the spherical cap
    /// `cap` (conservative: a `false` return means it definitely can't).
    #[must_use]
    pub(crate) fn may_intersect_cap(&self, cap: &SphereCap) -> bool {
        if self.exterior.may_intersect_cap(cap) {
            return true;
        }
        self.holes.iter().any(|h| h.may_intersect_cap(cap))
    }
}

#[cfg(test)]
#[path = "./geodesic_tests.rs"]
mod tests;
