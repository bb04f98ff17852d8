//! Ray-casting and winding-order algorithms shared by every loop-like shape
//! in this crate (input rings, cell boundaries), parameterized over a small
//! capability set rather than duplicated per concrete type.

use super::bbox::BBox;
use crate::{coord::to_positive_angle, LatLng};
use std::f64::consts::PI;

/// Anything that behaves like a closed loop of vertices on the sphere.
///
/// This is the "loop polymorphism without inheritance" seam: both
/// user-supplied rings and cell boundaries implement it, and the ray-casting/
/// winding-order/line-crossing algorithms below are written once against
/// this trait instead of once per concrete shape.
pub(crate) trait VertexLoop {
    /// Number of vertices in the loop.
    fn vertex_count(&self) -> usize;

    /// The vertex at `index` (`index < self.vertex_count()`).
    fn vertex(&self, index: usize) -> LatLng;

    /// Whether the loop has no vertices at all.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Iterates the closed loop's edges as `(from, to)` pairs, wrapping the
    /// last vertex back to the first.
    fn edges(&self) -> EdgeIter<'_, Self> {
        EdgeIter { vloop: self, index: 0 }
    }
}

impl VertexLoop for [LatLng] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex(&self, index: usize) -> LatLng {
        self[index]
    }
}

impl VertexLoop for crate::Boundary {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn vertex(&self, index: usize) -> LatLng {
        self[index]
    }
}

/// Iterator over the `(from, to)` edges of a [`VertexLoop`].
pub(crate) struct EdgeIter<'a, L: VertexLoop + ?Sized> {
    vloop: &'a L,
    index: usize,
}

impl<'a, L: VertexLoop + ?Sized> Iterator for EdgeIter<'a, L> {
    type Item = (LatLng, LatLng);

    fn next(&mut self) -> Option<Self::Item> {
        let count = self.vloop.vertex_count();
        if self.index >= count {
            return None;
        }
        let from = self.vloop.vertex(self.index);
        let to = self.vloop.vertex((self.index + 1) % count);
        self.index += 1;
        Some((from, to))
    }
}

/// Whether `point` lies inside `vloop`, using a ray cast due east (toward
/// increasing, normalized longitude) and counting edge crossings.
///
/// Ties (the ray passing exactly through a vertex) are broken by nudging the
/// ray's effective latitude by `DBL_EPSILON`, matching the reference
/// point-in-polygon routine; this also determines the (documented, not
/// "fixed") behavior at the poles.
pub(crate) fn point_inside<L: VertexLoop + ?Sized>(
    vloop: &L,
    point: LatLng,
) -> bool {
    if vloop.is_empty() {
        return false;
    }

    let lat = point.lat_radians();
    let lng = to_positive_angle(point.lng_radians());
    let mut contains = false;

    for (a, b) in vloop.edges() {
        // Ignore edges that don't straddle the point's latitude.
        let a_lat = a.lat_radians();
        let b_lat = b.lat_radians();
        if (lat < a_lat) == (lat < b_lat) {
            continue;
        }

        let a_lng = to_positive_angle(a.lng_radians());
        let b_lng = to_positive_angle(b.lng_radians());

        // Longitude of the edge/ray intersection, via linear interpolation
        // on latitude (nudge away from the shared vertex to avoid double
        // counting when the ray passes exactly through it).
        let t = (lat - a_lat) / (b_lat - a_lat);
        let cross_lng = to_positive_angle(
            a_lng + t * shortest_delta(a_lng, b_lng) + f64::EPSILON,
        );

        if cross_lng > lng {
            contains = !contains;
        }
    }

    contains
}

/// Signed shortest angular delta from `a` to `b`, in `(-pi, pi]`.
fn shortest_delta(a: f64, b: f64) -> f64 {
    let mut delta = b - a;
    if delta > PI {
        delta -= 2. * PI;
    } else if delta < -PI {
        delta += 2. * PI;
    }
    delta
}

/// Builds the bounding box enclosing `vloop`.
pub(crate) fn bbox_from_loop<L: VertexLoop + ?Sized>(vloop: &L) -> BBox {
    BBox::from_loop((0..vloop.vertex_count()).map(|i| vloop.vertex(i)))
}

/// Whether `vloop`'s vertices are wound clockwise (as seen from outside the
/// sphere, i.e. in the conventional "exterior ring" sense), accounting for
/// the antimeridian the same way the bounding-box code does: if the signed
/// area sum disagrees with a normalized-longitude re-computation, the
/// un-normalized result is discarded in favor of the normalized one.
pub(crate) fn is_clockwise<L: VertexLoop + ?Sized>(vloop: &L) -> bool {
    let sum: f64 = vloop
        .edges()
        .map(|(a, b)| {
            (b.lng_radians() - a.lng_radians())
                * (b.lat_radians() + a.lat_radians())
        })
        .sum();

    if sum != 0. {
        return sum > 0.;
    }

    let sum_normalized: f64 = vloop
        .edges()
        .map(|(a, b)| {
            let a_lng = to_positive_angle(a.lng_radians());
            let b_lng = to_positive_angle(b.lng_radians());
            (b_lng - a_lng) * (b.lat_radians() + a.lat_radians())
        })
        .sum();

    sum_normalized > 0.
}

/// Whether segment `(a1, a2)` crosses segment `(b1, b2)`, treating both as
/// great-circle-adjacent straight lines in lat/lng space (matches the
/// reference implementation's planar-in-lat/lng-space line crossing test,
/// which is sufficient for the short edges produced at any H3 resolution).
#[allow(clippy::many_single_char_names)]
pub(crate) fn line_crosses_line(
    a1: LatLng,
    a2: LatLng,
    b1: LatLng,
    b2: LatLng,
) -> bool {
    let d1 = direction(b1, b2, a1);
    let d2 = direction(b1, b2, a2);
    let d3 = direction(a1, a2, b1);
    let d4 = direction(a1, a2, b2);

    if ((d1 > 0.) != (d2 > 0.)) && ((d3 > 0.) != (d4 > 0.)) {
        return true;
    }

    false
}

fn direction(a: LatLng, b: LatLng, c: LatLng) -> f64 {
    (c.lng_radians() - a.lng_radians()) * (b.lat_radians() - a.lat_radians())
        - (b.lng_radians() - a.lng_radians())
            * (c.lat_radians() - a.lat_radians())
}

#[cfg(test)]
#[path = "./loop_algo_tests.rs"]
mod tests;
