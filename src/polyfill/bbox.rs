use crate::{error::PolygonToCellsError, LatLng, Resolution};

/// Area of the most-distorted (pentagon-adjacent) hexagon, in steradians,
/// at each resolution.
///
/// Shared with the legacy `geom` bounding-box estimator: a regular hexagon's
/// area is `3/2*sqrt(3) * r * r`; the pentagon has the smallest edges and
/// shares them with its neighbouring hexagons, so its area is a conservative
/// (small) stand-in for "the smallest cell the bbox could be tiled with".
const PENT_AREA_RADS2: [f64; 16] = [
    0.05505118472518226,
    0.006358420186890303,
    0.0009676234334810151,
    0.00012132336301389888,
    0.000019309418286620768,
    0.0000024521770265310696,
    0.0000003928026439666205,
    0.00000004997535264470275,
    0.000000008012690511075445,
    0.0000000010197039091132572,
    0.00000000016351353999538285,
    0.000000000020809697203105007,
    0.000000000003336979666606075,
    0.0000000000004246859893033221,
    0.00000000000006810153522091642,
    0.000000000000008667056198238203,
];

/// A transmeridian-aware axis-aligned latitude/longitude bounding box.
///
/// All fields are in radians. When `west > east`, the box crosses the
/// antimeridian and spans from `west` eastward through +-pi to `east`
/// (mirrors the handling in the upstream bounding-box arithmetic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BBox {
    /// Whether this bbox crosses the antimeridian.
    #[must_use]
    pub const fn is_transmeridian(&self) -> bool {
        self.east < self.west
    }

    /// Width of the bbox, in radians.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_transmeridian() {
            self.east + crate::TWO_PI - self.west
        } else {
            self.east - self.west
        }
    }

    /// Height of the bbox, in radians.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Center of the bbox.
    #[must_use]
    pub fn center(&self) -> LatLng {
        let lat = (self.north + self.south) / 2.;
        let lng = if self.is_transmeridian() {
            let width = self.width();
            let mut lng = self.east - width / 2.;
            if lng < -std::f64::consts::PI {
                lng += crate::TWO_PI;
            }
            lng
        } else {
            (self.east + self.west) / 2.
        };
        LatLng::from_radians(lat, lng).expect("finite bbox center")
    }

    /// Whether `ll` lies within this bbox (inclusive bounds).
    #[must_use]
    pub fn contains(&self, ll: LatLng) -> bool {
        let lat = ll.lat_radians();
        let lng = ll.lng_radians();

        if lat < self.south || lat > self.north {
            return false;
        }
        if self.is_transmeridian() {
            lng >= self.west || lng <= self.east
        } else {
            lng >= self.west && lng <= self.east
        }
    }

    /// Whether `other` is entirely nested inside this bbox.
    ///
    /// Conservative across a transmeridian mismatch between the two boxes
    /// (returns `false` rather than attempting to reconcile the wrap), since
    /// the only caller needs a sound "definitely nested" answer, not a
    /// best-effort one.
    #[must_use]
    pub fn contains_bbox(&self, other: &Self) -> bool {
        if self.north < other.north || self.south > other.south {
            return false;
        }
        if self.is_transmeridian() != other.is_transmeridian() {
            return false;
        }
        // The nesting condition reads identically whether or not both boxes
        // wrap the antimeridian: once they agree on transmeridian-ness,
        // "west" and "east" already point the same way round for both.
        other.west >= self.west && other.east <= self.east
    }

    /// Whether this bbox shares any area with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.north < other.south || self.south > other.north {
            return false;
        }
        let (a, b) = Self::normalize(*self, *other);
        if a.is_transmeridian() {
            a.east >= b.west || a.west <= b.east
        } else if b.is_transmeridian() {
            b.east >= a.west || b.west <= a.east
        } else {
            a.east >= b.west && a.west <= b.east
        }
    }

    /// Whether the two bboxes cover the same area, within `epsilon` radians.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.north - other.north).abs() < epsilon
            && (self.south - other.south).abs() < epsilon
            && (self.east - other.east).abs() < epsilon
            && (self.west - other.west).abs() < epsilon
    }

    /// Inflates the bbox by `scale` (a multiplicative factor applied to
    /// both half-width and half-height around the center).
    #[must_use]
    pub fn scale(&self, scale: f64) -> Self {
        let center = self.center();
        let half_width = self.width() / 2. * scale;
        let half_height = self.height() / 2. * scale;

        let mut west = center.lng_radians() - half_width;
        let mut east = center.lng_radians() + half_width;
        if west < -std::f64::consts::PI {
            west += crate::TWO_PI;
        }
        if east > std::f64::consts::PI {
            east -= crate::TWO_PI;
        }

        Self {
            north: (center.lat_radians() + half_height)
                .min(std::f64::consts::FRAC_PI_2),
            south: (center.lat_radians() - half_height)
                .max(-std::f64::consts::FRAC_PI_2),
            east,
            west,
        }
    }

    /// Normalizes a pair of bboxes so that their transmeridian-ness is
    /// consistent, following the upstream three-way rule:
    /// - neither crosses the antimeridian: no change.
    /// - both cross: normalize both eastward (longitudes in `[0, 2pi)`).
    /// - exactly one crosses: normalize the non-crossing one toward
    ///   whichever side has the smaller gap, using
    ///   `a.west - b.east < b.west - a.east` as the tie-break (taken
    ///   verbatim from the reference bounding-box normalization routine;
    ///   the direction of this comparison is not recoverable from a
    ///   symmetric restatement of the rule).
    #[must_use]
    pub fn normalize(mut a: Self, mut b: Self) -> (Self, Self) {
        let a_tm = a.is_transmeridian();
        let b_tm = b.is_transmeridian();

        if a_tm && b_tm {
            return (a, b);
        }
        if !a_tm && !b_tm {
            return (a, b);
        }

        if a_tm {
            if a.west - b.east < b.west - a.east {
                b.east = normalize_east(b.east);
                b.west = normalize_east(b.west);
            } else {
                a.east = normalize_east(a.east);
                a.west = normalize_east(a.west);
            }
        } else if b.west - a.east < a.west - b.east {
            a.east = normalize_east(a.east);
            a.west = normalize_east(a.west);
        } else {
            b.east = normalize_east(b.east);
            b.west = normalize_east(b.west);
        }

        (a, b)
    }

    /// Builds the bounding box enclosing a closed loop of points.
    ///
    /// The loop is assumed closed (first point implicitly connects back to
    /// the last); `points` must yield at least 3 distinct vertices.
    pub fn from_loop(points: impl Iterator<Item = LatLng>) -> Self {
        let verts: Vec<LatLng> = points.collect();
        assert!(verts.len() >= 3, "loop must have at least 3 vertices");

        let mut north = f64::MIN;
        let mut south = f64::MAX;
        let mut raw_east = f64::MIN;
        let mut raw_west = f64::MAX;
        let mut min_pos_lng = f64::MAX;
        let mut max_neg_lng = f64::MIN;
        let mut is_transmeridian = false;

        for (i, &curr) in verts.iter().enumerate() {
            let lat = curr.lat_radians();
            let lng = curr.lng_radians();

            south = south.min(lat);
            north = north.max(lat);
            raw_west = raw_west.min(lng);
            raw_east = raw_east.max(lng);
            if lng >= 0. {
                min_pos_lng = min_pos_lng.min(lng);
            } else {
                max_neg_lng = max_neg_lng.max(lng);
            }

            let next = verts[(i + 1) % verts.len()];
            if (lng - next.lng_radians()).abs() > std::f64::consts::PI {
                is_transmeridian = true;
            }
        }

        let (east, west) = if is_transmeridian {
            (max_neg_lng, min_pos_lng)
        } else {
            (raw_east, raw_west)
        };

        Self { north, south, east, west }
    }

    /// Estimated number of hexagons needed to tile this bbox at `resolution`
    /// (always at least 1).
    ///
    /// Mirrors `bboxHexEstimate`: the ratio between the bbox's long and
    /// short sides is capped at 3 before dividing it out of the diagonal's
    /// squared length, so a very elongated or skewed bbox (where that ratio
    /// would otherwise blow up and collapse the estimated area toward zero)
    /// still gets a conservative, non-vanishing area estimate. Without the
    /// cap the estimate can undercount arbitrarily badly for a thin sliver
    /// of a bbox, breaking the "never less than the true count" guarantee
    /// this estimator exists for.
    ///
    /// # Errors
    ///
    /// [`PolygonToCellsError::Failed`] if the bbox has zero width or zero
    /// height (a degenerate, line- or point-like input), or if the estimate
    /// is otherwise non-finite.
    pub fn hex_estimate(
        &self,
        resolution: Resolution,
    ) -> Result<u64, PolygonToCellsError> {
        let pentagon_area_rads2 = PENT_AREA_RADS2[usize::from(resolution)];

        let p1 = LatLng::from_radians(self.south, self.west)
            .expect("finite bbox corner");
        let p2 = LatLng::from_radians(self.north, self.east)
            .expect("finite bbox corner");
        let diagonal = p1.distance_rads(p2);
        let d1 = self.width();
        let d2 = self.height();
        let (width, length) = if d1 < d2 { (d1, d2) } else { (d2, d1) };

        if width == 0. {
            return Err(PolygonToCellsError::Failed);
        }

        let ratio = (length / width).min(3.);
        let area = (diagonal * diagonal) / ratio;

        let estimate = (area / pentagon_area_rads2).ceil();
        if !estimate.is_finite() {
            return Err(PolygonToCellsError::Failed);
        }

        #[allow(clippy::cast_sign_loss)]
        let estimate = estimate as u64;

        Ok(estimate.max(1))
    }

    /// Estimated number of hexagons a line segment of this many radians
    /// would cross, at `resolution` (always at least 1).
    ///
    /// # Errors
    ///
    /// [`PolygonToCellsError::Failed`] if the estimate is non-finite.
    pub fn line_hex_estimate(
        a: LatLng,
        b: LatLng,
        resolution: Resolution,
    ) -> Result<u64, PolygonToCellsError> {
        let dist_rads = a.distance_rads(b);
        let edge_rads = resolution.edge_length_km() / crate::EARTH_RADIUS_KM;
        let estimate = (dist_rads / edge_rads).ceil();
        if !estimate.is_finite() {
            return Err(PolygonToCellsError::Failed);
        }

        #[allow(clippy::cast_sign_loss)]
        let estimate = estimate as u64;

        Ok(estimate.max(1))
    }
}

fn normalize_east(lng: f64) -> f64 {
    if lng < 0. {
        lng + crate::TWO_PI
    } else {
        lng
    }
}

#[cfg(test)]
#[path = "./bbox_tests.rs"]
mod tests;
