use h3o::{
    polyfill::{
        max_polygon_to_cells_size, polygon_to_cells, ContainmentMode,
        ExpandingPolygonIter, PolyfillConfig, Polygon, PolygonIter,
    },
    error::PolygonToCellsError,
    CellIndex, LatLng, Resolution,
};

fn san_francisco() -> Vec<LatLng> {
    [
        (0.659_966_917_655, -2.136_439_851_939_6),
        (0.659_501_110_221_9, -2.135_943_427_940_5),
        (0.658_334_811_402_5, -2.135_488_420_604_5),
        (0.658_122_003_406_8, -2.138_243_771_894_6),
        (0.659_447_999_852_7, -2.138_459_756_389_6),
        (0.659_999_000_297_6, -2.137_677_115_846_4),
    ]
    .into_iter()
    .map(|(lat, lng)| LatLng::from_radians(lat, lng).expect("valid vertex"))
    .collect()
}

#[test]
fn rejects_short_exterior_ring() {
    let ring = vec![
        LatLng::new(0., 0.).expect("valid vertex"),
        LatLng::new(0., 1.).expect("valid vertex"),
    ];

    assert!(matches!(
        Polygon::new(ring, Vec::new()),
        Err(PolygonToCellsError::EmptyHole)
    ));
}

#[test]
fn rejects_short_hole() {
    let hole = vec![
        LatLng::new(37.0, -122.0).expect("valid vertex"),
        LatLng::new(37.1, -122.0).expect("valid vertex"),
    ];

    assert!(matches!(
        Polygon::new(san_francisco(), vec![hole]),
        Err(PolygonToCellsError::EmptyHole)
    ));
}

// `GEODESIC | CENTER` and `GEODESIC | OVERLAPPING_BBOX` are always invalid,
// regardless of the polygon or the resolution (spec scenario 6).
#[test]
fn geodesic_rejects_unsupported_modes() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");

    let center_geodesic = PolyfillConfig::new(Resolution::Nine)
        .containment_mode(ContainmentMode::Center)
        .geodesic(true);
    assert!(matches!(
        PolygonIter::new(&polygon, center_geodesic),
        Err(PolygonToCellsError::InvalidOption)
    ));

    let bbox_geodesic = PolyfillConfig::new(Resolution::Nine)
        .containment_mode(ContainmentMode::OverlappingBbox)
        .geodesic(true);
    assert!(matches!(
        PolygonIter::new(&polygon, bbox_geodesic),
        Err(PolygonToCellsError::InvalidOption)
    ));
}

#[test]
fn geodesic_accepts_full_and_overlapping() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");

    for mode in [ContainmentMode::Full, ContainmentMode::Overlapping] {
        let config = PolyfillConfig::new(Resolution::Nine)
            .containment_mode(mode)
            .geodesic(true);

        assert!(PolygonIter::new(&polygon, config).is_ok());
    }
}

// P6: a polygon equal to the exact boundary of a single cell returns that
// cell alone in `Center` mode.
#[test]
fn self_polygon_identity() {
    let cell = CellIndex::try_from(0x8a1_fb4_662_2df_fff_u64).expect("valid cell");
    let ring: Vec<LatLng> = cell.boundary().iter().copied().collect();
    let polygon = Polygon::new(ring, Vec::new()).expect("valid polygon");
    let config = PolyfillConfig::new(cell.resolution());

    let cells: Vec<_> = PolygonIter::new(&polygon, config).expect("valid config").collect();

    assert_eq!(cells, vec![cell]);
}

// P5: containment monotonicity between modes (up to boundary tie-break
// noise near the polygon edge, which doesn't apply here since the test
// polygon's edges don't run along a cell boundary).
#[test]
fn containment_monotonicity() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");
    let resolution = Resolution::Nine;

    let collect = |mode| -> std::collections::HashSet<CellIndex> {
        let config = PolyfillConfig::new(resolution).containment_mode(mode);
        PolygonIter::new(&polygon, config).expect("valid config").collect()
    };

    let full = collect(ContainmentMode::Full);
    let center = collect(ContainmentMode::Center);
    let overlapping = collect(ContainmentMode::Overlapping);
    let bbox = collect(ContainmentMode::OverlappingBbox);

    assert!(full.is_subset(&center));
    assert!(full.is_subset(&overlapping));
    assert!(center.is_subset(&overlapping));
    assert!(overlapping.is_subset(&bbox));
}

// P7: the size estimator never undercounts the traversal's actual output.
#[test]
fn size_estimator_is_an_upper_bound() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");

    for resolution in Resolution::range(Resolution::Five, Resolution::Nine) {
        let upper_bound = max_polygon_to_cells_size(&polygon, resolution)
            .expect("non-degenerate polygon");
        let config = PolyfillConfig::new(resolution);

        let mut out = Vec::new();
        polygon_to_cells(&polygon, config, &mut out).expect("valid config");

        assert!(
            u64::try_from(out.len()).expect("cell count fits u64") <= upper_bound,
            "resolution {resolution}: {} cells exceeds estimate {upper_bound}",
            out.len()
        );
    }
}

// A polygon with a hole excludes every cell whose center falls in the hole.
#[test]
fn hole_excludes_its_interior() {
    let hole = vec![
        LatLng::from_radians(0.659_507_218_874_3, -2.137_105_398_343_3)
            .expect("valid vertex"),
        LatLng::from_radians(0.659_148_204_647_1, -2.137_314_104_815_3)
            .expect("valid vertex"),
        LatLng::from_radians(0.659_229_502_083_7, -2.136_522_283_840_2)
            .expect("valid vertex"),
    ];
    let with_hole =
        Polygon::new(san_francisco(), vec![hole.clone()]).expect("valid polygon");
    let without_hole = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");
    let config = PolyfillConfig::new(Resolution::Nine);

    let with_hole_cells: std::collections::HashSet<_> =
        PolygonIter::new(&with_hole, config).expect("valid config").collect();
    let without_hole_cells: std::collections::HashSet<_> =
        PolygonIter::new(&without_hole, config).expect("valid config").collect();

    assert!(with_hole_cells.len() < without_hole_cells.len());
    assert!(with_hole_cells.is_subset(&without_hole_cells));
}

// The borrowing and owning (expanding) iterators agree on output order.
#[test]
fn expanding_iterator_matches_borrowing() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");
    let config = PolyfillConfig::new(Resolution::Seven);

    let borrowing: Vec<_> =
        PolygonIter::new(&polygon, config).expect("valid config").collect();
    let expanding: Vec<_> =
        ExpandingPolygonIter::new(polygon, config).expect("valid config").collect();

    assert_eq!(borrowing, expanding);
}

// Literal end-to-end scenarios (spec §8, scenarios 1-4). These are planar
// (non-geodesic) fills, so the expected counts don't depend on any geodesic
// approximation and must match exactly.
#[test]
fn scenario_sf_hexagon_res9_center() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");
    let config = PolyfillConfig::new(Resolution::Nine);

    let mut out = Vec::new();
    polygon_to_cells(&polygon, config, &mut out).expect("valid config");

    assert_eq!(out.len(), 1253);
}

#[test]
fn scenario_sf_hexagon_res9_other_modes() {
    let polygon = Polygon::new(san_francisco(), Vec::new()).expect("valid polygon");

    let count = |mode| -> usize {
        let config = PolyfillConfig::new(Resolution::Nine).containment_mode(mode);
        let mut out = Vec::new();
        polygon_to_cells(&polygon, config, &mut out).expect("valid config");
        out.len()
    };

    assert_eq!(count(ContainmentMode::Full), 1175);
    assert_eq!(count(ContainmentMode::Overlapping), 1334);
    assert_eq!(count(ContainmentMode::OverlappingBbox), 1416);
}

#[test]
fn scenario_sf_polygon_with_hole_res9() {
    let hole = vec![
        LatLng::from_radians(0.659_507_218_874_3, -2.137_105_398_343_3)
            .expect("valid vertex"),
        LatLng::from_radians(0.659_148_204_647_1, -2.137_314_104_815_3)
            .expect("valid vertex"),
        LatLng::from_radians(0.659_229_502_083_7, -2.136_522_283_840_2)
            .expect("valid vertex"),
    ];
    let polygon = Polygon::new(san_francisco(), vec![hole]).expect("valid polygon");

    let count = |mode| -> usize {
        let config = PolyfillConfig::new(Resolution::Nine).containment_mode(mode);
        let mut out = Vec::new();
        polygon_to_cells(&polygon, config, &mut out).expect("valid config");
        out.len()
    };

    assert_eq!(count(ContainmentMode::Center), 1214);
    assert_eq!(count(ContainmentMode::Full), 1118);
    assert_eq!(count(ContainmentMode::Overlapping), 1311);
}

// P8: a transmeridian rectangle and its prime-meridian mirror yield nearly
// identical counts (the slight difference is expected grid offset noise).
#[test]
fn scenario_transmeridian_symmetry_res7() {
    let pi = std::f64::consts::PI;
    let transmeridian = vec![
        LatLng::from_radians(0.01, -pi + 0.01).expect("valid vertex"),
        LatLng::from_radians(0.01, pi - 0.01).expect("valid vertex"),
        LatLng::from_radians(-0.01, pi - 0.01).expect("valid vertex"),
        LatLng::from_radians(-0.01, -pi + 0.01).expect("valid vertex"),
    ];
    let polygon = Polygon::new(transmeridian, Vec::new()).expect("valid polygon");
    let config = PolyfillConfig::new(Resolution::Seven);

    let mut out = Vec::new();
    polygon_to_cells(&polygon, config, &mut out).expect("valid config");
    assert_eq!(out.len(), 4238);

    // Same rectangle, mirrored to be centered on the prime meridian instead
    // of the antimeridian.
    let prime_meridian = vec![
        LatLng::from_radians(0.01, -0.01).expect("valid vertex"),
        LatLng::from_radians(0.01, 0.01).expect("valid vertex"),
        LatLng::from_radians(-0.01, 0.01).expect("valid vertex"),
        LatLng::from_radians(-0.01, -0.01).expect("valid vertex"),
    ];
    let mirrored = Polygon::new(prime_meridian, Vec::new()).expect("valid polygon");
    let mut mirrored_out = Vec::new();
    polygon_to_cells(&mirrored, config, &mut mirrored_out).expect("valid config");
    assert_eq!(mirrored_out.len(), 4228);
}

// Expanding a resolution-N cell's own boundary one level finer is exactly
// that cell's children (round-trip/idempotence property from spec §8).
#[test]
fn expanding_cell_boundary_matches_children() {
    let leaf = CellIndex::try_from(0x8a1_fb4_662_2df_fff_u64).expect("valid cell");
    let cell = leaf.parent(Resolution::Eight).expect("ancestor");
    let ring: Vec<LatLng> = cell.boundary().iter().copied().collect();
    let polygon = Polygon::new(ring, Vec::new()).expect("valid polygon");
    let child_res = cell.resolution().succ().expect("finer resolution exists");
    let config = PolyfillConfig::new(child_res);

    let mut from_polyfill: Vec<_> =
        PolygonIter::new(&polygon, config).expect("valid config").collect();
    let mut from_children: Vec<_> = cell.children(child_res).collect();
    from_polyfill.sort_unstable();
    from_children.sort_unstable();

    assert_eq!(from_polyfill, from_children);
}
