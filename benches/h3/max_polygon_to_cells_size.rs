use criterion::{black_box, Criterion};
use h3o::{
    polyfill::{max_polygon_to_cells_size, Polygon},
    LatLng, Resolution,
};
use std::os::raw::c_int;

const RESOLUTION: Resolution = Resolution::Nine;

/// San Francisco-ish hexagon, lat/lng in radians.
const SAN_FRANCISCO: [(f64, f64); 6] = [
    (0.659_966_917_655, -2.136_439_851_939_6),
    (0.659_501_110_221_9, -2.135_943_427_940_5),
    (0.658_334_811_402_5, -2.135_488_420_604_5),
    (0.658_122_003_406_8, -2.138_243_771_894_6),
    (0.659_447_999_852_7, -2.138_459_756_389_6),
    (0.659_999_000_297_6, -2.137_677_115_846_4),
];

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("maxPolygonToCellsSize");
    let ring = SAN_FRANCISCO
        .iter()
        .map(|&(lat, lng)| LatLng::from_radians(lat, lng).expect("vertex"))
        .collect::<Vec<_>>();
    let polygon = Polygon::new(ring.clone(), Vec::new()).expect("polygon");

    group.bench_function("h3o", |b| {
        b.iter(|| {
            max_polygon_to_cells_size(black_box(&polygon), RESOLUTION)
                .expect("non-degenerate polygon")
        })
    });
    group.bench_function("h3", |b| {
        let mut coords = ring
            .iter()
            .map(|ll| h3ron_h3_sys::LatLng {
                lat: ll.lat_radians(),
                lng: ll.lng_radians(),
            })
            .collect::<Vec<_>>();
        let geoloop = h3ron_h3_sys::GeoLoop {
            numVerts: coords.len() as c_int,
            verts: coords.as_mut_ptr(),
        };
        let polygon = h3ron_h3_sys::GeoPolygon {
            geoloop,
            numHoles: 0,
            holes: std::ptr::null_mut(),
        };
        let mut out = 0;
        b.iter(|| unsafe {
            h3ron_h3_sys::maxPolygonToCellsSize(
                black_box(&polygon),
                black_box(u8::from(RESOLUTION).into()),
                0,
                &mut out,
            );
        })
    });

    group.finish();
}
