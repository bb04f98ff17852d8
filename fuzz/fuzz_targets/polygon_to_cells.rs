#![no_main]

use h3o::{
    polyfill::{max_polygon_to_cells_size, polygon_to_cells, PolyfillConfig, Polygon},
    LatLng, Resolution,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct Args {
    resolution: Resolution,
    values: Vec<f64>,
}

fuzz_target!(|args: Args| {
    let ring = args
        .values
        .chunks_exact(2)
        .filter_map(|chunk| LatLng::new(chunk[0], chunk[1]).ok())
        .collect::<Vec<_>>();

    let Ok(polygon) = Polygon::new(ring, Vec::new()) else {
        return;
    };

    let Ok(upper_bound) = max_polygon_to_cells_size(&polygon, args.resolution) else {
        return;
    };
    if upper_bound > 4_000_000 {
        return;
    }

    let config = PolyfillConfig::new(args.resolution);
    let mut out = Vec::new();
    let _ = polygon_to_cells(&polygon, config, &mut out);
});
