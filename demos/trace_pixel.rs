// Copyright 2025 Lars Brubaker
// Per-edge winding analysis for one sample of a sprite outline.
//
// Usage: cargo run --example trace_pixel -- [x y]
// Without arguments the CamoHat black-path pixel (2, 40) is analysed.

use log::{error, info};
use pixel_winding::{classify, classify_traced, Point, PolygonRegion, Verdict, DEFAULT_EPSILON};

const WIDTH: usize = 6;
const HEIGHT: usize = 16;
const TOP: usize = 29;

fn camo_hat() -> Vec<(f64, f64)> {
    vec![
        (0.05, 39.52),
        (1.93, 39.52),
        (1.93, 41.40),
        (3.81, 41.40),
        (3.81, 43.28),
        (3.81, 30.0),
        (0.05, 30.0),
    ]
}

fn query_from_args() -> Point {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    match args.as_slice() {
        [x, y] => Point::new(*x, *y),
        _ => Point::new(2.5, 40.5),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let region = match PolygonRegion::from_coords(&camo_hat()) {
        Ok(r) => r,
        Err(e) => {
            error!("bad outline: {}", e);
            return;
        }
    };
    let query = query_from_args();

    let result = match classify_traced(&region, query, DEFAULT_EPSILON) {
        Ok(r) => r,
        Err(e) => {
            error!("cannot classify ({}, {}): {}", query.x, query.y, e);
            return;
        }
    };

    if let Some(trace) = &result.trace {
        println!("{}", trace);
    }
    println!("verdict: {:?}", result.verdict);
    info!(
        "({}, {}) is {:?} with winding number {}",
        query.x, query.y, result.verdict, result.winding_number
    );

    // Neighbourhood of the sample as the rasterizer would see it.
    println!();
    for py in TOP..TOP + HEIGHT {
        let row: String = (0..WIDTH)
            .map(|px| {
                let p = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                match classify(&region, p, DEFAULT_EPSILON).map(|r| r.verdict) {
                    Ok(Verdict::Inside) => '#',
                    Ok(Verdict::OnBoundary) => '+',
                    Ok(Verdict::Outside) => '.',
                    Err(_) => '?',
                }
            })
            .collect();
        println!("{:>3} {}", py, row);
    }
}
