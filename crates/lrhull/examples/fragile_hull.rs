//! Build the fragile demo hull under both predicates and audit each with the
//! exact one.
//!
//! Usage:
//!   cargo run -p lrhull --example fragile_hull

use lrhull::prelude::*;

fn main() {
    let pts = fragile_demo_points();
    for pred in PredicateKind::ALL {
        match IncrementalHull::from_points(pred, HullCfg::default(), &pts) {
            Ok(h) => {
                let bad = violations(h.vertices(), &pts, &Robust);
                println!(
                    "{pred}: {} vertices, convex={}, outside pairs={}",
                    h.len(),
                    is_convex(h.vertices(), &Robust),
                    bad.len()
                );
                for v in h.vertices() {
                    println!("  ({}, {})", v.x, v.y);
                }
            }
            Err(e) => eprintln!("{pred}: {e}"),
        }
    }
}
