//! Benchmark for insert / remove churn
//!
//! Measures how fast the tree splits and merges when the same region is
//! repeatedly filled and emptied.

use quadforest::{Point, QuadTree, Range};
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

fn main() {
    println!("quadforest QuadTree Churn Benchmark");
    println!("===================================\n");

    let num_items = 200_000;
    let rounds = 5_u32;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for capacity in [1, 4, 16, 64] {
        let Ok(mut tree) = QuadTree::new(Range::new((0.0, 0.0), (1000.0, 1000.0)), capacity) else {
            eprintln!("invalid capacity {capacity}");
            return;
        };
        let mut points: Vec<Point<f64>> = (0..num_items)
            .map(|_| Point::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0)))
            .collect();

        let mut insert_ms = 0.0;
        let mut remove_ms = 0.0;
        for _ in 0..rounds {
            let start = Instant::now();
            for p in &points {
                if !tree.insert(*p) {
                    eprintln!("insert rejected: {p:?}");
                }
            }
            insert_ms += start.elapsed().as_secs_f64() * 1000.0;

            points.shuffle(&mut rng);
            let start = Instant::now();
            for p in &points {
                if !tree.remove(*p) {
                    eprintln!("remove rejected: {p:?}");
                }
            }
            remove_ms += start.elapsed().as_secs_f64() * 1000.0;
        }

        println!(
            "capacity {:>3}: insert {:.2}ms, remove {:.2}ms per round, {} nodes left",
            capacity,
            insert_ms / f64::from(rounds),
            remove_ms / f64::from(rounds),
            tree.node_count()
        );
    }
}
