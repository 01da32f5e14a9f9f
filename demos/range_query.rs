//! Find the points inside a query rectangle.
use quadforest::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QuadTreeError> {
    // RUST_LOG=quadforest=trace shows every split and merge
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Range::new((0.0, 0.0), (10.0, 10.0)), 2)?;
    for i in 0..10 {
        let v = f64::from(i);
        tree.insert((v, v));
    }
    println!("{} points, depth {}, {} nodes", tree.len(), tree.depth(), tree.node_count());

    let query = Range::new((0.0, 0.0), (5.0, 5.0));
    let mut results = Vec::new();
    tree.query(&query, |p| results.push(*p));
    println!("Inside {:?}..{:?}: {:?}", query.min(), query.max(), results);

    // Query rectangle (-5, -5)..(5, 5) holds the diagonal points 0 through 5
    assert_eq!(results.len(), 6, "Expected 6 points");
    assert!(results.contains(&Point::new(5.0, 5.0)), "Edge point (5, 5) is included");
    assert!(!results.contains(&Point::new(6.0, 6.0)), "(6, 6) is outside");
    Ok(())
}
