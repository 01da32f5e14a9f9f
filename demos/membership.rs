//! Insert, look up and remove single points.
use quadforest::prelude::*;

fn main() -> Result<(), QuadTreeError> {
    tracing_subscriber::fmt::init();

    let config = QuadTreeConfig::default().with_capacity(2);
    let mut tree = QuadTree::with_config(Range::new((0, 0), (16, 16)), config)?;
    for p in [(1, 2), (-1, 1), (3, 4), (-4, 3)] {
        tree.insert(p);
    }

    println!("Contains (-4, 3): {}", tree.search((-4, 3)));
    println!("Contains (0, 0): {}", tree.search((0, 0)));
    println!("Insert duplicate (3, 4): {}", tree.insert((3, 4)));
    println!("Insert outside (40, 0): {}", tree.insert((40, 0)));

    tree.remove((1, 2));
    println!("After remove, contains (1, 2): {}", tree.search((1, 2)));

    tree.clear();
    println!("After clear: {} points, leaf root: {}", tree.len(), tree.is_leaf());
    Ok(())
}
