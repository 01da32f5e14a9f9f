//! Comparison tests between QuadTree and a brute force scan over a plain Vec

#[cfg(test)]
mod tests {
    use crate::{Point, QuadTree, Range};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const WORLD: f64 = 50.0;

    fn world(capacity: usize) -> QuadTree<f64> {
        QuadTree::new(Range::new((WORLD, WORLD), (WORLD, WORLD)), capacity).expect("valid tree")
    }

    fn random_point<R: Rng>(rng: &mut R) -> Point<f64> {
        Point::new(rng.random_range(0.0..=2.0 * WORLD), rng.random_range(0.0..=2.0 * WORLD))
    }

    fn random_range<R: Rng>(rng: &mut R, max_half: f64) -> Range<f64> {
        Range::new(
            (rng.random_range(-10.0..110.0), rng.random_range(-10.0..110.0)),
            (rng.random_range(0.0..max_half), rng.random_range(0.0..max_half)),
        )
    }

    fn sorted(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    fn brute_force(points: &[Point<f64>], range: &Range<f64>) -> Vec<Point<f64>> {
        sorted(points.iter().copied().filter(|p| range.contains(p)).collect())
    }

    fn tree_query(tree: &QuadTree<f64>, range: &Range<f64>) -> Vec<Point<f64>> {
        let mut results = Vec::new();
        tree.query_points(range, &mut results);
        sorted(results)
    }

    #[test]
    fn test_random_queries_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for capacity in [1, 4, 16] {
            let mut tree = world(capacity);
            let mut stored: Vec<Point<f64>> = Vec::new();
            for _ in 0..2_000 {
                let p = random_point(&mut rng);
                let expected = !stored.contains(&p);
                assert_eq!(tree.insert(p), expected, "insert {p:?}");
                if expected {
                    stored.push(p);
                }
            }
            assert_eq!(tree.len(), stored.len());

            for _ in 0..200 {
                let range = random_range(&mut rng, 25.0);
                assert_eq!(
                    tree_query(&tree, &range),
                    brute_force(&stored, &range),
                    "capacity {capacity}, query {range:?}"
                );
            }
        }
    }

    #[test]
    fn test_random_removals_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tree = world(3);
        let mut stored: Vec<Point<f64>> = (0..1_000).map(|_| random_point(&mut rng)).collect();
        for p in &stored {
            assert!(tree.insert(*p));
        }

        stored.shuffle(&mut rng);
        let removed = stored.split_off(stored.len() / 2);
        for p in &removed {
            assert!(tree.remove(*p));
            assert!(!tree.search(*p), "{p:?} still present after remove");
        }
        assert_eq!(tree.len(), stored.len());
        assert!(stored.iter().all(|p| tree.search(*p)), "survivors must remain");

        for _ in 0..100 {
            let range = random_range(&mut rng, 30.0);
            assert_eq!(tree_query(&tree, &range), brute_force(&stored, &range));
        }

        for p in &stored {
            assert!(tree.remove(*p));
        }
        assert!(tree.is_leaf(), "removing everything merges back to the root");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insertion_order_independence() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points: Vec<Point<f64>> = (0..500).map(|_| random_point(&mut rng)).collect();

        let mut forward = world(2);
        let mut backward = world(2);
        let mut shuffled = world(2);
        let mut order = points.clone();
        order.shuffle(&mut rng);
        for (a, (b, c)) in points.iter().zip(points.iter().rev().zip(&order)) {
            assert!(forward.insert(*a));
            assert!(backward.insert(*b));
            assert!(shuffled.insert(*c));
        }

        for _ in 0..100 {
            let range = random_range(&mut rng, 20.0);
            let expected = tree_query(&forward, &range);
            assert_eq!(tree_query(&backward, &range), expected);
            assert_eq!(tree_query(&shuffled, &range), expected);
        }
        assert_eq!(sorted(forward.points()), sorted(points));
    }

    #[test]
    fn test_random_integer_grid_matches_brute_force() {
        // multiples of 4 keep every split exact down to the smallest cells
        let mut rng = StdRng::seed_from_u64(99);
        let mut tree: QuadTree<i32> =
            QuadTree::new(Range::new((0, 0), (64, 64)), 1).expect("valid tree");
        let mut stored: Vec<Point<i32>> = Vec::new();
        for _ in 0..600 {
            let p = Point::new(rng.random_range(-16..=16) * 4, rng.random_range(-16..=16) * 4);
            assert_eq!(tree.insert(p), !stored.contains(&p), "insert {p:?}");
            if !stored.contains(&p) {
                stored.push(p);
            }
        }
        for _ in 0..100 {
            let range = Range::new(
                (rng.random_range(-70..70), rng.random_range(-70..70)),
                (rng.random_range(0..40), rng.random_range(0..40)),
            );
            let mut got = Vec::new();
            tree.query(&range, |p| got.push(*p));
            got.sort_by_key(|p| (p.x, p.y));
            let mut expected: Vec<_> = stored.iter().copied().filter(|p| range.contains(p)).collect();
            expected.sort_by_key(|p| (p.x, p.y));
            assert_eq!(got, expected, "query {range:?}");
        }
    }
}
