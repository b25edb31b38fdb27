//! Uniform random scenario selection
//!
//! Draws one element from the live filtered pool, falling back to the full
//! dataset when the filter matches nothing, so a draw always succeeds on a
//! non-empty dataset. Selection is uniform over the pool length at call time
//! and each draw is independent; repeats are allowed.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one element uniformly from `pool`, or from `fallback` if the pool is
/// empty
///
/// Returns `None` only when both slices are empty. Generic over the RNG so
/// tests can use a seeded generator.
pub fn pick_from<'a, T, R>(pool: &[&'a T], fallback: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        fallback.choose(rng)
    } else {
        pool.choose(rng).copied()
    }
}

/// Pick one element using the thread-local RNG
pub fn pick<'a, T>(pool: &[&'a T], fallback: &'a [T]) -> Option<&'a T> {
    pick_from(pool, fallback, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_only_from_pool_when_nonempty() {
        let fallback: Vec<u32> = (1..=10).collect();
        let pool: Vec<&u32> = fallback.iter().filter(|n| **n % 2 == 0).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let picked = pick_from(&pool, &fallback, &mut rng).unwrap();
            assert_eq!(picked % 2, 0, "picked {picked} outside the pool");
        }
    }

    #[test]
    fn test_pick_falls_back_to_full_dataset() {
        let fallback: Vec<u32> = vec![1, 2, 3];
        let pool: Vec<&u32> = vec![];
        let mut rng = StdRng::seed_from_u64(7);

        let picked = pick_from(&pool, &fallback, &mut rng);
        assert!(picked.is_some());
        assert!(fallback.contains(picked.unwrap()));
    }

    #[test]
    fn test_pick_none_when_everything_empty() {
        let fallback: Vec<u32> = vec![];
        let pool: Vec<&u32> = vec![];
        let mut rng = StdRng::seed_from_u64(7);

        assert!(pick_from(&pool, &fallback, &mut rng).is_none());
    }

    #[test]
    fn test_every_pool_element_reachable() {
        let fallback: Vec<u32> = (1..=5).collect();
        let pool: Vec<&u32> = fallback.iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(*pick_from(&pool, &fallback, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), fallback.len());
    }

    #[test]
    fn test_draws_are_independent() {
        let fallback: Vec<u32> = (1..=3).collect();
        let pool: Vec<&u32> = fallback.iter().collect();
        let mut rng = StdRng::seed_from_u64(11);

        // A repeat within a modest window is near-certain for 3 candidates
        let draws: Vec<u32> = (0..20)
            .map(|_| *pick_from(&pool, &fallback, &mut rng).unwrap())
            .collect();
        let distinct: std::collections::HashSet<u32> = draws.iter().copied().collect();
        assert!(distinct.len() < draws.len());
    }
}
