//! Uniform random point generation inside a [`Domain`].

use rand::Rng;

use crate::error::{Result, VizError};
use crate::types::{Domain, Point, PointSet};

/// Generate `count` points uniformly distributed over `domain`.
///
/// x is drawn from `[min_x, max_x)` and y from `[min_y, max_y)`, independently,
/// in that order for each point. The random source is injected, so a seeded
/// generator always yields the same sequence.
///
/// # Errors
/// Returns [`VizError::InvalidDomain`] if `domain` does not satisfy `min < max`
/// on both axes (possible only for domains built with `Domain::new_unchecked`).
///
/// # Example
///
/// ```rust
/// use pointviz::generator::generate;
/// use pointviz::types::Domain;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let domain = Domain::new(0.0, 10.0, -5.0, 5.0)?;
/// let mut rng = StdRng::seed_from_u64(7);
/// let points = generate(&domain, 25, &mut rng)?;
/// assert_eq!(points.len(), 25);
/// # Ok(())
/// # }
/// ```
pub fn generate<R: Rng + ?Sized>(
    domain: &Domain,
    count: usize,
    rng: &mut R,
) -> Result<PointSet> {
    domain.validate()?;

    let points = (0..count)
        .map(|_| {
            let x = sample_half_open(rng, domain.min_x(), domain.max_x());
            let y = sample_half_open(rng, domain.min_y(), domain.max_y());
            Point::new(x, y)
        })
        .collect::<PointSet>();

    Ok(points)
}

/// Uniform sample from `[low, high)`
fn sample_half_open<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    // Float rounding can land exactly on `high`
    loop {
        let value = rng.random_range(low..high);
        if value < high {
            return value;
        }
    }
}

/// Convert a signed count coming from an input widget into a point count.
///
/// # Errors
/// Returns [`VizError::InvalidCount`] for negative values.
pub fn checked_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| VizError::invalid_count(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_domain() -> Domain {
        Domain::new(0.0, 100.0, 0.0, 100.0).unwrap()
    }

    #[test]
    fn test_generate_exact_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = generate(&unit_domain(), 137, &mut rng).unwrap();
        assert_eq!(points.len(), 137);
    }

    #[test]
    fn test_generate_zero_points_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = Domain::new(-3.0, -1.0, 10.0, 11.0).unwrap();
        let points = generate(&domain, 0, &mut rng).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic_for_same_seed() {
        let domain = unit_domain();
        let a = generate(&domain, 50, &mut StdRng::seed_from_u64(123)).unwrap();
        let b = generate(&domain, 50, &mut StdRng::seed_from_u64(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_differs_for_different_seeds() {
        let domain = unit_domain();
        let a = generate(&domain, 50, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = generate(&domain, 50, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_rejects_unchecked_invalid_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = Domain::new_unchecked(0.0, 0.0, 0.0, 100.0);
        let result = generate(&domain, 10, &mut rng);
        assert!(matches!(result, Err(VizError::InvalidDomain { .. })));
    }

    #[test]
    fn test_generate_accepts_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(9);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let points = generate(&unit_domain(), 3, dyn_rng).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count(0).unwrap(), 0);
        assert_eq!(checked_count(200).unwrap(), 200);
        assert!(matches!(
            checked_count(-1),
            Err(VizError::InvalidCount { count: -1 })
        ));
    }

    proptest! {
        #[test]
        fn prop_points_stay_inside_half_open_domain(
            min_x in -1.0e6f64..1.0e6,
            width in 1.0e-3f64..1.0e6,
            min_y in -1.0e6f64..1.0e6,
            height in 1.0e-3f64..1.0e6,
            count in 0usize..200,
            seed in any::<u64>(),
        ) {
            let domain = Domain::new(min_x, min_x + width, min_y, min_y + height).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generate(&domain, count, &mut rng).unwrap();

            prop_assert_eq!(points.len(), count);
            for p in &points {
                prop_assert!(p.x >= domain.min_x() && p.x < domain.max_x());
                prop_assert!(p.y >= domain.min_y() && p.y < domain.max_y());
            }
        }
    }
}
