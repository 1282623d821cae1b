//! Random balanced problem instances.

use rand::Rng;

use crate::cost::CostMatrix;
use crate::models::TransportationProblem;

/// Generates a random balanced problem with integer-valued data.
///
/// Supplies and demands are drawn from `1..=max_quantity` and costs from
/// `1..=max_cost`. The shortfall between the two totals is then added to one
/// randomly chosen source or destination, so the result is always balanced.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_transport::generate::random_balanced;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let p = random_balanced(3, 4, 100, 20, &mut rng);
/// assert_eq!(p.num_sources(), 3);
/// assert_eq!(p.total_supply(), p.total_demand());
/// ```
///
/// # Panics
///
/// Panics if `sources` or `destinations` is zero, or if `max_quantity` or
/// `max_cost` is zero.
pub fn random_balanced<R: Rng>(
    sources: usize,
    destinations: usize,
    max_quantity: u32,
    max_cost: u32,
    rng: &mut R,
) -> TransportationProblem {
    assert!(sources > 0 && destinations > 0, "empty instance");
    assert!(max_quantity > 0 && max_cost > 0, "empty value range");

    let mut supply: Vec<f64> = (0..sources)
        .map(|_| rng.random_range(1..=max_quantity) as f64)
        .collect();
    let mut demand: Vec<f64> = (0..destinations)
        .map(|_| rng.random_range(1..=max_quantity) as f64)
        .collect();

    let gap = supply.iter().sum::<f64>() - demand.iter().sum::<f64>();
    if gap > 0.0 {
        let j = rng.random_range(0..destinations);
        demand[j] += gap;
    } else if gap < 0.0 {
        let i = rng.random_range(0..sources);
        supply[i] -= gap;
    }

    let mut costs = CostMatrix::new(sources, destinations);
    for i in 0..sources {
        for j in 0..destinations {
            costs.set(i, j, rng.random_range(1..=max_cost) as f64);
        }
    }

    TransportationProblem::new(supply, demand, costs)
        .unwrap_or_else(|e| unreachable!("generated instance is balanced: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_balanced_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = random_balanced(4, 6, 50, 9, &mut rng);
        assert_eq!(p.num_sources(), 4);
        assert_eq!(p.num_destinations(), 6);
        assert_eq!(p.total_supply(), p.total_demand());
        assert!(p.supply().iter().all(|&s| s >= 1.0 && s.fract() == 0.0));
        for i in 0..4 {
            assert!(p.costs().row(i).iter().all(|&c| (1.0..=9.0).contains(&c)));
        }
    }

    #[test]
    fn test_random_balanced_reproducible() {
        let a = random_balanced(3, 3, 20, 20, &mut StdRng::seed_from_u64(9));
        let b = random_balanced(3, 3, 20, 20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "empty instance")]
    fn test_random_balanced_rejects_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let _ = random_balanced(0, 3, 10, 10, &mut rng);
    }
}
