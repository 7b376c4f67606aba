use rand::Rng;

use crate::error::{AcoError, Result};

/** returns the sum of the factors and the probability (factor / sum) of each option */
pub fn choice_probabilities(factors:&[f64]) -> (f64, Vec<f64>) {
    let sum:f64 = factors.iter().sum();
    let probabilities = factors.iter().map(|f| f / sum).collect();
    (sum, probabilities)
}

/** weighted random choice among items (items[i] is chosen with probability factors[i] / Σ factors).

Draws r uniformly in [0, Σ factors) then walks the items, subtracting the share of each one
until r ≤ 0. If rounding exhausts the walk, the last item is returned.
items and factors must have the same length (LengthMismatch otherwise).
*/
pub fn weighted_choice<T:Copy, R:Rng+?Sized>(items:&[T], factors:&[f64], rng:&mut R) -> Result<T> {
    let last = *items.last().ok_or(AcoError::EmptyCandidateSet)?;
    if items.len() != factors.len() {
        return Err(AcoError::LengthMismatch { items: items.len(), factors: factors.len() });
    }
    let (sum, probabilities) = choice_probabilities(factors);
    let mut remainder = rng.gen::<f64>() * sum;
    for (item, p) in items.iter().zip(probabilities) {
        remainder -= p * sum;
        if remainder <= 0. {
            return Ok(*item);
        }
    }
    Ok(last)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_probabilities() {
        let (sum, p) = choice_probabilities(&[1., 3., 4.]);
        assert_eq!(sum, 8.);
        assert_eq!(p, vec![0.125, 0.375, 0.5]);
    }

    #[test]
    fn test_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let res = weighted_choice::<usize,_>(&[], &[], &mut rng);
        assert!(matches!(res, Err(AcoError::EmptyCandidateSet)));
    }

    #[test]
    fn test_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        let res = weighted_choice(&[1,2,3], &[1., 1.], &mut rng);
        assert!(matches!(res, Err(AcoError::LengthMismatch { items: 3, factors: 2 })));
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(weighted_choice(&[7], &[0.3], &mut rng).unwrap(), 7);
        }
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = weighted_choice(&['a','b','c'], &[1., 0., 1.], &mut rng).unwrap();
            assert_ne!(v, 'b');
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize ; 2];
        for _ in 0..10_000 {
            counts[weighted_choice(&[0,1], &[1., 9.], &mut rng).unwrap()] += 1;
        }
        // expected 1000 / 9000
        assert!(counts[0] > 700 && counts[0] < 1300, "{:?}", counts);
    }

    #[test]
    fn test_deterministic() {
        let items:Vec<usize> = (0..20).collect();
        let factors:Vec<f64> = items.iter().map(|i| (*i as f64 + 1.).powi(2)).collect();
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(
                weighted_choice(&items, &factors, &mut rng1).unwrap(),
                weighted_choice(&items, &factors, &mut rng2).unwrap()
            );
        }
    }
}
