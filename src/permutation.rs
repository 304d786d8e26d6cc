//! Permutations of token sequences and the derangement property.
//!
//! A derangement is a permutation in which no element stays at its original
//! position. For `n` elements there are `!n` derangements among the `n!`
//! permutations, so a uniform shuffle is a derangement with probability
//! approaching `1/e` as `n` grows.

use crate::{Error, Result};
use rand::Rng;

/// Returns the identity sequence `[0, 1, ..., cells - 1]`.
pub fn identity(cells: usize) -> Vec<usize> {
    (0..cells).collect()
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Walks `i` from the last position down to 1 and swaps it with a uniformly
/// chosen `j` in `0..=i`, so each of the `n!` orderings is equally likely
/// under a fair random source. Slices of length 0 or 1 are left untouched.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a uniformly shuffled copy of `items`.
///
/// The input is not modified. The output is deterministic given the same seed.
///
/// # Example
///
/// ```
/// use derangement_sim::{identity, shuffled};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let original = identity(9);
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let permutation = shuffled(&original, &mut rng);
///
/// let mut sorted = permutation.clone();
/// sorted.sort();
/// assert_eq!(sorted, original);
/// ```
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Returns true iff `candidate` differs from `original` at every position.
///
/// Two empty sequences are vacuously a derangement.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if the sequences differ in length.
pub fn is_derangement<T: PartialEq>(original: &[T], candidate: &[T]) -> Result<bool> {
    check_lengths(original, candidate)?;
    Ok(original.iter().zip(candidate).all(|(a, b)| a != b))
}

/// Returns the positions at which `candidate` keeps the element of `original`.
///
/// Empty exactly when [`is_derangement`] is true.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if the sequences differ in length.
pub fn fixed_points<T: PartialEq>(original: &[T], candidate: &[T]) -> Result<Vec<usize>> {
    check_lengths(original, candidate)?;
    Ok(original
        .iter()
        .zip(candidate)
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(i, _)| i)
        .collect())
}

/// Builds the value-to-index lookup of a permutation of `0..n`.
///
/// `positions(p)[v]` is the index at which `p` holds `v`, i.e. the inverse
/// permutation.
///
/// # Panics
/// Panics if `permutation` is not a permutation of `0..permutation.len()`.
pub fn positions(permutation: &[usize]) -> Vec<usize> {
    let n = permutation.len();
    let mut out = vec![usize::MAX; n];
    for (index, &value) in permutation.iter().enumerate() {
        assert!(value < n, "value {} out of range for length {}", value, n);
        assert!(out[value] == usize::MAX, "value {} appears twice", value);
        out[value] = index;
    }
    out
}

fn check_lengths<T>(original: &[T], candidate: &[T]) -> Result<()> {
    if original.len() != candidate.len() {
        return Err(Error::LengthMismatch {
            original: original.len(),
            candidate: candidate.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashMap;

    #[test]
    fn shuffled_is_permutation_of_input() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for n in 2..=30 {
            let original = identity(n);
            let permutation = shuffled(&original, &mut rng);
            assert_eq!(permutation.len(), n);

            let mut sorted = permutation.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original, "n={}: not a permutation", n);
        }
    }

    #[test]
    fn shuffled_does_not_mutate_input() {
        let original = vec!['a', 'b', 'c', 'd', 'e'];
        let before = original.clone();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let _ = shuffled(&original, &mut rng);
        assert_eq!(original, before);
    }

    #[test]
    fn degenerate_lengths_are_unchanged() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert!(shuffled::<u32, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn reproducibility_same_seed_same_output() {
        let original = identity(16);

        let mut rng1 = ChaCha20Rng::seed_from_u64(0);
        let mut rng2 = ChaCha20Rng::seed_from_u64(0);

        assert_eq!(shuffled(&original, &mut rng1), shuffled(&original, &mut rng2));
    }

    #[test]
    fn different_seed_different_output_smoke() {
        let original = identity(16);
        for offset in 0u64..5 {
            let mut rng1 = ChaCha20Rng::seed_from_u64(offset);
            let mut rng2 = ChaCha20Rng::seed_from_u64(offset + 100);
            if shuffled(&original, &mut rng1) != shuffled(&original, &mut rng2) {
                return;
            }
        }
        panic!("All tested seed pairs produced identical permutations (extremely unlikely)");
    }

    #[test]
    fn orderings_of_three_are_uniform() {
        // 6 orderings, df = 5. chi^2 > 25 has probability ~1.4e-4 under uniformity.
        let trials = 60_000;
        let original = [0u8, 1, 2];
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffled(&original, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every ordering should appear");
        let expected = trials as f64 / 6.0;
        let chi_square: f64 = counts
            .values()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 25.0, "chi^2 = {:.2} suggests a biased shuffle", chi_square);
    }

    #[test]
    fn identical_sequence_is_not_derangement() {
        for n in 1..10 {
            let s = identity(n);
            assert_eq!(is_derangement(&s, &s), Ok(false));
        }
    }

    #[test]
    fn empty_sequences_are_vacuously_deranged() {
        assert_eq!(is_derangement::<u32>(&[], &[]), Ok(true));
        assert_eq!(fixed_points::<u32>(&[], &[]), Ok(vec![]));
    }

    #[test]
    fn derangement_examples() {
        assert_eq!(is_derangement(&[1, 2, 3], &[2, 3, 1]), Ok(true));
        assert_eq!(is_derangement(&[1, 2, 3], &[1, 3, 2]), Ok(false));
        assert_eq!(fixed_points(&[1, 2, 3], &[1, 3, 2]), Ok(vec![0]));
        assert_eq!(fixed_points(&[1, 2, 3, 4], &[1, 3, 2, 4]), Ok(vec![0, 3]));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = is_derangement(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                original: 3,
                candidate: 2
            }
        );
        assert!(fixed_points(&[1], &[1, 2]).is_err());
    }

    #[test]
    fn derangement_check_is_pure() {
        let a = [4, 5, 6, 7];
        let b = [5, 4, 7, 6];
        assert_eq!(is_derangement(&a, &b), is_derangement(&a, &b));
    }

    #[test]
    fn positions_inverts_permutation() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let permutation = shuffled(&identity(25), &mut rng);
        let lookup = positions(&permutation);
        for (value, &index) in lookup.iter().enumerate() {
            assert_eq!(permutation[index], value);
        }
    }

    #[test]
    #[should_panic(expected = "appears twice")]
    fn positions_rejects_duplicates() {
        let _ = positions(&[0, 0, 1]);
    }
}
