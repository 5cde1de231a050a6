//! Counterbalancing helpers: permutation assignment of stimuli to roles
//! and response-order flipping, decided once per participant at setup.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform random permutation of `0..n`, used to assign stimulus images
/// to response roles.
pub fn random_permutation<R: Rng>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

/// Uniform draw from a slice.
pub fn draw<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Keep or swap a response pair with equal probability.
pub fn counterbalanced_order<T, R: Rng>(rng: &mut R, pair: [T; 2]) -> [T; 2] {
    if rng.gen::<bool>() {
        let [a, b] = pair;
        [b, a]
    } else {
        pair
    }
}
