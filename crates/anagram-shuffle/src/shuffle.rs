use rand::{Rng, RngExt as _};

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
///
/// # Examples
///
/// ```
/// use anagram_shuffle::shuffle;
///
/// let items = ['C', 'A', 'T'];
/// let mut shuffled = shuffle(&items, &mut rand::rng());
///
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, ['A', 'C', 'T']);
/// assert_eq!(items, ['C', 'A', 'T']);
/// ```
#[must_use]
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Shuffles `items` in place with the Fisher-Yates (Knuth) algorithm.
///
/// Walks `i` from the last index down to `1`, swapping element `i` with an element
/// drawn uniformly from `0..=i`. Every permutation is equally likely given a uniform
/// `rng`.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
