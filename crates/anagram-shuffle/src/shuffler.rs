use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{ShuffleSeed, shuffle::shuffle};

/// A seedable shuffler.
///
/// Successive calls to [`Shuffler::shuffle`] continue the same random stream, so two
/// shufflers built from the same seed produce the same sequence of arrangements.
///
/// # Examples
///
/// ```
/// use anagram_shuffle::{ShuffleSeed, Shuffler};
///
/// let seed = ShuffleSeed::from_bytes([7; 32]);
/// let mut a = Shuffler::with_seed(seed);
/// let mut b = Shuffler::with_seed(seed);
///
/// for _ in 0..3 {
///     assert_eq!(a.shuffle(&[1, 2, 3, 4]), b.shuffle(&[1, 2, 3, 4]));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler {
    seed: ShuffleSeed,
    rng: Pcg64,
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler {
    /// Creates a shuffler with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(ShuffleSeed::random())
    }

    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn with_seed(seed: ShuffleSeed) -> Self {
        Self {
            seed,
            rng: Pcg64::from_seed(seed.to_bytes()),
        }
    }

    /// Returns the seed this shuffler started from.
    #[must_use]
    pub fn seed(&self) -> ShuffleSeed {
        self.seed
    }

    /// Returns a shuffled copy of `items`.
    #[must_use]
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        shuffle(items, &mut self.rng)
    }

    /// Returns the underlying generator.
    pub fn rng_mut(&mut self) -> &mut Pcg64 {
        &mut self.rng
    }
}
