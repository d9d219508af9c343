use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::sync::Mutex;

use super::Transform;

/// Randomly permutes the deck.
///
/// A `Shuffle` owns its random source and advances it on every use, so the
/// same value applied twice yields two different permutations, while two
/// values created from the same seed yield the same sequence of permutations.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, Shuffle, Transform};
///
/// let a = Shuffle::new(42).apply(Deck::standard());
/// let b = Shuffle::new(42).apply(Deck::standard());
/// assert_eq!(a, b);
/// ```
pub struct Shuffle {
    rng: Mutex<ChaCha8Rng>,
}

impl Shuffle {
    /// Creates a shuffle seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        log::debug!("shuffle seeded with {seed}");
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffle driven by an existing generator.
    #[must_use]
    pub const fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Creates a shuffle seeded from the current wall-clock time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::new(seed)
    }

    /// Consumes the shuffle, returning its generator.
    #[must_use]
    pub fn into_rng(self) -> ChaCha8Rng {
        self.rng.into_inner()
    }
}

#[cfg(feature = "std")]
impl Default for Shuffle {
    fn default() -> Self {
        Self::from_time()
    }
}

impl core::fmt::Debug for Shuffle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shuffle").finish_non_exhaustive()
    }
}

impl Transform for Shuffle {
    fn apply(&self, mut deck: Deck) -> Deck {
        let mut rng = self.rng.lock();
        deck.as_mut_slice().shuffle(&mut *rng);
        drop(rng);
        deck
    }

    fn name(&self) -> &'static str {
        "shuffle"
    }
}

/// Returns a shuffle seeded from the current wall-clock time.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> Shuffle {
    Shuffle::from_time()
}
