use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;

/// Seeded random source owned by a single game.
///
/// Every shuffle and random tie pick in a game draws from the same `GameRng`,
/// so a game replays exactly from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        GameRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for the `index`-th game of a batch started from `base`.
    pub fn derive(base: u64, index: u64) -> u64 {
        base.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.random_range(i + 1);
            array.swap(i, j);
        }
    }
}
