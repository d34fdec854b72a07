//! Random source for password generation.
//!
//! Defaults to the thread-local CSPRNG seeded from the OS. A fixed seed
//! switches to a ChaCha20 stream so runs can be reproduced.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub enum Source {
    Os(rand::rngs::ThreadRng),
    Seeded(ChaCha20Rng),
}

impl Source {
    pub fn os() -> Self {
        Source::Os(rand::thread_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Source::Seeded(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, OS otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::os(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Os(_) => "OS-seeded CSPRNG",
            Source::Seeded(_) => "seeded ChaCha20",
        }
    }
}

impl RngCore for Source {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Os(rng) => rng.next_u32(),
            Source::Seeded(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Os(rng) => rng.next_u64(),
            Source::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Os(rng) => rng.fill_bytes(dest),
            Source::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Os(rng) => rng.try_fill_bytes(dest),
            Source::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}
