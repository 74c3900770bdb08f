//! A simple pseudorandom number generator.
//!
//! An implementation of the PCG-XSH-RR 64/32 generator from
//! <https://www.pcg-random.org/>, satisfying the [RngCore](rand_core::RngCore)
//! trait.
//!
//! PCG(32) is used as the default source of (pseudo)random numbers as it is
//! simple, fast, and has some nice supporting documentation.
//! Randomness only enters a solve through the opt-in random heuristics, so the
//! only requirements are reproducibility from a seed and a reasonable
//! distribution.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// State and stream.
///
/// The stream is fixed at seeding time, as nothing in the library asks for
/// more than one sequence per generator.
#[derive(Default)]
pub struct Pcg32 {
    state: u64,
    stream: u64,
}

const MULTIPLIER: u64 = 6364136223846793005;

impl Pcg32 {
    fn step(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.stream);
        old_state
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state_bytes = [0_u8; 8];
        let mut stream_bytes = [0_u8; 8];
        state_bytes.copy_from_slice(&seed[..8]);
        stream_bytes.copy_from_slice(&seed[8..]);

        // An odd stream, per the reference implementation.
        let stream = (u64::from_le_bytes(stream_bytes) << 1) | 1;

        let mut rng = Pcg32 {
            state: u64::from_le_bytes(state_bytes).wrapping_add(stream),
            stream,
        };
        rng.step();
        rng
    }
}
