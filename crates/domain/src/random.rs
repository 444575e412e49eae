//! The POSIX `drand48` family generator.
//!
//! A 48-bit linear congruential generator, reproduced exactly so generated
//! inputs match the ones produced by C's `srand48`/`lrand48`.

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const SEED_LOW: u64 = 0x330E;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drand48 {
    state: u64,
}

impl Drand48 {
    /// Equivalent of `srand48(seed)`: the seed fills the high 32 bits of the state.
    pub fn new(seed: u32) -> Self {
        Self { state: (u64::from(seed) << 16) | SEED_LOW }
    }

    fn step(&mut self) -> u64 {
        self.state = MULTIPLIER.wrapping_mul(self.state).wrapping_add(INCREMENT) & MASK;
        self.state
    }

    /// Equivalent of `lrand48()`: a non-negative 31-bit value.
    pub fn next_u31(&mut self) -> u32 {
        // The state is masked to 48 bits, so the shifted value fits in 31 bits.
        (self.step() >> 17) as u32
    }
}

impl Iterator for Drand48 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u31())
    }
}
