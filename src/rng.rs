use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used by SplitMix64 to advance its state.
pub const PHI: u64 = 0x9E37_79B9_7F4A_7C15;

/// Exponent bits of an IEEE-754 double in `[1, 2)`.
const UNIT_EXPONENT: u64 = 0x3FF << 52;

/// One SplitMix64 output step: advance `seed` by [`PHI`] and mix.
///
/// Matches Sebastiano Vigna's reference `splitmix64.c` bit-for-bit, so
/// `splitmix64(0) == 0xE220_A839_7B1D_CDAF`.
#[inline]
pub fn splitmix64(seed: u64) -> u64 {
    let mut z = splitmix64_next_seed(seed);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed-advance step of SplitMix64. Feeding the result back into
/// [`splitmix64`] yields the next word of the same stream.
#[inline]
pub fn splitmix64_next_seed(seed: u64) -> u64 {
    seed.wrapping_add(PHI)
}

/// Build a double in `[0, 1)` from the top 52 bits of `raw`.
///
/// The bits are placed in the mantissa of a double in `[1, 2)` and 1.0 is
/// subtracted, so `raw = 0` gives `0.0` and `raw = u64::MAX` gives `1 - 2^-52`.
#[inline]
pub fn unit_f64_from_raw(raw: u64) -> f64 {
    f64::from_bits(UNIT_EXPONENT | (raw >> 12)) - 1.0
}

/// Reproducible xoroshiro128** generator seeded through SplitMix64.
///
/// Implementation detail:
/// - Two state words, both derived from one 64-bit seed: `s0 = splitmix64(seed)`,
///   `s1 = splitmix64(seed + PHI)`.
/// - No `Default`: a generator always starts from an explicit seed.
/// - Streams are identical across runs and across ports that follow the same
///   construction (the wasm build of the visualizer uses the same steps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128StarStar {
    s0: u64,
    s1: u64,
}

/// Name used by the visualizer for its reproducible generator.
pub type SeededRandom = Xoroshiro128StarStar;

impl Xoroshiro128StarStar {
    /// Seed from the raw bit pattern of a double (no numeric conversion).
    #[inline]
    pub fn from_f64_seed(seed: f64) -> Self {
        Self::seed_from_u64(seed.to_bits())
    }

    /// Seed from a fresh `thread_rng` word. Record `s0`/`s1` to replay the stream.
    pub fn from_entropy_source() -> Self {
        let mut rng = rand::thread_rng();
        Self::seed_from_u64(rng.next_u64())
    }

    /// Uniform double in `[0, 1)` with 2^-52 spacing.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64_from_raw(self.next_u64())
    }

    #[inline]
    pub fn s0(&self) -> u64 {
        self.s0
    }

    #[inline]
    pub fn s1(&self) -> u64 {
        self.s1
    }

    /// `s0` reinterpreted as signed, the form a JavaScript BigInt64 view reports.
    #[inline]
    pub fn s0_i64(&self) -> i64 {
        i64::from_le_bytes(self.s0.to_le_bytes())
    }

    #[inline]
    pub fn s1_i64(&self) -> i64 {
        i64::from_le_bytes(self.s1.to_le_bytes())
    }
}

impl RngCore for Xoroshiro128StarStar {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result = self.s0.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        self.s1 ^= self.s0;
        self.s0 = self.s0.rotate_left(24) ^ self.s1 ^ (self.s1 << 16); // a, b
        self.s1 = self.s1.rotate_left(37); // c
        result
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoroshiro128StarStar {
    type Seed = [u8; 16];

    /// Read two little-endian state words. An all-zero seed is the one fixed
    /// point of the generator, so it is mapped to `seed_from_u64(0)` instead.
    fn from_seed(seed: [u8; 16]) -> Self {
        if seed.iter().all(|&b| b == 0) {
            return Self::seed_from_u64(0);
        }
        let mut s = [0u64; 2];
        read_u64_into(&seed, &mut s);
        Self { s0: s[0], s1: s[1] }
    }

    fn seed_from_u64(seed: u64) -> Self {
        let mut sm = SplitMix64::seed_from_u64(seed);
        let s0 = sm.next_u64();
        let s1 = sm.next_u64();
        Self { s0, s1 }
    }
}

/// Streaming SplitMix64: each draw advances the state by [`PHI`] and mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    x: u64,
}

impl SplitMix64 {
    #[inline]
    pub fn state(&self) -> u64 {
        self.x
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit_f64_from_raw(self.next_u64())
    }
}

impl RngCore for SplitMix64 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        // Stafford's "Mix4" variant of the MurmurHash3 64-bit finalizer
        self.x = splitmix64_next_seed(self.x);
        let mut z = self.x;
        z = (z ^ (z >> 33)).wrapping_mul(0x62A9_D9ED_7997_05F5);
        z = (z ^ (z >> 28)).wrapping_mul(0xCB24_D0A5_C88C_35B3);
        (z >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let out = splitmix64(self.x);
        self.x = splitmix64_next_seed(self.x);
        out
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: [u8; 8]) -> Self {
        let mut state = [0u64; 1];
        read_u64_into(&seed, &mut state);
        Self { x: state[0] }
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self { x: seed }
    }
}
