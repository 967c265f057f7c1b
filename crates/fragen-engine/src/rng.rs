//! Seedable pseudo-random number generator (xorshift64) plus the
//! normally-distributed draws used for per-letter jitter.

use std::f32::consts::TAU;

/// Baseline jitter clamp range in pixels.
pub const BASELINE_JITTER_MAX: f32 = 4.0;
/// Size jitter clamp range (scale multiplier).
pub const SIZE_JITTER_MIN: f32 = 0.9;
pub const SIZE_JITTER_MAX: f32 = 1.2;

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a uniform f32 in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give a full f32 mantissa's worth of entropy.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Generate a uniform f32 in [lo, hi).
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Generate a normally-distributed value via the Box-Muller transform.
    ///
    /// `u1 == 0` is the transform's only singular input (ln(0)); the state of
    /// xorshift64 is never zero, but the mantissa truncation in `next_f32`
    /// can still yield 0.0, so it is resampled.
    pub fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        let mut u1 = self.next_f32();
        while u1 == 0.0 {
            u1 = self.next_f32();
        }
        let u2 = self.next_f32();
        let z0 = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        z0 * std_dev + mean
    }

    /// Baseline offset for one letter, in pixels. Most letters sit close to
    /// the baseline (mean 0, stddev 1.5), clamped to [-4, 4].
    pub fn baseline_jitter(&mut self) -> f32 {
        self.normal(0.0, 1.5)
            .clamp(-BASELINE_JITTER_MAX, BASELINE_JITTER_MAX)
    }

    /// Scale multiplier for one letter. Most letters render at normal size
    /// (mean 1.0, stddev 0.08), clamped to [0.9, 1.2].
    pub fn size_jitter(&mut self) -> f32 {
        self.normal(1.0, 0.08).clamp(SIZE_JITTER_MIN, SIZE_JITTER_MAX)
    }
}
