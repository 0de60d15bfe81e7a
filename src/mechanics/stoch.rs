//! Stochastic mechanics: the two draws a round consumes.
//! Note: every draw goes through the caller's generator, so a run seeded
//! with the same value replays the same coin flips and samples.
use rand_core::RngCore;

/// Uniform sample in [0, 1) from the top 53 bits of one `u64`.
#[inline]
pub fn unit_f64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Fair coin. Consumes exactly one `u64` regardless of the outcome.
#[inline]
pub fn coin_flip<R: RngCore + ?Sized>(rng: &mut R) -> bool {
    rng.next_u64() >> 63 == 0
}

