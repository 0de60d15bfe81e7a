//! Challenge selection.
//!
//! Always offering the nearest integer to a fractional estimate stalls the
//! estimator: with an estimate of 4.5 and a fixed challenge of 5, a loss is
//! expected and a win is the only signal, so the estimate only ever learns in
//! one direction. Alternating between floor and ceiling probes both sides.

use rand_core::RngCore;

use crate::mechanics::stoch;

/// Maps the current estimate to the integer challenge offered next.
pub trait ChallengeSelector {
    fn select_challenge<R: RngCore + ?Sized>(&self, estimated_level: f64, rng: &mut R) -> i32;
}

/// Floor or ceiling of the estimate with a fair coin.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlternatingSelector;

impl ChallengeSelector for AlternatingSelector {
    #[inline]
    fn select_challenge<R: RngCore + ?Sized>(&self, estimated_level: f64, rng: &mut R) -> i32 {
        select_challenge(estimated_level, rng)
    }
}

/// Floor or ceiling of `estimated_level`, equally likely.
///
/// The coin is drawn even when the estimate is an integer so that the number
/// of draws per round never depends on the estimate.
pub fn select_challenge<R: RngCore + ?Sized>(estimated_level: f64, rng: &mut R) -> i32 {
    let low = estimated_level.floor() as i32;
    let high = estimated_level.ceil() as i32;
    if stoch::coin_flip(rng) { high } else { low }
}
