//! Player skill model.
//!
//! The model owns the player's actual level (hidden from the selector, fixed
//! for the run) and a FIFO window of the last [`WINDOW_SIZE`] temporary
//! levels. The estimate is the plain mean of the window, so old evidence
//! fades out over five informative rounds instead of being overwritten by the
//! newest one.

use std::collections::VecDeque;

use rand_core::RngCore;

use crate::error::{DdaError, DdaResult};
use crate::mechanics::{Adjustment, classify, curve, stoch};

/// Number of temporary levels the estimate averages over.
pub const WINDOW_SIZE: usize = 5;

/// What happened when the player attempted one challenge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChallengeOutcome {
    /// `actual_level - challenge_level`.
    pub difference: i32,
    /// Modeled chance of losing; may fall outside [0, 1].
    pub difficulty: f64,
    /// The unit sample the outcome was decided by.
    pub random_value: f64,
    pub won: bool,
}

#[derive(Clone, Debug)]
pub struct PlayerModel {
    actual_level: i32,
    temporary_levels: VecDeque<i32>,
}

impl PlayerModel {
    /// Unseeded model. [`estimated_level`](Self::estimated_level) fails until
    /// a temporary level is pushed.
    pub fn new(actual_level: i32) -> Self {
        Self {
            actual_level,
            temporary_levels: VecDeque::with_capacity(WINDOW_SIZE + 1),
        }
    }

    /// Model whose window starts as `[initial_temporary_level]`.
    pub fn seeded(actual_level: i32, initial_temporary_level: i32) -> Self {
        let mut model = Self::new(actual_level);
        model.push_temporary_level(initial_temporary_level);
        model
    }

    pub fn actual_level(&self) -> i32 {
        self.actual_level
    }

    pub fn temporary_levels(&self) -> &VecDeque<i32> {
        &self.temporary_levels
    }

    /// Window contents, oldest first.
    pub fn window_snapshot(&self) -> Vec<i32> {
        self.temporary_levels.iter().copied().collect()
    }

    /// Append a temporary level, evicting the oldest past [`WINDOW_SIZE`].
    pub fn push_temporary_level(&mut self, level: i32) {
        self.temporary_levels.push_back(level);
        if self.temporary_levels.len() > WINDOW_SIZE {
            self.temporary_levels.pop_front();
        }
    }

    /// Mean of the window.
    pub fn estimated_level(&self) -> DdaResult<f64> {
        if self.temporary_levels.is_empty() {
            return Err(DdaError::EmptyWindow);
        }
        let sum: i64 = self.temporary_levels.iter().map(|&l| i64::from(l)).sum();
        Ok(sum as f64 / self.temporary_levels.len() as f64)
    }

    /// Play one challenge. Draws one unit sample; leaves the window alone.
    pub fn resolve_challenge<R: RngCore + ?Sized>(
        &self,
        challenge_level: i32,
        rng: &mut R,
    ) -> ChallengeOutcome {
        let difference = self.actual_level - challenge_level;
        let difficulty = curve::loss_chance(difference);
        let random_value = stoch::unit_f64(rng);
        ChallengeOutcome {
            difference,
            difficulty,
            random_value,
            won: random_value > difficulty,
        }
    }

    /// Apply the hysteresis rule against the current estimate and push the
    /// resulting temporary level, if any.
    pub fn update_estimate(&mut self, challenge_level: i32, won: bool) -> DdaResult<Adjustment> {
        let adjustment = classify(challenge_level, self.estimated_level()?, won);
        if let Some(level) = adjustment.temporary_level(challenge_level) {
            self.push_temporary_level(level);
        }
        Ok(adjustment)
    }
}
