//! Difficulty curve: chance of losing a challenge as a function of
//! `difference = actual_level - challenge_level`.

/// Slope of the linear approximation.
pub const SLOPE: f64 = -0.1464;

/// Loss chance at `difference == 0`.
pub const INTERCEPT: f64 = 0.5;

/// Tabulated (difference, loss chance) points the linear form approximates.
/// Reference data only; outcomes are always decided by [`loss_chance`].
pub const ANCHORS: [(i32, f64); 5] = [(-2, 0.8), (-1, 0.6), (0, 0.5), (1, 0.4), (2, 0.2)];

/// Loss chance assumed beyond the anchors: much harder / much easier.
pub const TAIL_HARD: f64 = 0.95;
pub const TAIL_EASY: f64 = 0.05;

/// Linear loss chance: `SLOPE * difference + INTERCEPT`.
///
/// Not clamped. For `|difference| > 3` the value leaves [0, 1]; a value
/// above 1 makes the challenge unwinnable and a negative one unlosable,
/// since outcomes compare a unit sample against it.
#[inline]
pub fn loss_chance(difference: i32) -> f64 {
    SLOPE * f64::from(difference) + INTERCEPT
}
