//! Control mechanics: the asymmetric hysteresis rule.
//!
//! Only surprising outcomes move the estimate. Winning something at or above
//! the estimate, or losing something at or below it, is evidence the estimate
//! is off; anything else is what the estimate already predicts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjustment {
    /// Won a challenge at or above the estimate: push `challenge + 1`.
    HardWin,
    /// Lost a challenge at or below the estimate: push `challenge - 1`.
    EasyLoss,
    /// Won an easy one or lost a hard one: window unchanged.
    Expected,
}

impl Adjustment {
    /// Temporary level to push, if any.
    #[inline]
    pub fn temporary_level(self, challenge_level: i32) -> Option<i32> {
        match self {
            Adjustment::HardWin => Some(challenge_level + 1),
            Adjustment::EasyLoss => Some(challenge_level - 1),
            Adjustment::Expected => None,
        }
    }
}

/// Classify an outcome against the estimate held *before* the update.
#[inline]
pub fn classify(challenge_level: i32, estimated_level: f64, won: bool) -> Adjustment {
    let challenge = f64::from(challenge_level);
    if won && challenge >= estimated_level {
        Adjustment::HardWin
    } else if !won && challenge <= estimated_level {
        Adjustment::EasyLoss
    } else {
        Adjustment::Expected
    }
}
