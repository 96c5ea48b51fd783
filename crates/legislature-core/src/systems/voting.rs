//! Voting Rules
//!
//! Bounded jitter and the distance rule each legislator applies to a bill.
//! Nothing here renders; the rules only produce [`Vote`] values.

use legislature_events::Vote;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Maximum offset of a bill from its advocate on each axis.
pub const BILL_JITTER: f64 = 5.0;

/// Center of the noisy distance beyond which a legislator opposes a bill.
pub const OPPOSITION_BASE: f64 = 8.0;

/// Spread of the opposition threshold around [`OPPOSITION_BASE`].
pub const OPPOSITION_JITTER: f64 = 5.0;

/// Numeric knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingRules {
    /// Bound for the advocate-to-bill offset on each axis
    pub bill_jitter: f64,
    /// Center of the opposition threshold
    pub opposition_base: f64,
    /// Bound for the per-vote threshold noise
    pub opposition_jitter: f64,
    /// Evaluate the advocate again in the roll call after their automatic aye
    pub recount_advocate: bool,
}

impl Default for VotingRules {
    fn default() -> Self {
        Self {
            bill_jitter: BILL_JITTER,
            opposition_base: OPPOSITION_BASE,
            opposition_jitter: OPPOSITION_JITTER,
            recount_advocate: true,
        }
    }
}

impl VotingRules {
    /// Reject knobs that are negative or not finite.
    pub fn validate(&self) -> Result<(), SetupError> {
        let knobs = [
            ("bill_jitter", self.bill_jitter),
            ("opposition_base", self.opposition_base),
            ("opposition_jitter", self.opposition_jitter),
        ];
        for (field, value) in knobs {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::InvalidVotingRules { field, value });
            }
        }
        Ok(())
    }

    /// Draw a fresh opposition threshold for one vote.
    pub fn opposition_threshold<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.opposition_base + jitter(rng, self.opposition_jitter)
    }
}

/// Signed random offset with magnitude in `[0, bound)`.
///
/// The magnitude is drawn first, then a fair coin picks the sign.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    let magnitude = if bound > 0.0 {
        rng.gen_range(0.0..bound)
    } else {
        0.0
    };
    if rng.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

/// True when a legislator is far enough from the bill to oppose it.
pub fn is_opposed(distance: f64, threshold: f64) -> bool {
    distance > threshold
}

/// An opposed legislator votes nay or abstains on a fair coin.
pub fn dissent<R: Rng + ?Sized>(rng: &mut R) -> Vote {
    if rng.gen_bool(0.5) {
        Vote::Nay
    } else {
        Vote::Abstain
    }
}

/// Decide one legislator's vote from their distance to the bill.
pub fn cast_vote<R: Rng + ?Sized>(rng: &mut R, distance: f64, rules: &VotingRules) -> Vote {
    let threshold = rules.opposition_threshold(rng);
    if is_opposed(distance, threshold) {
        dissent(rng)
    } else {
        Vote::Aye
    }
}
