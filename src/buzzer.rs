//! Buzzer arbitration state machine
//!
//! This module decides which contestant, if any, currently holds the right
//! to answer. The arbiter is the single source of truth for that privilege:
//! a claim is only accepted while the buzzer is listening, which is what
//! gives the panel its first-buzz-wins semantics.

use serde::{Deserialize, Serialize};

use crate::roster::ContestantId;

/// The full arbiter state, including the claimant where one exists
///
/// The claiming contestant is carried as the payload of [`BuzzerState::Won`]
/// rather than in a separate nullable field, so the "exactly one claimant
/// while won" invariant holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuzzerState {
    /// Locked between rounds; no contestant may claim
    #[default]
    Prepared,
    /// Unlocked; the first claim wins
    Listening,
    /// Locked with a claimant; grading is pending
    Won(ContestantId),
    /// Locked because the countdown expired with no claim
    TimedOut,
}

impl BuzzerState {
    /// Returns the phase of this state without the claimant payload
    pub fn phase(&self) -> BuzzerPhase {
        match self {
            BuzzerState::Prepared => BuzzerPhase::Prepared,
            BuzzerState::Listening => BuzzerPhase::Listening,
            BuzzerState::Won(_) => BuzzerPhase::Won,
            BuzzerState::TimedOut => BuzzerPhase::TimedOut,
        }
    }
}

/// The arbiter phase without associated data
///
/// Useful for display and pattern matching where the claimant identity is
/// not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuzzerPhase {
    /// Locked between rounds
    Prepared,
    /// Accepting claims
    Listening,
    /// Locked with a claimant
    Won,
    /// Locked after countdown expiry
    TimedOut,
}

impl BuzzerPhase {
    /// Whether the buzzer refuses claims in this phase
    pub fn is_locked(self) -> bool {
        !matches!(self, BuzzerPhase::Listening)
    }
}

/// The buzzer lock governing the answer privilege
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Buzzer {
    state: BuzzerState,
}

impl Buzzer {
    /// Returns the current state
    pub fn state(&self) -> BuzzerState {
        self.state
    }

    /// Returns the current phase
    pub fn phase(&self) -> BuzzerPhase {
        self.state.phase()
    }

    /// Returns the claiming contestant while in the won state
    pub fn claimant(&self) -> Option<ContestantId> {
        match self.state {
            BuzzerState::Won(id) => Some(id),
            _ => None,
        }
    }

    /// Unlocks the buzzer for claims
    ///
    /// Valid from the prepared and timed-out states. Returns `false`
    /// without effect when already listening or won.
    pub(crate) fn open(&mut self) -> bool {
        match self.state {
            BuzzerState::Prepared | BuzzerState::TimedOut => {
                self.state = BuzzerState::Listening;
                true
            }
            BuzzerState::Listening | BuzzerState::Won(_) => false,
        }
    }

    /// Attempts to claim the answer privilege for a contestant
    ///
    /// Accepted only while listening. A `false` return means the buzzer
    /// was locked; late or duplicate presses land here and must not
    /// reassign the claim.
    pub(crate) fn claim(&mut self, id: ContestantId) -> bool {
        match self.state {
            BuzzerState::Listening => {
                self.state = BuzzerState::Won(id);
                true
            }
            _ => false,
        }
    }

    /// Concludes the won state, returning the claimant for grading
    ///
    /// Transitions to prepared. Returns `None` without effect in any
    /// other state.
    pub(crate) fn resolve(&mut self) -> Option<ContestantId> {
        match self.state {
            BuzzerState::Won(id) => {
                self.state = BuzzerState::Prepared;
                Some(id)
            }
            _ => None,
        }
    }

    /// Forces the buzzer back to the prepared state from anywhere
    pub(crate) fn reset(&mut self) {
        self.state = BuzzerState::Prepared;
    }

    /// Locks the buzzer after countdown expiry
    ///
    /// Valid from the listening and prepared states; `false` otherwise
    /// (in particular, expiry while won must not clear the claim).
    pub(crate) fn timeout(&mut self) -> bool {
        match self.state {
            BuzzerState::Listening | BuzzerState::Prepared => {
                self.state = BuzzerState::TimedOut;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_starts_prepared_and_locked() {
        let buzzer = Buzzer::default();
        assert_eq!(buzzer.state(), BuzzerState::Prepared);
        assert!(buzzer.phase().is_locked());
        assert!(buzzer.claimant().is_none());
    }

    #[test]
    fn test_first_claim_wins() {
        let mut buzzer = Buzzer::default();
        assert!(buzzer.open());
        assert!(!buzzer.phase().is_locked());

        assert!(buzzer.claim(ContestantId::new(1)));
        assert!(!buzzer.claim(ContestantId::new(2)));
        assert_eq!(buzzer.claimant(), Some(ContestantId::new(1)));
    }

    #[test]
    fn test_claim_rejected_while_locked() {
        let mut buzzer = Buzzer::default();
        assert!(!buzzer.claim(ContestantId::new(1)));
        assert_eq!(buzzer.state(), BuzzerState::Prepared);

        buzzer.open();
        buzzer.timeout();
        assert!(!buzzer.claim(ContestantId::new(1)));
        assert_eq!(buzzer.state(), BuzzerState::TimedOut);
    }

    #[test]
    fn test_open_is_noop_while_won() {
        let mut buzzer = Buzzer::default();
        buzzer.open();
        buzzer.claim(ContestantId::new(3));
        assert!(!buzzer.open());
        assert_eq!(buzzer.claimant(), Some(ContestantId::new(3)));
    }

    #[test]
    fn test_reopen_after_timeout() {
        let mut buzzer = Buzzer::default();
        buzzer.open();
        assert!(buzzer.timeout());
        assert!(buzzer.open());
        assert_eq!(buzzer.state(), BuzzerState::Listening);
    }

    #[test]
    fn test_resolve_returns_claimant_and_prepares() {
        let mut buzzer = Buzzer::default();
        buzzer.open();
        buzzer.claim(ContestantId::new(2));
        assert_eq!(buzzer.resolve(), Some(ContestantId::new(2)));
        assert_eq!(buzzer.state(), BuzzerState::Prepared);
        assert_eq!(buzzer.resolve(), None);
    }

    #[test]
    fn test_timeout_does_not_clear_a_win() {
        let mut buzzer = Buzzer::default();
        buzzer.open();
        buzzer.claim(ContestantId::new(4));
        assert!(!buzzer.timeout());
        assert_eq!(buzzer.claimant(), Some(ContestantId::new(4)));
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut buzzer = Buzzer::default();
        buzzer.open();
        buzzer.claim(ContestantId::new(1));
        buzzer.reset();
        assert_eq!(buzzer.state(), BuzzerState::Prepared);

        buzzer.open();
        buzzer.timeout();
        buzzer.reset();
        assert_eq!(buzzer.state(), BuzzerState::Prepared);
    }
}
