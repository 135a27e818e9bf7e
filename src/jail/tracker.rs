//! Who is in jail and how many release attempts they have failed.
//!
//! A record exists only while a participant is confined. The tracker decides
//! the outcome of a release roll; moving the token and taking the fine are
//! left to the game state, which owns positions and goes through the bank.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DiceRoll, PlayerId};

/// Per-participant imprisonment record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailRecord {
    /// Consecutive rolls without doubles since being sent.
    pub attempts: u8,
}

/// Result of a confined participant's roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseAttempt {
    /// Doubles: released, and the token moves by the roll.
    Doubles,
    /// No doubles; still confined after `attempts` failures.
    StillConfined { attempts: u8 },
    /// No doubles on the last allowed attempt; the fine must be paid now.
    FineDue { attempts: u8 },
}

/// Imprisonment bookkeeping for all participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailTracker {
    records: FxHashMap<PlayerId, JailRecord>,
    max_attempts: u8,
}

impl JailTracker {
    /// Create an empty tracker; `max_attempts` failures force the fine.
    #[must_use]
    pub fn new(max_attempts: u8) -> Self {
        Self {
            records: FxHashMap::default(),
            max_attempts,
        }
    }

    /// Confine a participant with a fresh record.
    pub fn send(&mut self, player: PlayerId) {
        self.records.insert(player, JailRecord::default());
        debug!(%player, "confined");
    }

    #[must_use]
    pub fn is_confined(&self, player: PlayerId) -> bool {
        self.records.contains_key(&player)
    }

    /// Failed attempts so far; 0 for a free participant.
    #[must_use]
    pub fn attempts(&self, player: PlayerId) -> u8 {
        self.records.get(&player).map_or(0, |r| r.attempts)
    }

    #[must_use]
    pub fn record(&self, player: PlayerId) -> Option<JailRecord> {
        self.records.get(&player).copied()
    }

    /// Drop a participant's record. Returns false if they were free.
    pub fn release(&mut self, player: PlayerId) -> bool {
        let released = self.records.remove(&player).is_some();
        if released {
            debug!(%player, "released");
        }
        released
    }

    /// Resolve a confined participant's roll.
    ///
    /// Doubles release immediately. Otherwise the failure count goes up; on
    /// reaching the limit the record stays in place with `FineDue` until the
    /// fine is actually paid. Returns `None` for a free participant.
    pub fn attempt_release(&mut self, player: PlayerId, roll: DiceRoll) -> Option<ReleaseAttempt> {
        let max_attempts = self.max_attempts;
        let record = self.records.get_mut(&player)?;

        if roll.is_doubles() {
            self.release(player);
            return Some(ReleaseAttempt::Doubles);
        }

        record.attempts = (record.attempts + 1).min(max_attempts);
        let attempts = record.attempts;
        debug!(%player, attempts, max_attempts, "no doubles");
        if attempts >= max_attempts {
            Some(ReleaseAttempt::FineDue { attempts })
        } else {
            Some(ReleaseAttempt::StillConfined { attempts })
        }
    }

    /// Everyone currently confined.
    pub fn confined(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.records.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_send_and_release() {
        let mut jail = JailTracker::new(3);
        assert!(!jail.is_confined(P0));

        jail.send(P0);
        assert!(jail.is_confined(P0));
        assert!(!jail.is_confined(P1));
        assert_eq!(jail.attempts(P0), 0);

        assert!(jail.release(P0));
        assert!(!jail.release(P0));
        assert_eq!(jail.record(P0), None);
    }

    #[test]
    fn test_doubles_release() {
        let mut jail = JailTracker::new(3);
        jail.send(P0);

        let outcome = jail.attempt_release(P0, DiceRoll::new(2, 2));
        assert_eq!(outcome, Some(ReleaseAttempt::Doubles));
        assert!(!jail.is_confined(P0));
    }

    #[test]
    fn test_third_failure_makes_fine_due() {
        let mut jail = JailTracker::new(3);
        jail.send(P0);
        let miss = DiceRoll::new(1, 2);

        assert_eq!(jail.attempt_release(P0, miss), Some(ReleaseAttempt::StillConfined { attempts: 1 }));
        assert_eq!(jail.attempt_release(P0, miss), Some(ReleaseAttempt::StillConfined { attempts: 2 }));
        assert_eq!(jail.attempt_release(P0, miss), Some(ReleaseAttempt::FineDue { attempts: 3 }));
        assert!(jail.is_confined(P0));

        // An unpaid fine keeps the counter at the limit
        assert_eq!(jail.attempt_release(P0, miss), Some(ReleaseAttempt::FineDue { attempts: 3 }));
    }

    #[test]
    fn test_resend_resets_attempts() {
        let mut jail = JailTracker::new(3);
        jail.send(P0);
        jail.attempt_release(P0, DiceRoll::new(1, 2));
        assert_eq!(jail.attempts(P0), 1);

        jail.send(P0);
        assert_eq!(jail.attempts(P0), 0);
    }

    #[test]
    fn test_free_participant_has_no_attempt() {
        let mut jail = JailTracker::new(3);
        assert_eq!(jail.attempt_release(P1, DiceRoll::new(3, 3)), None);
    }

    #[test]
    fn test_confined_listing() {
        let mut jail = JailTracker::new(3);
        jail.send(P0);
        jail.send(P1);

        let mut confined: Vec<_> = jail.confined().collect();
        confined.sort();
        assert_eq!(confined, vec![P0, P1]);
    }
}
