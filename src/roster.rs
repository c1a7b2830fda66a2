//! Contestant registry and scoring
//!
//! This module manages the fixed set of contestants seated at a panel:
//! their identities, their signed scores, and the single "active" flag the
//! buzzer arbiter grants to the contestant who currently holds the right
//! to answer. The set is created once at startup and never grows or
//! shrinks; only scores and active flags mutate afterwards.

use std::{cmp::Reverse, fmt::Display, num::ParseIntError, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A unique identifier for a contestant
///
/// Contestants are numbered from 1 in registration order, matching the
/// digit key on the operator keyboard that buzzes for them.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, DeserializeFromStr, SerializeDisplay,
)]
pub struct ContestantId(u32);

impl ContestantId {
    /// Creates a contestant ID from its raw number
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ContestantId {
    /// Formats the ID as its decimal number
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContestantId {
    type Err = ParseIntError;

    /// Parses an ID from its decimal representation
    ///
    /// # Errors
    ///
    /// Returns a `ParseIntError` if the string is not a decimal number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A single contestant record
///
/// Scores are unbounded signed integers and may go negative. The `active`
/// flag is owned by the buzzer arbitration flow: at most one contestant is
/// active at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    /// The contestant's unique identifier
    id: ContestantId,
    /// The contestant's display name
    name: String,
    /// Current score (may be negative)
    score: i64,
    /// Whether this contestant currently holds the answer privilege
    active: bool,
}

impl Contestant {
    /// Returns the contestant's identifier
    pub fn id(&self) -> ContestantId {
        self.id
    }

    /// Returns the contestant's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contestant's current score
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether this contestant currently holds the answer privilege
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Errors that can occur when building a roster
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A panel needs at least one contestant
    #[error("roster cannot be empty")]
    Empty,
    /// More contestants than the panel can seat
    #[error("too many contestants")]
    TooMany,
    /// A contestant name is empty or contains only whitespace
    #[error("contestant name cannot be empty")]
    EmptyName,
    /// A contestant name exceeds the maximum allowed length
    #[error("contestant name is too long")]
    NameTooLong,
}

/// The fixed set of contestants seated at a panel
///
/// Registration order is preserved and is the tie-break order for
/// standings. IDs are assigned 1-based in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Contestants in registration order
    contestants: Vec<Contestant>,
}

impl Roster {
    /// Builds a roster from contestant names, assigning IDs 1, 2, ... in
    /// registration order with all scores at zero
    ///
    /// Names are trimmed before validation.
    ///
    /// # Errors
    ///
    /// * `Error::Empty` - no names were supplied
    /// * `Error::TooMany` - more names than the panel can seat
    /// * `Error::EmptyName` - a name is empty after trimming
    /// * `Error::NameTooLong` - a name exceeds the length limit
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contestants = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.into().trim().to_owned();
                if name.is_empty() {
                    return Err(Error::EmptyName);
                }
                if name.len() > crate::constants::roster::MAX_NAME_LENGTH {
                    return Err(Error::NameTooLong);
                }
                Ok(Contestant {
                    id: ContestantId::new(u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)),
                    name,
                    score: 0,
                    active: false,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if contestants.is_empty() {
            return Err(Error::Empty);
        }
        if contestants.len() > crate::constants::roster::MAX_CONTESTANTS {
            return Err(Error::TooMany);
        }

        Ok(Self { contestants })
    }

    /// Returns the number of contestants
    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    /// Checks whether the roster holds any contestants
    ///
    /// A successfully constructed roster is never empty; this exists for
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }

    /// Returns the contestants in registration order
    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    /// Looks up a contestant by ID
    pub fn get(&self, id: ContestantId) -> Option<&Contestant> {
        self.contestants.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: ContestantId) -> Option<&mut Contestant> {
        self.contestants.iter_mut().find(|c| c.id == id)
    }

    /// Returns the single active contestant, if any
    pub fn active(&self) -> Option<&Contestant> {
        self.contestants.iter().find(|c| c.active)
    }

    /// Returns the contestants ranked for display: score descending, ties
    /// broken by registration order
    pub fn standings(&self) -> Vec<Contestant> {
        self.contestants
            .iter()
            .cloned()
            .sorted_by_key(|c| Reverse(c.score))
            .collect_vec()
    }

    /// Marks exactly `id` as active and every other contestant inactive
    ///
    /// Returns `false` (leaving all flags untouched) if the ID is unknown.
    pub(crate) fn activate_only(&mut self, id: ContestantId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for contestant in &mut self.contestants {
            contestant.active = contestant.id == id;
        }
        true
    }

    /// Clears the active flag on every contestant
    pub(crate) fn clear_active(&mut self) {
        for contestant in &mut self.contestants {
            contestant.active = false;
        }
    }

    /// Applies a signed score delta to a contestant
    ///
    /// Returns the new score, or `None` if the ID is unknown.
    pub(crate) fn apply_delta(&mut self, id: ContestantId, delta: i64) -> Option<i64> {
        let contestant = self.get_mut(id)?;
        contestant.score = contestant.score.saturating_add(delta);
        Some(contestant.score)
    }

    /// Replaces a contestant's score outright (operator override)
    ///
    /// Returns `false` if the ID is unknown.
    pub(crate) fn set_score(&mut self, id: ContestantId, score: i64) -> bool {
        match self.get_mut(id) {
            Some(contestant) => {
                contestant.score = score;
                true
            }
            None => false,
        }
    }
}
