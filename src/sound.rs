//! Sound cues emitted by the panel
//!
//! The panel signals sound effects as values; actually playing them is the
//! presentation layer's job and is fire-and-forget. The default asset table
//! maps each cue to the file shipped with the show's sound pack.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

/// A sound effect cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Sound {
    /// A contestant claimed the buzzer
    Claim,
    /// The claim was graded correct
    Correct,
    /// The claim was graded incorrect
    Wrong,
    /// The countdown expired with no claim
    Timeout,
}

impl Sound {
    /// Returns the default asset file for every cue
    pub fn assets() -> EnumMap<Sound, &'static str> {
        enum_map! {
            Sound::Claim => "sounds/buzzer.ogg",
            Sound::Correct => "sounds/correct.ogg",
            Sound::Wrong => "sounds/wrong.ogg",
            Sound::Timeout => "sounds/timeout.ogg",
        }
    }

    /// Returns the default asset file for this cue
    pub fn asset(self) -> &'static str {
        Self::assets()[self]
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_every_cue_has_an_asset() {
        for (_, asset) in Sound::assets() {
            assert!(asset.starts_with("sounds/"));
            assert!(asset.ends_with(".ogg"));
        }
    }

    #[test]
    fn test_asset_lookup_matches_table() {
        assert_eq!(Sound::Claim.asset(), "sounds/buzzer.ogg");
        assert_eq!(Sound::Timeout.asset(), "sounds/timeout.ogg");
    }
}
