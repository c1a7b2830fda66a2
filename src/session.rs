//! Presentation adapter seam
//!
//! This module defines the trait through which the panel drives whatever
//! renders the show. The abstraction keeps the game logic free of any
//! rendering or audio concern while still letting it announce every state
//! change as it happens.

use thiserror::Error;

use super::{SyncMessage, UpdateMessage, sound::Sound};

/// Errors the presentation layer can report from sound playback
///
/// Playback is fire-and-forget: the panel logs these for diagnostics and
/// carries on. They never affect game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refuses audio before the first user interaction
    #[error("audio playback not permitted yet")]
    NotPermitted,
    /// The asset is missing or cannot be decoded
    #[error("audio asset unavailable: {0}")]
    Unavailable(String),
}

/// Trait for the display and audio surface the panel drives
///
/// Implementations might render to a browser window or collect messages
/// for assertions in tests.
pub trait Stage {
    /// Applies an incremental update to the display
    fn apply(&self, message: &UpdateMessage);

    /// Replaces the display contents with a full snapshot
    ///
    /// Used when the surface (re)connects and needs the complete current
    /// state rather than a delta.
    fn sync(&self, state: &SyncMessage);

    /// Plays a sound cue
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the platform cannot play the cue;
    /// the panel treats this as diagnostic-only.
    fn play_sound(&self, sound: Sound) -> Result<(), PlaybackError>;
}
