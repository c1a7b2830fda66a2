//! Keyboard shortcuts for the operator console
//!
//! The operator drives the panel from a keyboard: digit keys buzz for the
//! matching contestant, space toggles the timer, arrows navigate, and
//! letter keys cover buzzer reset and answer reveal. This module translates
//! DOM-style key names into panel input events so the presentation layer
//! carries no game knowledge of its own.

use crate::{
    panel::{IncomingContestantMessage, IncomingMessage, IncomingOperatorMessage},
    roster::ContestantId,
};

/// Translates a key name into a panel input event
///
/// Letter bindings are case-insensitive. Digit keys `1`-`9` buzz for the
/// contestant with the matching ID; digits beyond the roster size produce
/// a buzz for an unknown contestant, which the panel silently ignores.
/// Unbound keys return `None`.
pub fn binding(key: &str) -> Option<IncomingMessage> {
    match key {
        " " | "Space" => Some(IncomingOperatorMessage::ToggleTimer.into()),
        "ArrowRight" => Some(IncomingOperatorMessage::Next.into()),
        "ArrowLeft" => Some(IncomingOperatorMessage::Previous.into()),
        "r" | "R" => Some(IncomingOperatorMessage::ResetBuzzer.into()),
        "a" | "A" => Some(IncomingOperatorMessage::ToggleAnswer.into()),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(digit @ '1'..='9'), None) => Some(
                    IncomingContestantMessage::Buzz(ContestantId::new(
                        u32::from(digit) - u32::from('0'),
                    ))
                    .into(),
                ),
                _ => None,
            }
        }
    }
}

/// Parses an operator-entered score from a prompt or text field
///
/// The entry is trimmed before parsing. Returns `None` for non-numeric
/// input, in which case the prior score is retained by the caller.
pub fn parse_score_entry(entry: &str) -> Option<i64> {
    entry.trim().parse().ok()
}
