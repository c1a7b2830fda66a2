//! Configuration constants for the podium control panel
//!
//! This module contains the limits and fixed values used throughout the
//! panel to ensure data integrity and provide consistent boundaries for
//! the different components.

/// Quiz configuration constants
pub mod quiz {
    /// Maximum number of questions allowed in a single quiz
    pub const MAX_QUESTION_COUNT: usize = 100;
    /// Maximum length of a quiz title in characters
    pub const MAX_TITLE_LENGTH: usize = 200;
    /// Maximum length of question content in characters
    pub const MAX_CONTENT_LENGTH: usize = 500;
    /// Maximum length of a stored answer in characters
    pub const MAX_ANSWER_LENGTH: usize = 200;
    /// Minimum time limit in seconds for answering a question
    pub const MIN_TIME_LIMIT: u64 = 1;
    /// Maximum time limit in seconds for answering a question
    pub const MAX_TIME_LIMIT: u64 = 600;
}

/// Contestant roster constants
pub mod roster {
    /// Maximum number of contestants on a panel (one per digit key 1-9)
    pub const MAX_CONTESTANTS: usize = 9;
    /// Maximum length of a contestant name in characters
    pub const MAX_NAME_LENGTH: usize = 50;
}

/// Score deltas applied by grading
pub mod scoring {
    /// Points awarded to the claiming contestant for a correct answer
    pub const CORRECT_DELTA: i64 = 10;
    /// Points deducted from the claiming contestant for an incorrect answer
    pub const INCORRECT_DELTA: i64 = -5;
}

/// Countdown timer constants
pub mod timer {
    /// Length of a single countdown tick in seconds
    pub const TICK_SECONDS: u64 = 1;
}

/// Media attachment constants
pub mod media {
    /// Maximum length of an asset source reference
    pub const MAX_SOURCE_LENGTH: usize = 300;
    /// Maximum length of alt text for accessibility
    pub const MAX_ALT_LENGTH: usize = 200;
}
