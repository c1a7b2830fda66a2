//! Quiz configuration and question management
//!
//! This module defines the static question store for a show: an ordered,
//! validated list of questions loaded once at startup. Question order is
//! presentation order; nothing in the list mutates after load.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use web_time::Duration;

use crate::media::Media;

type ValidationResult = garde::Result;

/// Validates that a duration falls within specified bounds.
///
/// This is a custom validation function for use with the `garde` crate.
/// It checks if the duration in seconds is within the inclusive range
/// defined by `MIN_SECONDS` and `MAX_SECONDS`.
///
/// # Errors
///
/// Returns a `garde::Error` if the duration is outside the specified bounds.
fn validate_duration<const MIN_SECONDS: u64, const MAX_SECONDS: u64>(
    val: &Duration,
    _ctx: &(),
) -> ValidationResult {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "outside of bounds [{MIN_SECONDS},{MAX_SECONDS}]",
        )))
    }
}

/// Validates the answering time limit of a question
fn validate_time_limit(val: &Duration, ctx: &()) -> ValidationResult {
    validate_duration::<
        { crate::constants::quiz::MIN_TIME_LIMIT },
        { crate::constants::quiz::MAX_TIME_LIMIT },
    >(val, ctx)
}

/// A single question as presented on the main display
///
/// Each question carries the text shown to the room, the stored answer
/// revealed by the operator, the answering time limit, and an optional
/// image attachment.
#[serde_with::serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Question {
    /// The question text displayed to the room
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_CONTENT_LENGTH))]
    content: String,
    /// The stored answer, shown only when revealed by the operator
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_ANSWER_LENGTH))]
    answer: String,
    /// Countdown duration for this question, in whole seconds
    #[garde(custom(validate_time_limit))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    time: Duration,
    /// Optional image shown alongside the question text
    #[garde(dive)]
    media: Option<Media>,
}

impl Question {
    /// Creates a question with no media attachment
    pub fn new(content: impl Into<String>, answer: impl Into<String>, time: Duration) -> Self {
        Self {
            content: content.into(),
            answer: answer.into(),
            time,
            media: None,
        }
    }

    /// Attaches media to the question
    #[must_use]
    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Returns the question text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the stored answer
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the countdown duration configured for this question
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Returns the optional media attachment
    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }
}

/// A complete quiz: a title and the ordered list of questions
///
/// This is the configuration a panel session is constructed from. It is
/// immutable for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Quiz {
    /// The title of the show (display only)
    #[garde(length(max = crate::constants::quiz::MAX_TITLE_LENGTH))]
    title: String,

    /// The questions in presentation order
    #[garde(length(min = 1, max = crate::constants::quiz::MAX_QUESTION_COUNT), dive)]
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a quiz from a title and an ordered question list
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Returns the show title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of questions in this quiz
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks whether this quiz contains any questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at `index`, if within bounds
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_test_question() -> Question {
        Question::new(
            "Which city is the capital of Australia?",
            "Canberra",
            Duration::from_secs(15),
        )
    }

    #[test]
    fn test_question_validation() {
        let question = create_test_question();
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_question_empty_content_rejected() {
        let question = Question::new("", "Canberra", Duration::from_secs(15));
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_content_too_long() {
        let content = "a".repeat(crate::constants::quiz::MAX_CONTENT_LENGTH + 1);
        let question = Question::new(content, "Canberra", Duration::from_secs(15));
        assert!(question.validate().is_err());
    }

    #[test]
    fn test_question_time_limit_bounds() {
        let too_short = Question::new("q", "a", Duration::from_secs(0));
        assert!(too_short.validate().is_err());

        let too_long = Question::new(
            "q",
            "a",
            Duration::from_secs(crate::constants::quiz::MAX_TIME_LIMIT + 1),
        );
        assert!(too_long.validate().is_err());

        let at_minimum = Question::new(
            "q",
            "a",
            Duration::from_secs(crate::constants::quiz::MIN_TIME_LIMIT),
        );
        assert!(at_minimum.validate().is_ok());
    }

    #[test]
    fn test_question_with_media_validates() {
        let question = create_test_question().with_media(crate::media::Media::Image(
            crate::media::Image::Asset {
                source: "images/canberra.jpg".to_string(),
                alt: "Parliament House".to_string(),
            },
        ));
        assert!(question.validate().is_ok());
        assert!(question.media().is_some());
    }

    #[test]
    fn test_quiz_len_and_get() {
        let quiz = Quiz::new("Finals", vec![create_test_question()]);
        assert_eq!(quiz.len(), 1);
        assert!(!quiz.is_empty());
        assert!(quiz.get(0).is_some());
        assert!(quiz.get(1).is_none());
    }

    #[test]
    fn test_quiz_requires_questions() {
        let quiz = Quiz::new("Finals", vec![]);
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_quiz_title_too_long() {
        let quiz = Quiz::new(
            "a".repeat(crate::constants::quiz::MAX_TITLE_LENGTH + 1),
            vec![create_test_question()],
        );
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn test_question_time_serializes_as_seconds() {
        let question = create_test_question();
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"time\":15"));
    }
}
