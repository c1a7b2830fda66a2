//! Media attachments for questions
//!
//! This module defines the media types that can accompany a question on
//! the main display. Currently only images are supported, with room for
//! future expansion to audio or video stingers.

use garde::Validate;
use serde::{Deserialize, Serialize};

/// Any kind of media content that can accompany a question
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub enum Media {
    /// Image media content
    Image(#[garde(dive)] Image),
}

/// Different sources of image content
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub enum Image {
    /// An image bundled with the show's asset directory
    ///
    /// The source is a path or URL the presentation layer can resolve
    /// directly; alt text is carried for display fallbacks.
    Asset {
        /// Asset path or URL resolved by the presentation layer
        #[garde(length(min = 1, max = crate::constants::media::MAX_SOURCE_LENGTH))]
        source: String,
        /// Alternative text for accessibility and display fallbacks
        #[garde(length(max = crate::constants::media::MAX_ALT_LENGTH))]
        alt: String,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_asset_image_validates() {
        let image = Image::Asset {
            source: "images/flag.png".to_string(),
            alt: "A national flag".to_string(),
        };
        assert!(image.validate().is_ok());
    }

    #[test]
    fn test_empty_source_rejected() {
        let image = Image::Asset {
            source: String::new(),
            alt: String::new(),
        };
        assert!(image.validate().is_err());
    }

    #[test]
    fn test_overlong_alt_rejected() {
        let image = Image::Asset {
            source: "images/flag.png".to_string(),
            alt: "a".repeat(crate::constants::media::MAX_ALT_LENGTH + 1),
        };
        assert!(image.validate().is_err());
    }
}
