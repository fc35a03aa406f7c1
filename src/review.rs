//! Review input records.

use serde::{Deserialize, Serialize};

/// A raw review as supplied by a dataset.
///
/// `review_id` may be absent in loose input data; downstream consumers
/// derive a deterministic fallback id from the text in that case. `stars`
/// is the 1-5 rating carried through to every chunk of the review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Stable identifier, if the dataset provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<String>,
    /// Full review text.
    pub text: String,
    /// Star rating, 1-5.
    pub stars: u8,
}

impl Review {
    /// Create a review with an explicit id.
    pub fn new<I: Into<String>, T: Into<String>>(review_id: I, text: T, stars: u8) -> Self {
        Self {
            review_id: Some(review_id.into()),
            text: text.into(),
            stars,
        }
    }

    /// Create a review without an id.
    pub fn anonymous<T: Into<String>>(text: T, stars: u8) -> Self {
        Self {
            review_id: None,
            text: text.into(),
            stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_without_id() {
        let review: Review =
            serde_json::from_str(r#"{"text": "Great food and service.", "stars": 5}"#).unwrap();
        assert_eq!(review.review_id, None);
        assert_eq!(review.stars, 5);
    }

    #[test]
    fn test_review_roundtrip() {
        let review = Review::new("r1", "Solid lunch spot.", 4);
        let json = serde_json::to_string(&review).unwrap();
        let back: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(review, back);
    }
}
