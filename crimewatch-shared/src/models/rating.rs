use serde::{Deserialize, Serialize};

/// Lowest credibility value the ten-star control can produce.
pub const RATING_MIN: u8 = 1;

/// Highest credibility value the ten-star control can produce.
pub const RATING_MAX: u8 = 10;

/// Body of `POST /crime-reports/{id}/rating`.
///
/// At most one rating exists per (user, report) pair; re-submission
/// overwrites the previous value server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDraft {
    /// Credibility value, `RATING_MIN..=RATING_MAX`.
    pub rating: u8,
}

impl RatingDraft {
    /// Whether `value` is a rating the client is willing to submit.
    pub fn in_range(value: u8) -> bool {
        (RATING_MIN..=RATING_MAX).contains(&value)
    }
}

/// Response of `GET /crime-reports/{id}/rating`: the caller's own rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MyRating {
    /// The caller's rating, absent when they have not rated the report.
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!RatingDraft::in_range(0));
        assert!(RatingDraft::in_range(1));
        assert!(RatingDraft::in_range(10));
        assert!(!RatingDraft::in_range(11));
    }

    #[test]
    fn test_rating_draft_shape() {
        let draft = RatingDraft { rating: 8 };
        let json = serde_json::to_value(draft).unwrap();
        assert_eq!(json["rating"], 8);
    }

    #[test]
    fn test_unrated_response_is_null() {
        let mine: MyRating = serde_json::from_str(r#"{"rating": null}"#).unwrap();
        assert_eq!(mine.rating, None);

        let rated: MyRating = serde_json::from_str(r#"{"rating": 7}"#).unwrap();
        assert_eq!(rated.rating, Some(7));
    }
}
