pub mod comment;
pub mod crime_type;
pub mod errors;
pub mod rating;
pub mod report;
pub mod timestamp;
pub mod user;

pub use comment::{Comment, CommentDraft};
pub use crime_type::{CrimeType, CrimeTypeDraft};
pub use errors::ErrorBody;
pub use rating::{MyRating, RatingDraft, RATING_MAX, RATING_MIN};
pub use report::{BlockRequest, CrimeReport, ReportDraft, ReportQuery, ReportSubmitResponse};
use serde::{Deserialize, Serialize};
pub use timestamp::Timestamp;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};

/// Acknowledgement body returned by mutating endpoints with no payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    /// Human-readable outcome message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_from_server_json() {
        let ack: Ack = serde_json::from_str(r#"{"message": "Rating updated successfully"}"#)
            .unwrap();
        assert_eq!(ack.message, "Rating updated successfully");
    }
}
