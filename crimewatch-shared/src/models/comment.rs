use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// A comment on a report; append-only from the client's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique identifier for the comment.
    pub id: Uuid,

    /// Report the comment belongs to.
    pub report_id: Uuid,

    /// Account that wrote the comment.
    pub user_id: Uuid,

    /// Display name of the commenter.
    pub user_name: String,

    /// The comment body.
    pub comment_text: String,

    /// When the comment was posted.
    pub created_at: Timestamp,
}

/// Body of `POST /crime-reports/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentDraft {
    /// The comment body; must be non-empty after trimming.
    pub comment_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_from_server_json() {
        let body = r#"{
            "id": "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            "report_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "user_id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "user_name": "Ravi",
            "comment_text": "I saw this too.",
            "created_at": "2025-06-02T10:30:00Z"
        }"#;

        let comment: Comment = serde_json::from_str(body).unwrap();
        assert_eq!(comment.user_name, "Ravi");
        assert_eq!(comment.comment_text, "I saw this too.");
    }

    #[test]
    fn test_comment_draft_shape() {
        let draft = CommentDraft {
            comment_text: "Stay safe out there.".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["comment_text"], "Stay safe out there.");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
