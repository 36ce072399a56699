use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// An administrator-managed taxonomy value used to categorize reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrimeType {
    /// Unique identifier for the taxonomy entry.
    pub id: Uuid,

    /// Display name; uniqueness is enforced server-side.
    pub name: String,

    /// When the entry was created.
    pub created_at: Timestamp,
}

/// Body of both `POST /admin/crime-types` and `PUT /admin/crime-types/{id}`;
/// the create and rename payloads share one shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrimeTypeDraft {
    /// Desired display name; must be non-empty after trimming.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crime_type_from_server_json() {
        let body = r#"{
            "id": "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            "name": "Illegal Trafficking",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let crime_type: CrimeType = serde_json::from_str(body).unwrap();
        assert_eq!(crime_type.name, "Illegal Trafficking");
    }

    #[test]
    fn test_draft_shape() {
        let draft = CrimeTypeDraft {
            name: "Vandalism".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["name"], "Vandalism");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
