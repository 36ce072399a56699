use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Represents a registered account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's full display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// Optional contact phone number.
    pub phone: Option<String>,

    /// Home city; reports the user submits are scoped to it.
    pub city: String,

    /// Whether the account may use the moderation console.
    pub is_admin: bool,

    /// When the account was created.
    pub created_at: Timestamp,
}

/// Credentials for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Body of `POST /register`, creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's full display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// Optional contact phone number.
    pub phone: Option<String>,

    /// Home city for the new account.
    pub city: String,
}

/// Shared response shape of `POST /login` and `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Human-readable outcome message.
    pub message: String,

    /// Opaque bearer token for subsequent authenticated calls.
    pub token: String,

    /// The authenticated account.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap(),
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            city: "Bhopal".to_string(),
            is_admin: false,
            created_at: Timestamp(Utc.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = sample_user();
        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, user);
        assert!(!deserialized.is_admin);
    }

    #[test]
    fn test_user_from_server_json() {
        // Literal shape produced by the backend, including a null phone.
        let body = r#"{
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": null,
            "city": "Bhopal",
            "is_admin": true,
            "created_at": "2025-01-05T09:00:00Z"
        }"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.name, "Asha Verma");
        assert_eq!(user.phone, None);
        assert!(user.is_admin);
    }

    #[test]
    fn test_auth_response_from_server_json() {
        let body = r#"{
            "message": "Login successful",
            "token": "T1",
            "user": {
                "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
                "name": "A",
                "email": "a@b.com",
                "phone": "9876543210",
                "city": "Bhopal",
                "is_admin": false,
                "created_at": "2025-01-05T09:00:00Z"
            }
        }"#;

        let auth: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(auth.token, "T1");
        assert_eq!(auth.user.email, "a@b.com");
        assert_eq!(auth.user.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["password"], "x");
    }

    #[test]
    fn test_register_request_keeps_optional_phone() {
        let request = RegisterRequest {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            phone: None,
            city: "Bhopal".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();

        // The API treats a missing phone as null; keep the key present.
        assert!(json.get("phone").is_some());
        assert!(json["phone"].is_null());
    }
}
