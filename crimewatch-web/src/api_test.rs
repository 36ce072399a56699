//! Tests for the API client functionality
//!
//! Validates URL construction, bearer-token handling, and the error type
//! surfaced to views when the server refuses a request.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, CrimeWatchClient, ImageAttachment};
    use reqwest::StatusCode;
    use shared::models::ReportQuery;
    use uuid::Uuid;

    /// Tests API client creation normalizes the base URL
    #[test]
    fn test_api_client_base_url_is_trimmed() {
        let client = CrimeWatchClient::new("http://localhost:8080/api/");
        assert_eq!(
            client.api_url("crime-reports"),
            "http://localhost:8080/api/crime-reports"
        );
    }

    /// Tests path joining tolerates a leading slash
    #[test]
    fn test_api_url_joins_paths() {
        let client = CrimeWatchClient::new("/api");
        assert_eq!(client.api_url("/me"), "/api/me");
        assert_eq!(client.api_url("crime-types"), "/api/crime-types");
    }

    /// Tests bearer token installation and clearing
    #[test]
    fn test_bearer_token_roundtrip() {
        let client = CrimeWatchClient::new("/api");
        assert_eq!(client.current_bearer_token(), None);

        client.set_bearer_token(Some("T1".to_string()));
        assert_eq!(client.current_bearer_token(), Some("T1".to_string()));

        client.set_bearer_token(None);
        assert_eq!(client.current_bearer_token(), None);
    }

    /// Tests per-report endpoint paths
    #[test]
    fn test_report_endpoint_paths() {
        let client = CrimeWatchClient::new("/api");
        let id = Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();

        assert_eq!(
            client.api_url(&format!("crime-reports/{id}/comments")),
            "/api/crime-reports/7c9e6679-7425-40de-944b-e07fc1f90ae7/comments"
        );
        assert_eq!(
            client.api_url(&format!("crime-reports/{id}/rating")),
            "/api/crime-reports/7c9e6679-7425-40de-944b-e07fc1f90ae7/rating"
        );
        assert_eq!(
            client.api_url(&format!("admin/crime-reports/{id}/block")),
            "/api/admin/crime-reports/7c9e6679-7425-40de-944b-e07fc1f90ae7/block"
        );
    }

    /// Tests the feed query used by the home view
    #[test]
    fn test_feed_query_shape() {
        let query = ReportQuery::feed("Bhopal", 50);
        let pairs = query.query_pairs();

        assert_eq!(pairs[0], ("city", "Bhopal".to_string()));
        assert!(pairs.contains(&("limit", "50".to_string())));
        assert_eq!(pairs.len(), 2);
    }

    /// Tests server refusals surface the detail message
    #[test]
    fn test_server_error_displays_detail() {
        let error = ApiError::Server {
            status: StatusCode::UNAUTHORIZED,
            detail: "Invalid credentials".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid credentials");
        assert!(error.is_unauthorized());
    }

    /// Tests non-auth refusals are not treated as session expiry
    #[test]
    fn test_forbidden_is_not_unauthorized() {
        let error = ApiError::Server {
            status: StatusCode::FORBIDDEN,
            detail: "Admin access required".to_string(),
        };

        assert!(!error.is_unauthorized());
    }

    /// Tests attachment metadata is carried alongside the bytes
    #[test]
    fn test_image_attachment_fields() {
        let attachment = ImageAttachment {
            bytes: vec![0xFF, 0xD8, 0xFF],
            file_name: "evidence.jpg".to_string(),
            mime: "image/jpeg".to_string(),
        };

        assert_eq!(attachment.bytes.len(), 3);
        assert_eq!(attachment.file_name, "evidence.jpg");
        assert_eq!(attachment.mime, "image/jpeg");
    }
}
