use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Timestamp;

/// A submitted incident record with its server-computed aggregates.
///
/// `avg_credibility`, `total_ratings` and `comments_count` are maintained by
/// the server; the client renders them as fetched and never recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrimeReport {
    /// Unique identifier for the report.
    pub id: Uuid,

    /// Account that filed the report.
    pub user_id: Uuid,

    /// Display name shown on the report; "Anonymous" when filed anonymously.
    pub user_name: String,

    /// Taxonomy value categorizing the incident.
    pub crime_type: String,

    /// Where the incident happened.
    pub location: String,

    /// Optional nearby landmark.
    pub landmark: Option<String>,

    /// When the incident happened, as entered by the reporter (no zone).
    pub crime_time: NaiveDateTime,

    /// Suspect name, if known.
    pub criminal_name: Option<String>,

    /// Free-text narrative of the incident.
    pub crime_details: String,

    /// Whether the reporter chose to stay anonymous.
    pub is_anonymous: bool,

    /// City the report is scoped to.
    pub city: String,

    /// Optional photo evidence, base64-encoded JPEG.
    pub image_base64: Option<String>,

    /// Hidden from public feeds when set; only the admin view reflects it.
    pub is_blocked: bool,

    /// Mean credibility rating across all raters, 0.0 when unrated.
    pub avg_credibility: f64,

    /// Number of credibility ratings received.
    pub total_ratings: i64,

    /// Number of comments on the report.
    pub comments_count: i64,

    /// When the report was filed.
    pub created_at: Timestamp,
}

/// The JSON half of the multipart report-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportDraft {
    /// Taxonomy value categorizing the incident.
    pub crime_type: String,

    /// Where the incident happened.
    pub location: String,

    /// Optional nearby landmark.
    pub landmark: Option<String>,

    /// When the incident happened.
    pub crime_time: NaiveDateTime,

    /// Suspect name, if known.
    pub criminal_name: Option<String>,

    /// Free-text narrative of the incident.
    pub crime_details: String,

    /// Whether to file anonymously.
    pub is_anonymous: bool,
}

/// Response shape of `POST /crime-reports`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSubmitResponse {
    /// Human-readable outcome message.
    pub message: String,

    /// The stored report as the server recorded it.
    pub report: CrimeReport,
}

/// Body of `PUT /admin/crime-reports/{id}/block`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockRequest {
    /// Desired block state.
    pub is_blocked: bool,

    /// Optional moderation note.
    pub reason: Option<String>,
}

/// Filter set for `GET /crime-reports`; all filters are additive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    /// City scope; always sent.
    pub city: String,

    /// Window size; the views request a fixed window, no cursor.
    pub limit: Option<u32>,

    /// Offset into the result window.
    pub skip: Option<u32>,

    /// Free-text search across details, location, suspect and landmark.
    pub search: Option<String>,

    /// Exact taxonomy filter.
    pub crime_type: Option<String>,

    /// Substring location filter.
    pub location: Option<String>,

    /// Single-report lookup used by the shareable detail view.
    pub id: Option<Uuid>,
}

impl ReportQuery {
    /// Feed window for a city: newest reports up to `limit`.
    pub fn feed(city: impl Into<String>, limit: u32) -> Self {
        Self {
            city: city.into(),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Single-report lookup by id.
    pub fn by_id(city: impl Into<String>, id: Uuid) -> Self {
        Self {
            city: city.into(),
            id: Some(id),
            ..Self::default()
        }
    }

    /// Assemble the query string pairs; absent filters are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("city", self.city.clone())];
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ref crime_type) = self.crime_type {
            pairs.push(("crime_type", crime_type.clone()));
        }
        if let Some(ref location) = self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(id) = self.id {
            pairs.push(("id", id.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const REPORT_JSON: &str = r#"{
        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
        "user_id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
        "user_name": "Anonymous",
        "crime_type": "Illegal Drug",
        "location": "MP Nagar",
        "landmark": null,
        "crime_time": "2025-06-01T21:15:00",
        "criminal_name": null,
        "crime_details": "Suspicious exchange near the bus stop.",
        "is_anonymous": true,
        "city": "Bhopal",
        "image_base64": null,
        "is_blocked": false,
        "avg_credibility": 7.5,
        "total_ratings": 4,
        "comments_count": 2,
        "created_at": "2025-06-02T08:00:00Z"
    }"#;

    #[test]
    fn test_report_from_server_json() {
        let report: CrimeReport = serde_json::from_str(REPORT_JSON).unwrap();

        assert_eq!(report.user_name, "Anonymous");
        assert_eq!(report.landmark, None);
        assert_eq!(report.avg_credibility, 7.5);
        assert_eq!(report.total_ratings, 4);
        assert!(!report.is_blocked);
        assert_eq!(
            report.crime_time,
            NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(21, 15, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_draft_serializes_naive_incident_time() {
        let draft = ReportDraft {
            crime_type: "Illegal Trafficking".to_string(),
            location: "Station Road".to_string(),
            landmark: Some("Old clock tower".to_string()),
            crime_time: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(21, 15, 0)
                .unwrap(),
            criminal_name: None,
            crime_details: "Vehicles loading crates after midnight.".to_string(),
            is_anonymous: false,
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["crime_time"], "2025-06-01T21:15:00");
        assert!(json["criminal_name"].is_null());
    }

    #[test]
    fn test_feed_query_pairs() {
        let query = ReportQuery::feed("Bhopal", 50);
        assert_eq!(
            query.query_pairs(),
            vec![("city", "Bhopal".to_string()), ("limit", "50".to_string())]
        );
    }

    #[test]
    fn test_search_filters_are_additive() {
        let query = ReportQuery {
            city: "Bhopal".to_string(),
            search: Some("theft".to_string()),
            crime_type: Some("Illegal Drug".to_string()),
            location: Some("MP Nagar".to_string()),
            ..ReportQuery::default()
        };

        let pairs = query.query_pairs();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&("search", "theft".to_string())));
        assert!(pairs.contains(&("crime_type", "Illegal Drug".to_string())));
        assert!(pairs.contains(&("location", "MP Nagar".to_string())));
    }

    #[test]
    fn test_by_id_lookup_pairs() {
        let id = Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();
        let pairs = ReportQuery::by_id("Bhopal", id).query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("city", "Bhopal".to_string()),
                ("id", "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_request_shape() {
        let block = BlockRequest {
            is_blocked: true,
            reason: Some("duplicate".to_string()),
        };
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["is_blocked"], true);
        assert_eq!(json["reason"], "duplicate");
    }
}
