use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    Ack, AuthResponse, BlockRequest, Comment, CommentDraft, CrimeReport, CrimeType,
    CrimeTypeDraft, ErrorBody, LoginRequest, MyRating, RatingDraft, RegisterRequest, ReportDraft,
    ReportQuery, ReportSubmitResponse, User,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<CrimeWatchClient> = OnceCell::new();
}

/// Failure of an API call: the transport broke, or the server refused.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status; `detail` carries its
    /// error message when one was parseable.
    #[error("{detail}")]
    Server {
        /// HTTP status of the refusal.
        status: StatusCode,
        /// Server-provided detail, or the canonical status reason.
        detail: String,
    },

    /// The request never produced a usable response.
    #[error("unable to reach server: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request body could not be encoded before sending.
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the failure was an authentication rejection.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Server { status, .. } => *status == StatusCode::UNAUTHORIZED,
            Self::Transport(err) => err.status() == Some(StatusCode::UNAUTHORIZED),
            Self::Encode(_) => false,
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(ApiError::Server { status, detail })
    }
}

/// An image to attach to a report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Original file name, forwarded in the multipart part.
    pub file_name: String,
    /// MIME type reported by the file input.
    pub mime: String,
}

/// Lightweight API client for CrimeWatch web interactions.
#[derive(Clone, Debug)]
pub struct CrimeWatchClient {
    base_url: String,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl CrimeWatchClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            bearer_token: Arc::new(Mutex::new(None)),
        }
    }

    /// Process-wide client instance configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Install or clear the bearer token attached to authenticated calls.
    pub fn set_bearer_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token;
        }
    }

    /// The bearer token currently attached to authenticated calls.
    pub fn current_bearer_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_bearer_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("login");
        let response = self.client.post(url).json(payload).send().await?;
        let body: AuthResponse = decode(response).await?;
        self.set_bearer_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Create an account; the server signs the new user in directly.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("register");
        let response = self.client.post(url).json(payload).send().await?;
        let body: AuthResponse = decode(response).await?;
        self.set_bearer_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Resolve the profile behind the installed bearer token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let url = self.api_url("me");
        let response = self.authorize(self.client.get(url)).send().await?;
        decode(response).await
    }

    /// List reports matching `query`, newest first as served.
    pub async fn list_reports(&self, query: &ReportQuery) -> Result<Vec<CrimeReport>, ApiError> {
        let url = self.api_url("crime-reports");
        let response = self
            .client
            .get(url)
            .query(&query.query_pairs())
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch a single report through the shareable-link lookup.
    pub async fn report_by_id(
        &self,
        city: &str,
        id: &Uuid,
    ) -> Result<Option<CrimeReport>, ApiError> {
        let query = ReportQuery::by_id(city, *id);
        let mut reports = self.list_reports(&query).await?;
        if reports.is_empty() {
            Ok(None)
        } else {
            Ok(Some(reports.swap_remove(0)))
        }
    }

    /// Submit a new report as multipart: JSON `crime_data` plus an optional
    /// `image` part. The 2 MiB image gate runs in the composer, before this
    /// call is ever made.
    pub async fn submit_report(
        &self,
        draft: &ReportDraft,
        image: Option<ImageAttachment>,
    ) -> Result<ReportSubmitResponse, ApiError> {
        let url = self.api_url("crime-reports");
        let crime_data = serde_json::to_string(draft)?;

        let mut form = reqwest::multipart::Form::new().text("crime_data", crime_data);
        if let Some(attachment) = image {
            let part = reqwest::multipart::Part::bytes(attachment.bytes)
                .file_name(attachment.file_name)
                .mime_str(&attachment.mime)?;
            form = form.part("image", part);
        }

        let response = self
            .authorize(self.client.post(url))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch comments for a report, in server-returned order.
    pub async fn comments(&self, report_id: &Uuid) -> Result<Vec<Comment>, ApiError> {
        let url = self.api_url(&format!("crime-reports/{report_id}/comments"));
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// Post a comment on a report.
    pub async fn post_comment(
        &self,
        report_id: &Uuid,
        draft: &CommentDraft,
    ) -> Result<Comment, ApiError> {
        let url = self.api_url(&format!("crime-reports/{report_id}/comments"));
        let response = self
            .authorize(self.client.post(url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the caller's own rating for a report.
    pub async fn my_rating(&self, report_id: &Uuid) -> Result<MyRating, ApiError> {
        let url = self.api_url(&format!("crime-reports/{report_id}/rating"));
        let response = self.authorize(self.client.get(url)).send().await?;
        decode(response).await
    }

    /// Submit or overwrite the caller's credibility rating for a report.
    pub async fn submit_rating(
        &self,
        report_id: &Uuid,
        draft: &RatingDraft,
    ) -> Result<Ack, ApiError> {
        let url = self.api_url(&format!("crime-reports/{report_id}/rating"));
        let response = self
            .authorize(self.client.post(url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the crime-type taxonomy.
    pub async fn crime_types(&self) -> Result<Vec<CrimeType>, ApiError> {
        let url = self.api_url("crime-types");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// Add a taxonomy entry. Admin only.
    pub async fn create_crime_type(
        &self,
        draft: &CrimeTypeDraft,
    ) -> Result<CrimeType, ApiError> {
        let url = self.api_url("admin/crime-types");
        let response = self
            .authorize(self.client.post(url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Rename a taxonomy entry. Admin only.
    pub async fn rename_crime_type(
        &self,
        id: &Uuid,
        draft: &CrimeTypeDraft,
    ) -> Result<CrimeType, ApiError> {
        let url = self.api_url(&format!("admin/crime-types/{id}"));
        let response = self
            .authorize(self.client.put(url))
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a taxonomy entry. Admin only, no undo.
    pub async fn delete_crime_type(&self, id: &Uuid) -> Result<Ack, ApiError> {
        let url = self.api_url(&format!("admin/crime-types/{id}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        decode(response).await
    }

    /// List every report regardless of block state. Admin only.
    pub async fn all_reports_for_admin(&self) -> Result<Vec<CrimeReport>, ApiError> {
        let url = self.api_url("admin/crime-reports");
        let response = self.authorize(self.client.get(url)).send().await?;
        decode(response).await
    }

    /// Flip a report's block flag. Admin only.
    pub async fn set_report_blocked(
        &self,
        report_id: &Uuid,
        block: &BlockRequest,
    ) -> Result<Ack, ApiError> {
        let url = self.api_url(&format!("admin/crime-reports/{report_id}/block"));
        let response = self
            .authorize(self.client.put(url))
            .json(block)
            .send()
            .await?;
        decode(response).await
    }
}
