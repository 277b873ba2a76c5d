use reqwest::{Response, StatusCode, header};
use serde_json::Value;
use tracing::debug;

use super::{ApiError, Credentials};

const GENERIC_ERROR: &str = "API request failed";

/// Client for the dashboard's backend REST api. Responses are the
/// backend's contract and are handed back as opaque json.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    // OAuth2 password form, like the backend's /token endpoint expects
    pub async fn login(&self, email: &str, password: &str) -> Result<Credentials, ApiError> {
        let response = self
            .http
            .post(self.url("/token"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "login rejected");
            return Err(ApiError::InvalidCredentials);
        }

        Ok(response.json::<Credentials>().await?)
    }

    pub async fn get_json(&self, endpoint: &str, credentials: &Credentials) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url(endpoint))
            .header(header::AUTHORIZATION, credentials.bearer())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        into_json(response).await
    }

    // ========== OWNER ==========

    pub async fn summary(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.get_json("/owner/dashboard/summary", credentials).await
    }

    pub async fn channels(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.get_json("/owner/channels", credentials).await
    }

    pub async fn withdrawals(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.get_json("/owner/withdrawals", credentials).await
    }

    pub async fn analytics(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.get_json("/owner/analytics", credentials).await
    }

    // ========== ADMIN ==========

    pub async fn pending_payments(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.get_json("/admin/payments/pending", credentials).await
    }

    pub async fn affiliate_ledger(
        &self,
        credentials: &Credentials,
        limit: u32,
        offset: u32,
    ) -> Result<Value, ApiError> {
        let endpoint = format!("/admin/affiliates/ledger?limit={}&offset={}", limit, offset);
        self.get_json(&endpoint, credentials).await
    }
}

async fn into_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }
    Ok(response.json().await?)
}

// backend errors carry {"detail": "..."}; anything else gets a generic message
pub fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}
