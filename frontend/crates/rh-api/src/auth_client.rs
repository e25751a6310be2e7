use crate::{ApiClientResult, ClientError, LoginResponse, RegisterRequest, UserPayload};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// HTTP client for the recruitment platform auth API
pub struct AuthClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl AuthClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Exchange credentials for an access token
    ///
    /// The server speaks the OAuth2 password flow, so credentials go out as
    /// a form body with the email in the `username` field.
    pub async fn login(&self, email: &str, password: &str) -> ApiClientResult<LoginResponse> {
        let url = format!("{}/api/v1/auth/login", self.base_url);
        let form = [("username", email), ("password", password)];

        debug!("POST {url}");
        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let grant: LoginResponse = serde_json::from_value(body)?;
        Ok(grant)
    }

    /// Create a new account
    pub async fn register(&self, request: &RegisterRequest) -> ApiClientResult<UserPayload> {
        let url = format!("{}/api/v1/auth/register", self.base_url);

        debug!("POST {url}");
        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let user: UserPayload = serde_json::from_value(body)?;
        Ok(user)
    }
}

#[track_caller]
fn api_error(status: u16, body: &Value) -> ClientError {
    let message = body
        .get("detail")
        .map(format_detail)
        .unwrap_or_else(|| "An unexpected error occurred".to_string());

    ClientError::Api {
        status,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Flatten the server's error envelope into a single message
///
/// `detail` is either a plain string or a list of field validation entries.
pub(crate) fn format_detail(detail: &Value) -> String {
    if let Some(text) = detail.as_str() {
        return text.to_string();
    }

    if let Some(entries) = detail.as_array() {
        let messages: Vec<String> = entries.iter().map(format_entry).collect();
        return messages.join(", ");
    }

    if let Some(text) = detail.get("msg").and_then(Value::as_str) {
        return text.to_string();
    }

    "An unexpected error occurred".to_string()
}

fn format_entry(entry: &Value) -> String {
    // Validation failures on the OAuth2 `username` field are really about
    // the email, so reword them before they reach a user.
    let field = entry
        .get("loc")
        .and_then(|loc| loc.get(1))
        .and_then(Value::as_str);
    if field == Some("username") {
        return "Email is required".to_string();
    }

    entry
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("An unexpected error occurred")
        .to_string()
}
