/**
 * API Client
 *
 * Queries and mutations over the request/response transport. The bearer
 * token, when held, is attached to every request; register and login
 * capture the returned token so subsequent calls carry it.
 */
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::types::{
    AuthResponse, CreateNoteRequest, CreateUserRequest, LoginRequest, Note, RegisterRequest,
    UserSummary, UserWithNotes,
};

/// Error body shape returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for queries and mutations.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            token: None,
        }
    }

    /// Carry a previously stored token (e.g. from a loaded session).
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Attach the bearer header when a token is held.
    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Users query, with each user's notes nested.
    pub async fn users(&self) -> Result<Vec<UserWithNotes>, ClientError> {
        let response = self
            .with_auth(self.http.get(self.config.api_url("/api/users")))
            .send()
            .await?;
        json_response(response).await
    }

    /// Notes query, each note with its owner joined.
    pub async fn notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self
            .with_auth(self.http.get(self.config.api_url("/api/notes")))
            .send()
            .await?;
        json_response(response).await
    }

    /// Create-user mutation (legacy unauthenticated path).
    pub async fn create_user(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<UserSummary, ClientError> {
        let request = CreateUserRequest {
            email: email.to_string(),
            name: name.map(str::to_string),
        };
        let response = self
            .with_auth(self.http.post(self.config.api_url("/api/users")))
            .json(&request)
            .send()
            .await?;
        json_response(response).await
    }

    /// Register mutation. The returned token is retained for later calls.
    pub async fn register(
        &mut self,
        email: &str,
        name: Option<&str>,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let request = RegisterRequest {
            email: email.to_string(),
            name: name.map(str::to_string),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.config.api_url("/api/auth/register"))
            .json(&request)
            .send()
            .await?;
        let auth: AuthResponse = json_response(response).await?;
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Login mutation. The returned token is retained for later calls.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.config.api_url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;
        let auth: AuthResponse = json_response(response).await?;
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Create-note mutation. Returns the owner-joined note, the same
    /// record every subscriber receives.
    pub async fn create_note(
        &self,
        title: &str,
        content: &str,
        user_id: &str,
    ) -> Result<Note, ClientError> {
        let request = CreateNoteRequest {
            title: title.to_string(),
            content: content.to_string(),
            user_id: user_id.to_string(),
        };
        let response = self
            .with_auth(self.http.post(self.config.api_url("/api/notes")))
            .json(&request)
            .send()
            .await?;
        json_response(response).await
    }

    /// Current user query (requires a token).
    pub async fn me(&self) -> Result<UserSummary, ClientError> {
        let response = self
            .with_auth(self.http.get(self.config.api_url("/api/auth/me")))
            .send()
            .await?;
        json_response(response).await
    }
}

/// Decode a response, turning non-success statuses into `ClientError::Api`
/// carrying the server's error message.
async fn json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
