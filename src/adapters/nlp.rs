use crate::config::NlpEndpoints;
use crate::domain::model::{
    AccessToken, Credentials, ParseRequest, ParseResult, TokenRequest, TokenResponse,
};
use crate::domain::ports::{ParseClient, TokenProvider};
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};

const GRANT_TYPE: &str = "client_credentials";

/// HTTP client for the COTOHA token and parse endpoints.
#[derive(Debug, Clone)]
pub struct CotohaClient {
    client: Client,
    endpoints: NlpEndpoints,
}

impl CotohaClient {
    pub fn new(endpoints: NlpEndpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(client: Client, endpoints: NlpEndpoints) -> Self {
        Self { client, endpoints }
    }
}

async fn ensure_success(service: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(BotError::UpstreamError {
        service,
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TokenProvider for CotohaClient {
    async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let body = TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
        };

        tracing::debug!("Requesting access token from: {}", self.endpoints.token_endpoint);
        let response = self
            .client
            .post(&self.endpoints.token_endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("charset", "UTF-8")
            .json(&body)
            .send()
            .await?;

        tracing::debug!("Token response status: {}", response.status());
        let response = ensure_success("cotoha-token", response).await?;

        let token: TokenResponse = serde_json::from_slice(&response.bytes().await?)?;
        if token.access_token.is_empty() {
            return Err(BotError::UpstreamError {
                service: "cotoha-token",
                status: 200,
                message: "empty access_token in response".to_string(),
            });
        }

        Ok(AccessToken::new(token.access_token))
    }
}

#[async_trait]
impl ParseClient for CotohaClient {
    async fn parse(&self, sentence: &str, token: &AccessToken) -> Result<ParseResult> {
        tracing::debug!("Sending parse request to: {}", self.endpoints.parse_endpoint);
        let response = self
            .client
            .post(&self.endpoints.parse_endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("charset", "UTF-8")
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .json(&ParseRequest::new(sentence))
            .send()
            .await?;

        tracing::debug!("Parse response status: {}", response.status());
        let response = ensure_success("cotoha-parse", response).await?;

        let result: ParseResult = serde_json::from_slice(&response.bytes().await?)?;

        // The API reports some failures in-band with a 200
        if result.status != 0 {
            return Err(BotError::UpstreamError {
                service: "cotoha-parse",
                status: 200,
                message: format!("status {}: {}", result.status, result.message),
            });
        }

        Ok(result)
    }
}
