use crate::domain::model::{AccessToken, Credentials, ParseResult};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken>;
}

#[async_trait]
pub trait ParseClient: Send + Sync {
    async fn parse(&self, sentence: &str, token: &AccessToken) -> Result<ParseResult>;
}

/// Outbound half of the messaging platform.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<()>;
}
