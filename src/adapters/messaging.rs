use crate::domain::ports::ReplySender;
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: [TextMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Sends replies through the LINE Messaging API.
#[derive(Clone)]
pub struct LineClient {
    client: Client,
    api_base: String,
    channel_token: String,
}

impl LineClient {
    pub fn new(api_base: impl Into<String>, channel_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            channel_token: channel_token.into(),
        }
    }

    fn reply_url(&self) -> String {
        format!("{}/v2/bot/message/reply", self.api_base)
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<()> {
        let body = ReplyRequest {
            reply_token,
            messages: [TextMessage { kind: "text", text }],
        };

        let response = self
            .client
            .post(self.reply_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.channel_token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Reply response status: {}", status);
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BotError::UpstreamError {
                service: "line-reply",
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
