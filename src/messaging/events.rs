//! Inbound LINE webhook payload.
//!
//! Only the parts the bot acts on are modelled. Unknown event and message
//! types decode to `Other` variants instead of failing the whole batch.

use crate::utils::error::{BotError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        // Absent for events received in standby mode
        #[serde(default)]
        reply_token: Option<String>,
        message: Message,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
    Text {
        #[serde(default)]
        id: String,
        text: String,
    },
    #[serde(other)]
    Other,
}

impl Event {
    /// `(reply_token, text)` when this is a text message event.
    pub fn as_text_message(&self) -> Option<(&str, &str)> {
        match self {
            Event::Message {
                reply_token: Some(reply_token),
                message: Message::Text { text, .. },
            } => Some((reply_token.as_str(), text.as_str())),
            _ => None,
        }
    }
}

pub fn parse_events(body: &[u8]) -> Result<Vec<Event>> {
    let payload: WebhookPayload =
        serde_json::from_slice(body).map_err(|e| BotError::MalformedPayload {
            message: e.to_string(),
        })?;
    Ok(payload.events)
}
