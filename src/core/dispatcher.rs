use crate::core::pipeline::ReplyPipeline;
use crate::domain::ports::{ParseClient, ReplySender, TokenProvider};
use crate::messaging::{parse_events, verify_signature};
use crate::utils::error::{BotError, Result};

/// Per-request outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub replied: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct WebhookDispatcher<T: TokenProvider, P: ParseClient, R: ReplySender> {
    channel_secret: String,
    pipeline: ReplyPipeline<T, P>,
    replies: R,
}

impl<T: TokenProvider, P: ParseClient, R: ReplySender> WebhookDispatcher<T, P, R> {
    pub fn new(channel_secret: impl Into<String>, pipeline: ReplyPipeline<T, P>, replies: R) -> Self {
        Self {
            channel_secret: channel_secret.into(),
            pipeline,
            replies,
        }
    }

    /// Verify, decode and answer one webhook delivery.
    ///
    /// Only signature and payload problems surface as `Err`. Failures while
    /// answering an individual event are logged and counted, and the rest of
    /// the batch still runs.
    pub async fn handle_callback(
        &self,
        signature: Option<&str>,
        body: &[u8],
    ) -> Result<DispatchSummary> {
        let signature = signature.ok_or(BotError::InvalidSignature)?;
        if !verify_signature(body, signature, &self.channel_secret) {
            return Err(BotError::InvalidSignature);
        }

        let events = parse_events(body)?;
        tracing::debug!("Received {} webhook events", events.len());

        let mut summary = DispatchSummary::default();
        for event in &events {
            let Some((reply_token, text)) = event.as_text_message() else {
                tracing::debug!("Ignoring non-text event: {:?}", event);
                summary.skipped += 1;
                continue;
            };

            let reply = match self.pipeline.run(text).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!("Failed to analyze message: {}", e);
                    summary.failed += 1;
                    continue;
                }
            };

            if let Err(e) = self.replies.reply_text(reply_token, &reply).await {
                tracing::warn!("Failed to send reply: {}", e);
                summary.failed += 1;
                continue;
            }

            summary.replied += 1;
        }

        Ok(summary)
    }
}
