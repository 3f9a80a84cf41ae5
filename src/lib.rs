pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod messaging;
pub mod server;
pub mod utils;

pub use adapters::{CotohaClient, LineClient};
pub use config::BotConfig;
pub use crate::core::{dispatcher::WebhookDispatcher, filter::WordFilter, pipeline::ReplyPipeline};
pub use utils::error::{BotError, Result};

use std::sync::Arc;

pub type LineKanaDispatcher = WebhookDispatcher<CotohaClient, CotohaClient, LineClient>;

/// Wire the production clients from `config`.
pub fn build_dispatcher(config: &BotConfig) -> Arc<LineKanaDispatcher> {
    let cotoha = CotohaClient::new(config.nlp_endpoints());
    let pipeline = ReplyPipeline::new(cotoha.clone(), cotoha, config.credentials());
    let replies = LineClient::new(config.line_api_base.clone(), config.channel_token.clone());

    Arc::new(WebhookDispatcher::new(
        config.channel_secret.clone(),
        pipeline,
        replies,
    ))
}
