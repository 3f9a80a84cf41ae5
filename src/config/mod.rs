use crate::domain::model::Credentials;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_secret, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://api.ce-cotoha.com/v1/oauth/accesstokens";
pub const DEFAULT_PARSE_ENDPOINT: &str = "https://api.ce-cotoha.com/api/dev/nlp/v1/parse";
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";

/// Process configuration. Every field can be given as a flag or through the
/// environment variable named next to it.
#[derive(Clone, Parser)]
#[command(name = "line-kana-bot")]
#[command(about = "LINE bot that answers with the kana readings of your message")]
pub struct BotConfig {
    #[arg(long, env = "CHANNEL_SECRET", hide_env_values = true)]
    pub channel_secret: String,

    #[arg(long, env = "CHANNEL_TOKEN", hide_env_values = true)]
    pub channel_token: String,

    #[arg(long, env = "COTOHA_CLIENT_ID", hide_env_values = true)]
    pub client_id: String,

    #[arg(long, env = "COTOHA_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, env = "COTOHA_TOKEN_URL", default_value = DEFAULT_TOKEN_ENDPOINT)]
    pub token_endpoint: String,

    #[arg(long, env = "COTOHA_PARSE_URL", default_value = DEFAULT_PARSE_ENDPOINT)]
    pub parse_endpoint: String,

    #[arg(long, env = "LINE_API_BASE", default_value = DEFAULT_LINE_API_BASE)]
    pub line_api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl BotConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }

    pub fn nlp_endpoints(&self) -> NlpEndpoints {
        NlpEndpoints {
            token_endpoint: self.token_endpoint.clone(),
            parse_endpoint: self.parse_endpoint.clone(),
        }
    }
}

// Secrets stay out of debug output.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("port", &self.port)
            .field("token_endpoint", &self.token_endpoint)
            .field("parse_endpoint", &self.parse_endpoint)
            .field("line_api_base", &self.line_api_base)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish_non_exhaustive()
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validate_secret("channel_secret", &self.channel_secret)?;
        validate_secret("channel_token", &self.channel_token)?;
        validate_secret("client_id", &self.client_id)?;
        validate_secret("client_secret", &self.client_secret)?;

        validate_range("port", self.port, 1, u16::MAX)?;

        validate_url("token_endpoint", &self.token_endpoint)?;
        validate_url("parse_endpoint", &self.parse_endpoint)?;
        validate_url("line_api_base", &self.line_api_base)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

/// Where the NLP provider lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NlpEndpoints {
    pub token_endpoint: String,
    pub parse_endpoint: String,
}

impl Default for NlpEndpoints {
    fn default() -> Self {
        Self {
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            parse_endpoint: DEFAULT_PARSE_ENDPOINT.to_string(),
        }
    }
}
