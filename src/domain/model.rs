use serde::{Deserialize, Serialize};

/// Client credentials for the NLP provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Short-lived bearer token. Fetched fresh for every message.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
}

pub const PARSE_TYPE_DEFAULT: &str = "default";

#[derive(Debug, Clone, Serialize)]
pub struct ParseRequest<'a> {
    pub sentence: &'a str,
    #[serde(rename = "type")]
    pub parse_type: &'static str,
}

impl<'a> ParseRequest<'a> {
    pub fn new(sentence: &'a str) -> Self {
        Self {
            sentence,
            parse_type: PARSE_TYPE_DEFAULT,
        }
    }
}

/// Decoded parse response. Groups and tokens keep upstream order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParseResult {
    #[serde(default)]
    pub result: Vec<TokenGroup>,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenGroup {
    #[serde(default)]
    pub tokens: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub kana: String,
    pub pos: String,
}

impl Token {
    pub fn new(kana: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            kana: kana.into(),
            pos: pos.into(),
        }
    }
}

impl ParseResult {
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            result: vec![TokenGroup { tokens }],
            ..Default::default()
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.result.iter().flat_map(|group| group.tokens.iter())
    }
}
