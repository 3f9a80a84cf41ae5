use crate::core::filter::WordFilter;
use crate::domain::model::Credentials;
use crate::domain::ports::{ParseClient, TokenProvider};
use crate::utils::error::Result;

/// Token acquisition, parse and filter for a single message.
pub struct ReplyPipeline<T: TokenProvider, P: ParseClient> {
    token_provider: T,
    parse_client: P,
    credentials: Credentials,
    filter: WordFilter,
}

impl<T: TokenProvider, P: ParseClient> ReplyPipeline<T, P> {
    pub fn new(token_provider: T, parse_client: P, credentials: Credentials) -> Self {
        Self {
            token_provider,
            parse_client,
            credentials,
            filter: WordFilter::new(),
        }
    }

    pub async fn run(&self, sentence: &str) -> Result<String> {
        // No token caching: every message pays for a fresh token
        let token = self.token_provider.acquire_token(&self.credentials).await?;
        tracing::debug!("Access token acquired");

        let parsed = self.parse_client.parse(sentence, &token).await?;
        tracing::debug!("Parsed {} tokens", parsed.tokens().count());

        Ok(self.filter.filter(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AccessToken, ParseResult, Token};
    use crate::utils::error::BotError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockTokenProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl TokenProvider for MockTokenProvider {
        async fn acquire_token(&self, credentials: &Credentials) -> Result<AccessToken> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BotError::UpstreamError {
                    service: "cotoha-token",
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(AccessToken::new(format!("{}-token-{}", credentials.client_id, n)))
        }
    }

    #[derive(Clone, Default)]
    struct MockParseClient {
        seen: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl ParseClient for MockParseClient {
        async fn parse(&self, sentence: &str, token: &AccessToken) -> Result<ParseResult> {
            self.seen
                .lock()
                .unwrap()
                .push((sentence.to_string(), token.as_str().to_string()));
            Ok(ParseResult::from_tokens(vec![
                Token::new("ネコ", "名詞"),
                Token::new("ガ", "格助詞"),
                Token::new("ナク", "動詞"),
            ]))
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            client_id: "cid".to_string(),
            client_secret: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_filters_parse_result() {
        let parse_client = MockParseClient::default();
        let pipeline = ReplyPipeline::new(
            MockTokenProvider::default(),
            parse_client.clone(),
            credentials(),
        );

        let reply = pipeline.run("猫が鳴く").await.unwrap();

        assert_eq!(reply, "ネコ..ナク");
        let seen = parse_client.seen.lock().unwrap();
        assert_eq!(seen[0], ("猫が鳴く".to_string(), "cid-token-0".to_string()));
    }

    #[tokio::test]
    async fn test_run_fetches_fresh_token_every_time() {
        let tokens = MockTokenProvider::default();
        let parse_client = MockParseClient::default();
        let pipeline = ReplyPipeline::new(tokens.clone(), parse_client.clone(), credentials());

        pipeline.run("一").await.unwrap();
        pipeline.run("二").await.unwrap();

        assert_eq!(tokens.calls.load(Ordering::SeqCst), 2);
        let seen = parse_client.seen.lock().unwrap();
        assert_eq!(seen[0].1, "cid-token-0");
        assert_eq!(seen[1].1, "cid-token-1");
    }

    #[tokio::test]
    async fn test_token_failure_skips_parse() {
        let tokens = MockTokenProvider {
            fail: true,
            ..Default::default()
        };
        let parse_client = MockParseClient::default();
        let pipeline = ReplyPipeline::new(tokens, parse_client.clone(), credentials());

        let err = pipeline.run("猫").await.unwrap_err();

        assert!(matches!(err, BotError::UpstreamError { status: 503, .. }));
        assert!(parse_client.seen.lock().unwrap().is_empty());
    }
}
