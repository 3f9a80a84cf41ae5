use crate::core::dispatcher::WebhookDispatcher;
use crate::domain::ports::{ParseClient, ReplySender, TokenProvider};
use crate::messaging::SIGNATURE_HEADER;
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn router<T, P, R>(dispatcher: Arc<WebhookDispatcher<T, P, R>>) -> Router
where
    T: TokenProvider + 'static,
    P: ParseClient + 'static,
    R: ReplySender + 'static,
{
    Router::new()
        .route("/callback", post(callback::<T, P, R>))
        .route("/health", get(|| async { "ok" }))
        .with_state(dispatcher)
}

async fn callback<T, P, R>(
    State(dispatcher): State<Arc<WebhookDispatcher<T, P, R>>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode
where
    T: TokenProvider + 'static,
    P: ParseClient + 'static,
    R: ReplySender + 'static,
{
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    match dispatcher.handle_callback(signature, &body).await {
        Ok(summary) => {
            tracing::info!(
                replied = summary.replied,
                skipped = summary.skipped,
                failed = summary.failed,
                "Webhook handled"
            );
            StatusCode::OK
        }
        Err(e) => {
            tracing::warn!("Rejected webhook: {}", e);
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Serve `app` on `0.0.0.0:port` until Ctrl-C.
pub async fn serve(app: Router, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
