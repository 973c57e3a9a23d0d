//! HTTP bridge: one endpoint the mini-application calls to check channel
//! membership through the bot's own credential.
//!
//! `POST /check_subscription` with `{"user_id": int, "channel": string}`
//! returns `{"is_subscribed": bool}` or `{"error": string}`. All responses
//! carry permissive CORS headers.

mod subscription;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub use subscription::{SubscriptionChecker, TelegramSubscriptionChecker};

#[derive(Clone)]
struct ApiState {
    checker: Arc<dyn SubscriptionChecker>,
}

#[derive(Debug, Deserialize)]
pub struct CheckSubscriptionRequest {
    pub user_id: i64,
    pub channel: String,
}

/// Success and failure share one 200 response; the error field is untyped by
/// the documented contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckSubscriptionResponse {
    Subscribed { is_subscribed: bool },
    Failed { error: String },
}

/// Builds the bridge router with permissive CORS.
pub fn build_router(checker: Arc<dyn SubscriptionChecker>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/check_subscription", post(check_subscription))
        .layer(cors)
        .with_state(ApiState { checker })
}

async fn check_subscription(
    State(state): State<ApiState>,
    Json(req): Json<CheckSubscriptionRequest>,
) -> Json<CheckSubscriptionResponse> {
    match state.checker.is_subscribed(&req.channel, req.user_id).await {
        Ok(is_subscribed) => Json(CheckSubscriptionResponse::Subscribed { is_subscribed }),
        Err(e) => {
            warn!(
                error = %e,
                channel = %req.channel,
                user_id = req.user_id,
                "Subscription check failed"
            );
            Json(CheckSubscriptionResponse::Failed {
                error: e.to_string(),
            })
        }
    }
}

/// Binds the listener and serves the bridge until shutdown.
pub async fn serve(addr: &str, checker: Arc<dyn SubscriptionChecker>) -> anyhow::Result<()> {
    let addr: SocketAddr = addr.parse()?;
    let app = build_router(checker);

    info!("Subscription-check API listening at http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
