use crate::core::validate::validate_inquiry;
use crate::domain::model::{InquiryReceipt, ServiceInquiry};
use crate::domain::ports::{InquirySink, SiteSettings};
use crate::http::wire::{SubmitAck, SubmitFault, SubmitRejection};
use crate::utils::error::Result;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn InquirySink>,
    pub agency_name: String,
    pub max_body_bytes: usize,
}

/// Records validated inquiries to the structured log.
pub struct LogSink;

#[async_trait]
impl InquirySink for LogSink {
    async fn record(&self, inquiry: &ServiceInquiry, receipt: &InquiryReceipt) -> Result<()> {
        tracing::info!(
            inquiry_id = %receipt.inquiry_id,
            name = %inquiry.name,
            email = %inquiry.email,
            service_category = %inquiry.service_category,
            timestamp = %receipt.timestamp.to_rfc3339(),
            "new contact form submission"
        );
        Ok(())
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/contact", post(contact_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Binds and serves until ctrl-c.
pub async fn serve(settings: &impl SiteSettings, sink: Arc<dyn InquirySink>) -> Result<()> {
    let state = AppState {
        sink,
        agency_name: settings.agency_name().to_string(),
        max_body_bytes: settings.max_body_bytes(),
    };
    let app = build_router(state);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!(
        "{} API listening on {}",
        settings.agency_name(),
        settings.bind_addr()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "message": format!("{} API is running", state.agency_name) }))
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// POST /api/contact. The body is parsed by hand so a malformed payload
/// becomes the processing-error envelope rather than a framework rejection.
async fn contact_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let candidate: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "contact submission body is not valid JSON");
            return fault_response("invalid JSON body");
        }
    };

    match validate_inquiry(&candidate) {
        Ok(inquiry) => {
            let receipt = InquiryReceipt::issue();
            if let Err(err) = state.sink.record(&inquiry, &receipt).await {
                tracing::error!(error = %err, "inquiry sink failed");
                return fault_response("inquiry could not be recorded");
            }
            (StatusCode::OK, Json(SubmitAck::new(receipt))).into_response()
        }
        Err(errors) => {
            tracing::warn!(
                violations = errors.len(),
                "contact submission failed validation"
            );
            (StatusCode::BAD_REQUEST, Json(SubmitRejection::new(errors))).into_response()
        }
    }
}

fn fault_response(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmitFault::new(detail)),
    )
        .into_response()
}
