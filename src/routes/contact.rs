//! Contact submission endpoint

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::contact::{ContactMessage, IntakeOutcome};
use crate::routes::{error_response, json_response};
use crate::server::AppState;
use crate::types::VitrineError;

#[derive(Serialize)]
struct ContactResponse {
    success: bool,
    #[serde(flatten)]
    outcome: IntakeOutcome,
}

/// POST /api/contact
pub async fn handle_contact(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    let body = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(e) => {
            return error_response(VitrineError::BadRequest(format!(
                "failed to read request body: {}",
                e
            )))
        }
    };

    let message: ContactMessage = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => return error_response(VitrineError::from(e)),
    };

    match state.intake.submit(message).await {
        Ok(outcome) => json_response(
            StatusCode::OK,
            &ContactResponse {
                success: true,
                outcome,
            },
        ),
        Err(e) => error_response(e),
    }
}
