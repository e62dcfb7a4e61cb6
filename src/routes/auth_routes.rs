//! Operator authentication endpoints
//!
//! - POST /auth/login   - verify credentials and get a session token
//! - GET  /auth/session - echo the claims of a valid token
//!
//! Sign-out is client-side token disposal; there is no logout endpoint.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::extract_token_from_header;
use crate::routes::{error_response, json_response};
use crate::server::AppState;
use crate::types::VitrineError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub email: String,
    pub issued_at: u64,
    pub expires_at: u64,
}

/// POST /auth/login
pub async fn handle_login(state: Arc<AppState>, req: Request<Incoming>) -> Response<Full<Bytes>> {
    let body = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(e) => {
            return error_response(VitrineError::BadRequest(format!(
                "failed to read request body: {}",
                e
            )))
        }
    };

    let login: LoginRequest = match serde_json::from_slice(&body) {
        Ok(login) => login,
        Err(e) => return error_response(VitrineError::from(e)),
    };

    match state.auth.sign_in(&login.email, &login.password) {
        Ok(token) => json_response(
            StatusCode::OK,
            &LoginResponse {
                token,
                expires_in: state.args.jwt_expiry_seconds,
            },
        ),
        Err(e) => error_response(e),
    }
}

/// GET /auth/session
pub fn handle_session(state: Arc<AppState>, auth_header: Option<&str>) -> Response<Full<Bytes>> {
    let Some(token) = extract_token_from_header(auth_header) else {
        return error_response(VitrineError::Unauthorized("missing bearer token".into()));
    };

    match state.auth.session(token) {
        Ok(claims) => json_response(
            StatusCode::OK,
            &SessionResponse {
                email: claims.sub,
                issued_at: claims.iat,
                expires_at: claims.exp,
            },
        ),
        Err(e) => error_response(e),
    }
}
