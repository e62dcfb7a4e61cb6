//! Admin endpoints - working-set CRUD, profile, message inbox
//!
//! Every route here is bearer-gated in production; dev mode skips the gate.
//! Working-set saves are whole-set submissions: the client sends the full
//! ordered record list, records without an id are treated as pending, and
//! the response carries the reconciliation report plus the re-read set.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::{Method, Request, Response, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::auth::extract_token_from_header;
use crate::content::storage::{
    ExperienceRow, ProfileRow, ProjectRow, SkillRow, SocialLinkRow, StatRow, TechCategoryRow,
};
use crate::editor::{EditableRecord, Editor, IncomingRecord, MessageInbox, ProfileEditor, RecordId};
use crate::routes::{error_response, json_response, not_found_response};
use crate::server::AppState;
use crate::types::{Result, VitrineError};

/// Dispatch one slug to a monomorphic handler over its row type
macro_rules! dispatch_kind {
    ($slug:expr, $path:expr, $handler:ident($($arg:expr),*)) => {
        match $slug {
            "stats" => $handler::<StatRow>($($arg),*).await,
            "experiences" => $handler::<ExperienceRow>($($arg),*).await,
            "skills" => $handler::<SkillRow>($($arg),*).await,
            "tech-categories" => $handler::<TechCategoryRow>($($arg),*).await,
            "projects" => $handler::<ProjectRow>($($arg),*).await,
            "social-links" => $handler::<SocialLinkRow>($($arg),*).await,
            _ => not_found_response($path),
        }
    };
}

/// Handle any /admin/* request
pub async fn handle_admin_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .map(String::from);

    if let Err(e) = authorize(&state, auth_header.as_deref()) {
        return error_response(e);
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let body = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(e) => {
            return error_response(VitrineError::BadRequest(format!(
                "failed to read request body: {}",
                e
            )))
        }
    };

    match (&method, path.as_str()) {
        (&Method::GET, "/admin/profile") => get_profile(&state).await,
        (&Method::PUT, "/admin/profile") => put_profile(&state, &body).await,

        (&Method::GET, "/admin/messages") => list_messages(&state).await,
        (&Method::PUT, p) if p.starts_with("/admin/messages/") && p.ends_with("/read") => {
            let id = p
                .strip_prefix("/admin/messages/")
                .and_then(|s| s.strip_suffix("/read"))
                .unwrap_or("");
            mark_message_read(&state, id).await
        }
        (&Method::DELETE, p) if p.starts_with("/admin/messages/") => {
            let id = p.strip_prefix("/admin/messages/").unwrap_or("");
            delete_message(&state, id).await
        }

        (&Method::GET, p) if p.starts_with("/admin/content/") => {
            let slug = p.strip_prefix("/admin/content/").unwrap_or("");
            dispatch_kind!(slug, p, get_working_set(&state))
        }
        (&Method::PUT, p) if p.starts_with("/admin/content/") => {
            let slug = p.strip_prefix("/admin/content/").unwrap_or("");
            dispatch_kind!(slug, p, save_working_set(&state, &body))
        }
        (&Method::DELETE, p) if p.starts_with("/admin/content/") => {
            let rest = p.strip_prefix("/admin/content/").unwrap_or("");
            match rest.split_once('/') {
                Some((slug, id)) if !id.is_empty() => {
                    dispatch_kind!(slug, p, delete_record(&state, id))
                }
                _ => not_found_response(p),
            }
        }

        _ => not_found_response(&path),
    }
}

/// Bearer gate. Dev mode skips authentication entirely.
fn authorize(state: &AppState, auth_header: Option<&str>) -> Result<()> {
    if state.args.dev_mode {
        return Ok(());
    }
    let token = extract_token_from_header(auth_header)
        .ok_or_else(|| VitrineError::Unauthorized("missing bearer token".into()))?;
    state.auth.session(token)?;
    Ok(())
}

fn set_payload<R: EditableRecord>(editor: &Editor<R>) -> Result<Vec<Value>> {
    editor.records().iter().map(|r| r.to_value()).collect()
}

/// GET /admin/content/{kind} - the raw working set with wire ids
async fn get_working_set<R: EditableRecord>(state: &AppState) -> Response<Full<Bytes>> {
    let mut editor: Editor<R> = Editor::new(state.store.clone());
    if let Err(e) = editor.load().await {
        return error_response(e);
    }
    match set_payload(&editor) {
        Ok(records) => json_response(StatusCode::OK, &records),
        Err(e) => error_response(e),
    }
}

/// PUT /admin/content/{kind} - whole-set save reconciliation
async fn save_working_set<R: EditableRecord>(
    state: &AppState,
    body: &Bytes,
) -> Response<Full<Bytes>> {
    let incoming: Vec<IncomingRecord<R>> = match serde_json::from_slice(body) {
        Ok(incoming) => incoming,
        Err(e) => return error_response(VitrineError::from(e)),
    };

    let mut editor: Editor<R> = Editor::new(state.store.clone());
    editor.restore(incoming);

    match editor.save().await {
        Ok(report) => match set_payload(&editor) {
            Ok(records) => json_response(
                StatusCode::OK,
                &json!({ "report": report, "records": records }),
            ),
            Err(e) => error_response(e),
        },
        Err(e) => error_response(e),
    }
}

/// DELETE /admin/content/{kind}/{id}
async fn delete_record<R: EditableRecord>(state: &AppState, id: &str) -> Response<Full<Bytes>> {
    let mut editor: Editor<R> = Editor::new(state.store.clone());
    match editor.remove(&RecordId::Persisted(id.to_string())).await {
        Ok(_) => json_response(StatusCode::OK, &json!({ "deleted": true })),
        Err(e) => error_response(e),
    }
}

async fn get_profile(state: &AppState) -> Response<Full<Bytes>> {
    let mut editor = ProfileEditor::new(state.store.clone());
    if let Err(e) = editor.load().await {
        return error_response(e);
    }
    match editor.record() {
        Some(row) => json_response(StatusCode::OK, row),
        None => error_response(VitrineError::NotFound("profile record".into())),
    }
}

async fn put_profile(state: &AppState, body: &Bytes) -> Response<Full<Bytes>> {
    let row: ProfileRow = match serde_json::from_slice(body) {
        Ok(row) => row,
        Err(e) => return error_response(VitrineError::from(e)),
    };

    let mut editor = ProfileEditor::new(state.store.clone());
    let saved = async {
        editor.load().await?;
        editor.replace(row)?;
        editor.save().await
    }
    .await;

    match saved {
        Ok(()) => json_response(StatusCode::OK, &json!({ "saved": true })),
        Err(e) => error_response(e),
    }
}

async fn list_messages(state: &AppState) -> Response<Full<Bytes>> {
    match MessageInbox::new(state.store.clone()).list().await {
        Ok(messages) => json_response(StatusCode::OK, &messages),
        Err(e) => error_response(e),
    }
}

async fn mark_message_read(state: &AppState, id: &str) -> Response<Full<Bytes>> {
    match MessageInbox::new(state.store.clone()).mark_read(id).await {
        Ok(()) => json_response(StatusCode::OK, &json!({ "read": true })),
        Err(e) => error_response(e),
    }
}

async fn delete_message(state: &AppState, id: &str) -> Response<Full<Bytes>> {
    match MessageInbox::new(state.store.clone()).delete(id).await {
        Ok(()) => json_response(StatusCode::OK, &json!({ "deleted": true })),
        Err(e) => error_response(e),
    }
}
