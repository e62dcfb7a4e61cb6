//! Public content endpoints
//!
//! Resolution never fails from the caller's perspective: a broken or empty
//! store produces the static defaults with a `source` marker, so these
//! handlers always answer 200 for known kinds.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use crate::content::ContentKind;
use crate::routes::{json_response, not_found_response};
use crate::server::AppState;

/// GET /api/content - the full resolved portfolio document
pub async fn handle_content(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let content = state.resolver.all().await;
    json_response(StatusCode::OK, &content)
}

/// GET /api/content/{kind} - one resolved content kind
pub async fn handle_content_kind(state: Arc<AppState>, slug: &str) -> Response<Full<Bytes>> {
    let Some(kind) = ContentKind::from_slug(slug) else {
        return not_found_response(&format!("/api/content/{}", slug));
    };

    let resolver = &state.resolver;
    match kind {
        ContentKind::Profile => json_response(StatusCode::OK, &resolver.profile().await),
        ContentKind::Stat => json_response(StatusCode::OK, &resolver.stats().await),
        ContentKind::Experience => json_response(StatusCode::OK, &resolver.experiences().await),
        ContentKind::Skill => json_response(StatusCode::OK, &resolver.skills().await),
        ContentKind::TechCategory => {
            json_response(StatusCode::OK, &resolver.tech_categories().await)
        }
        ContentKind::Project => json_response(StatusCode::OK, &resolver.projects().await),
        ContentKind::SocialLink => json_response(StatusCode::OK, &resolver.social_links().await),
        ContentKind::ContactCopy => json_response(StatusCode::OK, &resolver.contact_copy()),
    }
}
