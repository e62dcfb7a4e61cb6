//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling and match-based routing.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::auth::{Authenticator, JwtValidator, Operator};
use crate::config::Args;
use crate::contact::{ContactIntake, NotificationRelay};
use crate::content::Resolver;
use crate::routes;
use crate::store::ContentStore;
use crate::types::{Result, VitrineError};

/// Shared application state
pub struct AppState {
    pub args: Args,
    pub store: Arc<dyn ContentStore>,
    pub resolver: Resolver,
    pub intake: ContactIntake,
    pub auth: Authenticator,
}

impl AppState {
    pub fn new(
        args: Args,
        store: Arc<dyn ContentStore>,
        relay: Option<Arc<dyn NotificationRelay>>,
    ) -> Result<Self> {
        let jwt = if args.dev_mode {
            JwtValidator::new_dev()
        } else {
            let secret = args
                .jwt_secret
                .clone()
                .ok_or_else(|| VitrineError::Config("JWT_SECRET is required".into()))?;
            JwtValidator::new(secret, args.jwt_expiry_seconds)?
        };

        let operator = match (&args.admin_email, &args.admin_password_hash) {
            (Some(email), Some(hash)) => Some(Operator {
                email: email.clone(),
                password_hash: hash.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            resolver: Resolver::new(Arc::clone(&store)),
            intake: ContactIntake::new(Arc::clone(&store), relay),
            auth: Authenticator::new(operator, jwt),
            store,
            args,
        })
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!("Vitrine listening on {}", state.args.listen);

    if state.args.dev_mode {
        warn!("Development mode enabled - admin authentication disabled");
    }
    if !state.store.is_configured() {
        info!("Remote store not configured - serving static content only");
    }

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    debug!("[{}] {} {}", addr, method, path);

    // CORS preflight
    if method == Method::OPTIONS {
        return Ok(routes::preflight_response());
    }

    let response = match (&method, path.as_str()) {
        (&Method::GET, "/health") | (&Method::GET, "/healthz") => {
            routes::health_check(Arc::clone(&state))
        }
        (&Method::GET, "/version") => routes::version_info(),

        (&Method::GET, "/api/content") => routes::handle_content(Arc::clone(&state)).await,
        (&Method::GET, p) if p.starts_with("/api/content/") => {
            let slug = p.strip_prefix("/api/content/").unwrap_or("");
            routes::handle_content_kind(Arc::clone(&state), slug).await
        }

        (&Method::POST, "/api/contact") => routes::handle_contact(Arc::clone(&state), req).await,

        (&Method::POST, "/auth/login") => routes::handle_login(Arc::clone(&state), req).await,
        (&Method::GET, "/auth/session") => {
            let auth_header = req
                .headers()
                .get("authorization")
                .and_then(|h| h.to_str().ok());
            routes::handle_session(Arc::clone(&state), auth_header)
        }

        (_, p) if p.starts_with("/admin/") => {
            routes::handle_admin_request(Arc::clone(&state), req).await
        }

        _ => routes::not_found_response(&path),
    };

    Ok(response)
}
