//! Vitrine - portfolio content gateway
//!
//! Serves a portfolio's content with a default-first, remote-override
//! contract: every content kind ships with a static default set, and a
//! configured remote store overrides it when (and only when) it actually
//! yields rows. Unconfigured, unreachable, or empty stores all degrade to
//! the bundled defaults, never to an error.
//!
//! ## Services
//!
//! - **Resolver**: per-kind and aggregate content resolution
//! - **Editor**: admin working sets reconciled against the remote store
//! - **Contact**: persist-then-notify submission intake
//! - **Gateway**: hyper HTTP surface with JWT-gated admin routes

pub mod auth;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod editor;
pub mod routes;
pub mod server;
pub mod store;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{Result, VitrineError};
