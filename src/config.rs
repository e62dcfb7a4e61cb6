//! Configuration for Vitrine
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

use crate::contact::RelayConfig;
use crate::store::PostgrestConfig;

/// Vitrine - portfolio content gateway
#[derive(Parser, Debug, Clone)]
#[command(name = "vitrine")]
#[command(about = "Content gateway serving portfolio data with static fallbacks")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Base URL of the hosted content store (e.g. https://xyz.supabase.co)
    /// When unset, static defaults are served and admin writes are disabled
    #[arg(long, env = "CONTENT_API_URL")]
    pub content_api_url: Option<String>,

    /// Anon API key for the hosted content store
    #[arg(long, env = "CONTENT_API_KEY")]
    pub content_api_key: Option<String>,

    /// Request timeout in milliseconds for outbound store/relay calls
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "10000")]
    pub request_timeout_ms: u64,

    /// API key for the email notification relay
    #[arg(long, env = "RELAY_API_KEY")]
    pub relay_api_key: Option<String>,

    /// Sender address for contact notifications (verified domain)
    #[arg(long, env = "CONTACT_FROM", default_value = "noreply@example.com")]
    pub contact_from: String,

    /// Operator address that receives contact notifications
    #[arg(long, env = "CONTACT_EMAIL")]
    pub contact_email: Option<String>,

    /// Operator account email for admin sign-in
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// Argon2 PHC hash of the operator password
    #[arg(long, env = "ADMIN_PASSWORD_HASH")]
    pub admin_password_hash: Option<String>,

    /// JWT secret for session tokens (required in production)
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: Option<String>,

    /// JWT token expiry in seconds
    #[arg(long, env = "JWT_EXPIRY_SECONDS", default_value = "3600")]
    pub jwt_expiry_seconds: u64,

    /// Enable development mode (in-memory store, insecure JWT secret,
    /// admin routes without auth)
    #[arg(long, env = "DEV_MODE", default_value = "false")]
    pub dev_mode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Whether the remote content store is fully configured
    pub fn store_configured(&self) -> bool {
        self.postgrest_config().is_complete()
    }

    pub fn postgrest_config(&self) -> PostgrestConfig {
        PostgrestConfig {
            url: self.content_api_url.clone(),
            api_key: self.content_api_key.clone(),
            timeout_ms: self.request_timeout_ms,
        }
    }

    /// Relay settings, when both the key and recipient are present
    pub fn relay_config(&self) -> Option<RelayConfig> {
        match (&self.relay_api_key, &self.contact_email) {
            (Some(api_key), Some(to)) if !api_key.is_empty() && !to.is_empty() => {
                Some(RelayConfig {
                    api_key: api_key.clone(),
                    from: self.contact_from.clone(),
                    to: to.clone(),
                    endpoint: None,
                    timeout_ms: self.request_timeout_ms,
                })
            }
            _ => None,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.dev_mode {
            if self.jwt_secret.is_none() {
                return Err("JWT_SECRET is required in production mode".to_string());
            }
            if self.admin_email.is_some() != self.admin_password_hash.is_some() {
                return Err(
                    "ADMIN_EMAIL and ADMIN_PASSWORD_HASH must be set together".to_string()
                );
            }
        }

        if self.content_api_url.is_some() != self.content_api_key.is_some() {
            return Err(
                "CONTENT_API_URL and CONTENT_API_KEY must be set together".to_string(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["vitrine"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_parse() {
        let args = args(&["--dev-mode"]);
        assert_eq!(args.listen.port(), 8080);
        assert_eq!(args.request_timeout_ms, 10_000);
        assert!(!args.store_configured());
        assert!(args.relay_config().is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn production_requires_jwt_secret() {
        assert!(args(&[]).validate().is_err());
        assert!(args(&["--jwt-secret", "a-secret-that-is-long-enough-123456"])
            .validate()
            .is_ok());
    }

    #[test]
    fn store_config_must_be_complete() {
        let partial = args(&["--dev-mode", "--content-api-url", "https://xyz.supabase.co"]);
        assert!(partial.validate().is_err());

        let complete = args(&[
            "--dev-mode",
            "--content-api-url",
            "https://xyz.supabase.co",
            "--content-api-key",
            "anon",
        ]);
        assert!(complete.validate().is_ok());
        assert!(complete.store_configured());
    }

    #[test]
    fn relay_needs_key_and_recipient() {
        let only_key = args(&["--dev-mode", "--relay-api-key", "re_123"]);
        assert!(only_key.relay_config().is_none());

        let both = args(&[
            "--dev-mode",
            "--relay-api-key",
            "re_123",
            "--contact-email",
            "ops@example.com",
        ]);
        let relay = both.relay_config().unwrap();
        assert_eq!(relay.to, "ops@example.com");
    }
}
