//! Operator authentication
//!
//! A single operator account configured from the environment: email plus an
//! argon2 PHC hash. Sign-in verifies the credential and issues an HS256
//! session token; sign-out is client-side token disposal, so there is no
//! server-side session state.

pub mod jwt;
pub mod password;

use tracing::{info, warn};

use crate::types::{Result, VitrineError};

pub use jwt::{extract_token_from_header, Claims, JwtValidator};
pub use password::{hash_password, verify_password};

/// The configured operator credential
#[derive(Debug, Clone)]
pub struct Operator {
    pub email: String,
    /// PHC-formatted argon2 hash
    pub password_hash: String,
}

/// Verifies operator credentials and validates session tokens
pub struct Authenticator {
    operator: Option<Operator>,
    jwt: JwtValidator,
}

impl Authenticator {
    pub fn new(operator: Option<Operator>, jwt: JwtValidator) -> Self {
        if operator.is_none() {
            warn!("No operator account configured - sign-in is disabled");
        }
        Self { operator, jwt }
    }

    /// Verify a credential pair and issue a session token
    pub fn sign_in(&self, email: &str, password: &str) -> Result<String> {
        let operator = self
            .operator
            .as_ref()
            .ok_or_else(|| VitrineError::Unauthorized("sign-in is not configured".into()))?;

        if !email.eq_ignore_ascii_case(&operator.email)
            || !verify_password(password, &operator.password_hash)?
        {
            return Err(VitrineError::Unauthorized("invalid credentials".into()));
        }

        let token = self.jwt.generate_token(&operator.email)?;
        info!(email = %operator.email, "operator signed in");
        Ok(token)
    }

    /// Validate a session token and return its claims
    pub fn session(&self, token: &str) -> Result<Claims> {
        self.jwt.verify_token(token)
    }
}
