//! Shared types for Vitrine

pub mod error;

pub use error::{Result, VitrineError};
