//! Proofscope Core - Context values, scope options, and error handling

pub mod config;
pub mod error;
pub mod types;

pub use config::{ScopeOptions, ScopeProfiles};
pub use error::{ConflictKind, Error, Result, CONFLICT_MESSAGE};
pub use types::*;
