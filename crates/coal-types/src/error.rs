//! Error types for CoalOS.

use std::io;

/// Errors produced by the CoalOS crates.
///
/// Authentication failures are not represented here: a rejected credential is
/// an expected outcome of a shell flow, not a fault.
#[derive(Debug, thiserror::Error)]
pub enum CoalError {
    #[error("content error: {0}")]
    Content(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("launch error: {0}")]
    Launch(String),

    #[error("shell error: {0}")]
    Shell(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl CoalError {
    /// Whether this error came from the underlying terminal or file I/O.
    ///
    /// The session treats I/O failures on its own console as fatal and
    /// recovers from everything else.
    pub fn is_io(&self) -> bool {
        matches!(self, CoalError::Io(_))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CoalError>;
