//! Error types for the bot.
//!
//! [`GiveawayError`] is the top-level error; [`ContestError`] covers the
//! user-visible failure modes of the dispatcher and lifecycle operations.
//! The presentation layer maps both to user-facing text; internal details are
//! only ever logged.

use thiserror::Error;

/// Failures of lifecycle and dispatch operations with a user-visible outcome.
#[derive(Error, Debug)]
pub enum ContestError {
    #[error("a contest is already active")]
    AlreadyActive,

    #[error("no active contest")]
    NoneActive,

    #[error("unauthorized: admin-only action")]
    Unauthorized,

    #[error("malformed mini-app payload: {0}")]
    MalformedPayload(String),
}

/// Top-level error for the giveaway bot (lifecycle, storage, transport, config).
#[derive(Error, Debug)]
pub enum GiveawayError {
    #[error("contest error: {0}")]
    Contest(#[from] ContestError),

    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`GiveawayError`].
pub type Result<T> = std::result::Result<T, GiveawayError>;
