//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Bindings
    // ---------------------------
    #[error("WorkplaceBinding not found")]
    BindingNotFound,

    #[error("already subscribed to workplace")]
    AlreadySubscribed,

    // ---------------------------
    // Attendance transitions
    // ---------------------------
    #[error("already started: end the current shift first")]
    AlreadyStarted,

    #[error("already ended: no shift in progress")]
    AlreadyEnded,

    #[error("no start record found")]
    NoPriorStart,

    #[error("attendance status changed concurrently, please retry")]
    ConcurrentUpdate,

    // ---------------------------
    // Attendance log
    // ---------------------------
    #[error("Attendance log not found: {0}")]
    NotFound(String),

    #[error("Invalid timestamp '{value}': {reason}")]
    TimestampParse { value: String, reason: String },

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    // ---------------------------
    // Config / serialization
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
