//! Unified application error type.
//! All modules (core, cli, config, location) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Out of range: {distance_meters:.2} m from target (radius {radius_meters:.0} m)")]
    OutOfRange {
        distance_meters: f64,
        radius_meters: f64,
    },

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Invalid transition: cannot {operation} while session is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
