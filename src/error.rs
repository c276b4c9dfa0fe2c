// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for edgeup
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for edgeup operations
#[derive(Error, Debug)]
pub enum EdgeupError {
    /// Portal API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors (bad settings, empty edge list)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No operator profile with the requested name is visible
    #[error("Operator profile not found: {0}")]
    ProfileNotFound(String),

    /// The profile exists but its configuration type cannot be pushed per edge
    #[error("Operator profile '{name}' is {kind}; only DEVICE_BASED profiles can be rolled out per edge")]
    UnsupportedProfile { name: String, kind: String },

    /// The enterprise id did not resolve
    #[error("Enterprise not found: {0}")]
    EnterpriseNotFound(i64),

    /// The operator declined a confirmation that gates the rest of the run
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

/// Portal-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed (bad credentials or expired session)
    #[error("Authentication failed: the portal rejected the credentials")]
    AuthenticationFailed,

    /// The portal returned a non-success HTTP status
    #[error("Portal error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The portal returned a JSON-RPC error envelope
    #[error("Portal RPC error ({code}): {message}")]
    Rpc { code: i64, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid portal response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for edgeup operations
pub type Result<T> = std::result::Result<T, EdgeupError>;

impl From<toml::de::Error> for EdgeupError {
    fn from(err: toml::de::Error) -> Self {
        EdgeupError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for EdgeupError {
    fn from(err: toml::ser::Error) -> Self {
        EdgeupError::Toml(err.to_string())
    }
}
