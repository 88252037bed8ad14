// ABOUTME: Unified error handling for the plan compiler with structured error codes
// ABOUTME: Defines ErrorCode, AppError, and AppResult used at input-validation seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! The plan compiler absorbs most abnormal input with documented defaults
//! (missing personal bests fall back to the standard fatigue exponent,
//! unparseable durations fall back to per-type defaults, missing heart-rate
//! data yields `None` zones). Errors are reserved for true contract
//! violations at the API boundary: unknown enum strings, out-of-range RPE,
//! and similar caller mistakes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Numeric value outside its documented range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Internal invariant violation (should never surface to callers)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Stable string form of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application error with a structured code and a human-readable message
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;
