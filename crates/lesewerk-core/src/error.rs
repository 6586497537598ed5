// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Lesewerk.

use thiserror::Error;

/// Top-level error type for all Lesewerk operations.
///
/// None of these are fatal: every variant is reported to the caller, which
/// decides whether to surface a message. The document is never left
/// half-updated by an operation that returns one of these.
///
/// The ingestion and formatting variants carry a sub-kind so callers can
/// react without inspecting `detail`, which often embeds a user path.
#[derive(Debug, Error)]
pub enum LesewerkError {
    // -- Ingestion errors --
    #[error("resource unavailable: {detail}")]
    ResourceUnavailable { reason: Unavailable, detail: String },

    #[error("text recognition failed: {detail}")]
    RecognitionFailure {
        stage: RecognitionStage,
        detail: String,
    },

    // -- Formatting errors --
    #[error("invalid formatting value: {detail}")]
    InvalidFormattingValue {
        field: FormattingField,
        detail: String,
    },

    // -- Shell configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a file could not be turned into content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// Missing, a directory, or not permitted.
    Unreadable,
    /// Read fine but is not UTF-8 text.
    NotUtf8,
}

/// Where OCR gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStage {
    /// No usable engine: models missing or unloadable, or OCR compiled out.
    Setup,
    /// The file is not a decodable image.
    Decode,
    /// The engine ran and failed on this image.
    Engine,
}

/// Which formatting input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingField {
    FontFamily,
    FontSize,
    Color,
}

impl LesewerkError {
    pub fn unreadable(detail: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            reason: Unavailable::Unreadable,
            detail: detail.into(),
        }
    }

    pub fn not_utf8(detail: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            reason: Unavailable::NotUtf8,
            detail: detail.into(),
        }
    }

    pub fn recognition(stage: RecognitionStage, detail: impl Into<String>) -> Self {
        Self::RecognitionFailure {
            stage,
            detail: detail.into(),
        }
    }

    pub fn invalid(field: FormattingField, detail: impl Into<String>) -> Self {
        Self::InvalidFormattingValue {
            field,
            detail: detail.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LesewerkError>;
