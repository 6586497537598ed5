// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// OCR ingestion — the capability trait any recognition backend implements,
// and the ocrs-backed engine behind the `ocr` feature.

#[cfg(feature = "ocr")]
pub mod ocr;

use std::path::Path;

use lesewerk_core::error::Result;

#[cfg(feature = "ocr")]
pub use ocr::{OcrConfig, OcrEngine};

/// Converts an image file into the text it shows.
///
/// Implementations are stateless per call and may be shared across threads,
/// so a shell can run a slow extraction off its UI thread. Calls block until
/// recognition finishes. Implementations must not retry.
pub trait TextExtractor: Send + Sync {
    /// Short backend identifier (e.g. "ocrs").
    fn name(&self) -> &'static str;

    /// Recognise the text in the image at `image_path`.
    ///
    /// The engine's own line breaks and spacing are returned untouched.
    ///
    /// # Errors
    ///
    /// - [`LesewerkError::ResourceUnavailable`](lesewerk_core::LesewerkError::ResourceUnavailable)
    ///   if the path does not name a readable file.
    /// - [`LesewerkError::RecognitionFailure`](lesewerk_core::LesewerkError::RecognitionFailure)
    ///   if the image cannot be decoded or the engine fails.
    fn extract(&self, image_path: &Path) -> Result<String>;
}
