// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lesewerk-document — Document model and content ingestion for the Lesewerk viewer.
//
// Provides the whole-document formatting model, plain text and raster image
// sources, the OCR capability trait (with an ocrs backend behind the `ocr`
// feature), and the session that ties them together.

pub mod model;
pub mod scan;
pub mod session;
pub mod source;

// Re-export the primary types so callers can use `lesewerk_document::Document` etc.
pub use model::{Document, DocumentState, DocumentView};
pub use scan::TextExtractor;
pub use session::{ContentOrigin, ViewerSession};
pub use source::{SourceKind, load_raster, read_text_file};

#[cfg(feature = "ocr")]
pub use scan::ocr::OcrEngine;
