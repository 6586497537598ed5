// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer session — owns the document for the lifetime of the viewer and runs
// the open-text / open-image pipelines against it.
//
// Every pipeline obtains the new text first and only then replaces the
// document content, so a failed read or a failed recognition leaves the
// previous document on screen.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use lesewerk_core::error::Result;
use tracing::{info, instrument, warn};

use crate::model::Document;
use crate::scan::TextExtractor;
use crate::source::{SourceKind, read_text_file};

/// Window title used when nothing has been opened yet.
pub const APP_TITLE: &str = "Text File Viewer";

/// Where the current document content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Nothing opened yet.
    Empty,
    TextFile {
        path: PathBuf,
        opened_at: DateTime<Utc>,
    },
    Image {
        path: PathBuf,
        opened_at: DateTime<Utc>,
        /// Name of the extractor that produced the text.
        engine: &'static str,
    },
}

impl ContentOrigin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Empty => None,
            Self::TextFile { path, .. } | Self::Image { path, .. } => Some(path),
        }
    }

    /// One-line provenance for the footer, e.g.
    /// `/scans/invoice.png · OCR (ocrs) · opened 14:02:07`.
    pub fn summary(&self) -> Option<String> {
        let (path, opened_at, source) = match self {
            Self::Empty => return None,
            Self::TextFile { path, opened_at } => (path, opened_at, "text file".to_string()),
            Self::Image {
                path,
                opened_at,
                engine,
            } => (path, opened_at, format!("OCR ({engine})")),
        };
        let opened = opened_at.with_timezone(&Local).format("%H:%M:%S");
        Some(format!("{} · {source} · opened {opened}", path.display()))
    }
}

/// The document plus the bookkeeping the shell shows around it.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    document: Document,
    origin: ContentOrigin,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl ViewerSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            origin: ContentOrigin::Empty,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for the formatting setters.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn origin(&self) -> &ContentOrigin {
        &self.origin
    }

    /// Window title: the open file's name, or just the application title.
    pub fn title(&self) -> String {
        match self
            .origin
            .path()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy())
        {
            Some(name) => format!("{name} — {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    /// Load a text file and replace the document content with it.
    ///
    /// On error the document is unchanged.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open_text(&mut self, path: &Path) -> Result<()> {
        let text = read_text_file(path).inspect_err(|err| {
            warn!(error = %err, "text open failed, keeping previous document");
        })?;
        self.document.replace_content(text);
        self.origin = ContentOrigin::TextFile {
            path: path.to_path_buf(),
            opened_at: Utc::now(),
        };
        info!("text document opened");
        Ok(())
    }

    /// Run OCR over an image and replace the document content with the result.
    ///
    /// Blocks for as long as recognition takes. On error the document is
    /// unchanged.
    #[instrument(skip_all, fields(path = %path.display(), engine = extractor.name()))]
    pub fn open_image(&mut self, extractor: &dyn TextExtractor, path: &Path) -> Result<()> {
        let text = extractor.extract(path).inspect_err(|err| {
            warn!(error = %err, "image open failed, keeping previous document");
        })?;
        self.apply_extracted(path, extractor.name(), text);
        Ok(())
    }

    /// Open `path` as text or image depending on its extension.
    pub fn open(&mut self, extractor: &dyn TextExtractor, path: &Path) -> Result<()> {
        match SourceKind::from_path(path) {
            SourceKind::Text => self.open_text(path),
            SourceKind::Image => self.open_image(extractor, path),
        }
    }

    /// Install text that was recognised elsewhere (e.g. on a worker thread).
    pub fn apply_extracted(&mut self, path: &Path, engine: &'static str, text: String) {
        self.document.replace_content(text);
        self.origin = ContentOrigin::Image {
            path: path.to_path_buf(),
            opened_at: Utc::now(),
            engine,
        };
        info!(engine, "image document opened");
    }
}
