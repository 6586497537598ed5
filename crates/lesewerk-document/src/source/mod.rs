// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content sources — plain text files and raster images, plus the file-type
// classification and dialog filters the shell uses to pick between them.

pub mod image;
pub mod text;

use std::path::Path;

pub use self::image::{IMAGE_EXTENSIONS, RasterFormat, load_raster};
pub use self::text::{TEXT_EXTENSIONS, read_text_file};

/// How a chosen file should be turned into document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Read the file as UTF-8 text.
    Text,
    /// Run OCR over the image.
    Image,
}

impl SourceKind {
    /// Classify by extension. Anything that is not a known image is treated
    /// as text, the same as choosing "All Files" in the open dialog.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(RasterFormat::from_extension)
            .map_or(Self::Text, |_| Self::Image)
    }
}

/// A named group of extensions for a native file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Empty means "any file".
    pub extensions: &'static [&'static str],
}

/// Filters for the "open text" dialog.
pub fn text_filters() -> Vec<FileFilter> {
    vec![
        FileFilter {
            name: "Text Files",
            extensions: TEXT_EXTENSIONS,
        },
        FileFilter {
            name: "All Files",
            extensions: &[],
        },
    ]
}

/// Filters for the "open image" dialog.
pub fn image_filters() -> Vec<FileFilter> {
    vec![FileFilter {
        name: "Images",
        extensions: IMAGE_EXTENSIONS,
    }]
}
