// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LesewerkError, Result};
use crate::types::{DEFAULT_FONT_FAMILY, FontSize, FormattingState};

/// Persistent viewer settings, owned by the desktop shell.
///
/// These are startup defaults only. Formatting chosen while the viewer is
/// running is never written back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding `text-detection.rten` and `text-recognition.rten`.
    /// `None` uses the ocrs cache directory.
    pub ocr_model_dir: Option<PathBuf>,
    /// Font family the document starts with.
    pub startup_font_family: String,
    /// Font size the document starts with.
    pub startup_font_size: FontSize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            ocr_model_dir: None,
            startup_font_family: DEFAULT_FONT_FAMILY.to_string(),
            startup_font_size: FontSize::DEFAULT,
        }
    }
}

impl ViewerConfig {
    /// Formatting the initial document is created with.
    ///
    /// Colours always start unset.
    pub fn startup_formatting(&self) -> Result<FormattingState> {
        let family = self.startup_font_family.trim();
        if family.is_empty() {
            return Err(LesewerkError::Config(
                "startup_font_family must not be empty".into(),
            ));
        }
        Ok(FormattingState {
            font_family: family.to_string(),
            font_size: self.startup_font_size,
            ..FormattingState::default()
        })
    }
}
