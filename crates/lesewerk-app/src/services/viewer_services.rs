// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration, builds the OCR backend once,
// and hands out what the Dioxus UI needs to open documents.
//
// The OCR engine is shared behind an `Arc` so recognition can run on a
// blocking worker thread while the UI stays responsive.

use std::path::Path;
use std::sync::Arc;

use lesewerk_core::ViewerConfig;
use lesewerk_core::error::{LesewerkError, RecognitionStage, Result};
use lesewerk_document::{Document, TextExtractor, ViewerSession};
use tracing::{info, warn};

use super::data_dir;

/// Shared services accessible from all components via
/// `use_context::<ViewerServices>()`.
///
/// Cheap to clone; all fields are reference-counted or small.
#[derive(Clone)]
pub struct ViewerServices {
    extractor: Option<Arc<dyn TextExtractor>>,
    /// Why `extractor` is `None`, for the status line.
    ocr_unavailable: Option<String>,
    config: Arc<ViewerConfig>,
}

impl ViewerServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// Never fails: a broken config falls back to defaults and a missing OCR
    /// backend only disables image opening.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising viewer services");

        let config = match load_config(&dir) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = ViewerConfig::default();
                if let Err(e) = persist_config(&dir, &config) {
                    warn!(error = %e, "could not write default config");
                }
                config
            }
            Err(e) => {
                warn!(error = %e, "config unreadable, using defaults");
                ViewerConfig::default()
            }
        };

        Self::with_config(config)
    }

    /// Build services from an explicit config (tests, alternative shells).
    pub fn with_config(config: ViewerConfig) -> Self {
        let (extractor, ocr_unavailable) = match build_extractor(&config) {
            Ok(extractor) => {
                info!(engine = extractor.name(), "OCR backend ready");
                (Some(extractor), None)
            }
            Err(e) => {
                warn!(error = %e, "OCR backend unavailable, image opening disabled");
                (None, Some(e.to_string()))
            }
        };

        Self {
            extractor,
            ocr_unavailable,
            config: Arc::new(config),
        }
    }

    // -- Session -------------------------------------------------------------

    /// A fresh session using the configured startup font.
    pub fn new_session(&self) -> ViewerSession {
        let formatting = match self.config.startup_formatting() {
            Ok(formatting) => formatting,
            Err(e) => {
                warn!(error = %e, "invalid startup formatting, using defaults");
                Default::default()
            }
        };
        ViewerSession::new(Document::with_formatting(formatting))
    }

    // -- OCR -----------------------------------------------------------------

    /// The shared text extractor.
    ///
    /// # Errors
    ///
    /// [`LesewerkError::RecognitionFailure`] when no backend could be built.
    pub fn extractor(&self) -> Result<Arc<dyn TextExtractor>> {
        match &self.extractor {
            Some(extractor) => Ok(Arc::clone(extractor)),
            None => Err(LesewerkError::recognition(
                RecognitionStage::Setup,
                self.ocr_unavailable
                    .clone()
                    .unwrap_or_else(|| "no OCR backend configured".into()),
            )),
        }
    }

    pub fn ocr_ready(&self) -> bool {
        self.extractor.is_some()
    }

    // -- Config --------------------------------------------------------------

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}

#[cfg(feature = "ocr")]
fn build_extractor(config: &ViewerConfig) -> Result<Arc<dyn TextExtractor>> {
    use lesewerk_document::scan::ocr::{OcrConfig, OcrEngine};

    let ocr_config = match &config.ocr_model_dir {
        Some(dir) => OcrConfig::from_dir(dir),
        None => OcrConfig::default(),
    };
    Ok(Arc::new(OcrEngine::new(ocr_config)?))
}

#[cfg(not(feature = "ocr"))]
fn build_extractor(_config: &ViewerConfig) -> Result<Arc<dyn TextExtractor>> {
    Err(LesewerkError::recognition(
        RecognitionStage::Setup,
        "this build was compiled without the `ocr` feature",
    ))
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

/// `Ok(None)` when no config file exists yet.
fn load_config(data_dir: &Path) -> Result<Option<ViewerConfig>> {
    let path = data_dir.join(CONFIG_FILE);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

fn persist_config(data_dir: &Path, config: &ViewerConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig {
            startup_font_family: "Monospace".into(),
            ..ViewerConfig::default()
        };
        persist_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), Some(config));
    }

    #[test]
    fn corrupt_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(LesewerkError::Serialization(_))
        ));
    }

    #[test]
    fn session_starts_with_configured_font() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig {
            startup_font_family: "Serif".into(),
            ocr_model_dir: Some(dir.path().join("no-models-here")),
            ..ViewerConfig::default()
        };
        let svc = ViewerServices::with_config(config);

        let session = svc.new_session();
        assert!(session.document().is_empty());
        assert_eq!(session.document().formatting().font_family, "Serif");
    }

    #[test]
    fn missing_models_disable_ocr_with_recognition_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig {
            ocr_model_dir: Some(dir.path().join("no-models-here")),
            ..ViewerConfig::default()
        };
        let svc = ViewerServices::with_config(config);

        assert!(!svc.ocr_ready());
        assert!(matches!(
            svc.extractor(),
            Err(LesewerkError::RecognitionFailure {
                stage: RecognitionStage::Setup,
                ..
            })
        ));
    }
}
