// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ocrs-backed text extractor.
//
// Needs `text-detection.rten` and `text-recognition.rten` in one directory,
// by default the ocrs cache (`$XDG_CACHE_HOME/ocrs` or `~/.cache/ocrs`).
// Running `ocrs-cli` on any image once fills that cache.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use lesewerk_core::error::{LesewerkError, RecognitionStage, Result};
use ocrs::{ImageSource, OcrEngine as OcrsEngine, OcrEngineParams};
use rten::Model;
use tracing::{debug, info, instrument};

use super::TextExtractor;
use crate::source::image::load_raster;

fn default_model_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("ocrs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".cache").join("ocrs")
    } else {
        PathBuf::from("ocrs-models")
    }
}

const DETECTION_MODEL: &str = "text-detection.rten";
const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// Model locations for an [`OcrEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::from_dir(default_model_dir())
    }
}

impl OcrConfig {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            detection_model: dir.join(DETECTION_MODEL),
            recognition_model: dir.join(RECOGNITION_MODEL),
        }
    }

    /// A missing model is a recognition failure, not a problem with the
    /// user's image.
    pub fn validate(&self) -> Result<()> {
        for (kind, path) in self.models() {
            if !path.is_file() {
                return Err(LesewerkError::recognition(
                    RecognitionStage::Setup,
                    format!(
                        "{kind} model not found at {}; run `ocrs-cli` once to download models",
                        path.display()
                    ),
                ));
            }
        }
        Ok(())
    }

    fn models(&self) -> [(&'static str, &Path); 2] {
        [
            ("detection", self.detection_model.as_path()),
            ("recognition", self.recognition_model.as_path()),
        ]
    }
}

/// Loaded detection and recognition models. Build once, share via `Arc`.
pub struct OcrEngine {
    engine: OcrsEngine,
}

impl OcrEngine {
    /// # Errors
    ///
    /// [`LesewerkError::RecognitionFailure`] if either model is missing or
    /// will not load.
    #[instrument(skip_all, fields(
        detection = %config.detection_model.display(),
        recognition = %config.recognition_model.display(),
    ))]
    pub fn new(config: OcrConfig) -> Result<Self> {
        config.validate()?;

        let [detection, recognition] = config.models().map(|(kind, path)| load_model(path, kind));
        let params = OcrEngineParams {
            detection_model: Some(detection?),
            recognition_model: Some(recognition?),
            ..Default::default()
        };
        let engine = OcrsEngine::new(params)
            .map_err(|err| ocr_failure(RecognitionStage::Setup, "engine setup", err))?;

        info!("ocrs models loaded");
        Ok(Self { engine })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(OcrConfig::default())
    }

    pub fn from_model_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(OcrConfig::from_dir(dir))
    }

    /// Text of a decoded image, line breaks as the engine produced them.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn recognize_image(&self, image: &DynamicImage) -> Result<String> {
        let pixels = image.to_rgb8();
        let source = ImageSource::from_bytes(pixels.as_raw(), pixels.dimensions())
            .map_err(|err| ocr_failure(RecognitionStage::Engine, "pixel layout", err))?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|err| ocr_failure(RecognitionStage::Engine, "preprocessing", err))?;
        let text = self
            .engine
            .get_text(&input)
            .map_err(|err| ocr_failure(RecognitionStage::Engine, "recognition", err))?;

        debug!(lines = text.lines().count(), "image recognised");
        Ok(text)
    }
}

impl TextExtractor for OcrEngine {
    fn name(&self) -> &'static str {
        "ocrs"
    }

    #[instrument(skip_all, fields(path = %image_path.display()))]
    fn extract(&self, image_path: &Path) -> Result<String> {
        let image = load_raster(image_path)?;
        self.recognize_image(&image)
    }
}

fn load_model(path: &Path, kind: &str) -> Result<Model> {
    Model::load_file(path).map_err(|err| {
        ocr_failure(
            RecognitionStage::Setup,
            &format!("{kind} model {}", path.display()),
            err,
        )
    })
}

fn ocr_failure(stage: RecognitionStage, what: &str, err: impl std::fmt::Display) -> LesewerkError {
    LesewerkError::recognition(stage, format!("OCR {what} failed: {err}"))
}

/// Whether the default model cache is populated.
pub fn models_available() -> bool {
    OcrConfig::default().validate().is_ok()
}
