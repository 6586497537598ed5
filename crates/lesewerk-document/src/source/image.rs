// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster image loading for OCR ingestion.
//
// Only decoding happens here. No resizing, binarization or other cleanup is
// applied before the image reaches the recognition engine.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use lesewerk_core::error::{LesewerkError, RecognitionStage, Result};
use tracing::{debug, info, instrument};

/// File extensions offered in the "open image" dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp",
];

/// Raster encodings the viewer accepts for OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
    WebP,
}

impl RasterFormat {
    /// Infer the raster format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            "tif" | "tiff" => Some(Self::Tiff),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

/// Open and decode the image at `path`.
///
/// # Errors
///
/// - [`LesewerkError::ResourceUnavailable`] if the file cannot be opened or
///   read (missing, a directory, no permission).
/// - [`LesewerkError::RecognitionFailure`] if the bytes are not a decodable
///   image: unknown format, corrupt data, unsupported encoding.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_raster(path: &Path) -> Result<DynamicImage> {
    let metadata = std::fs::metadata(path).map_err(|err| unavailable(path, err))?;
    if metadata.is_dir() {
        return Err(LesewerkError::unreadable(format!(
            "{} is a directory",
            path.display()
        )));
    }

    // Content sniffing wins over the extension when both are available.
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| unavailable(path, err))?;

    let Some(format) = reader.format() else {
        return Err(LesewerkError::recognition(
            RecognitionStage::Decode,
            format!("{} is not in a recognised image format", path.display()),
        ));
    };
    debug!(?format, "image format detected");

    let img = reader.decode().map_err(|err| {
        LesewerkError::recognition(
            RecognitionStage::Decode,
            format!("failed to decode image {}: {}", path.display(), err),
        )
    })?;

    info!(width = img.width(), height = img.height(), "Image loaded");
    Ok(img)
}

fn unavailable(path: &Path, err: std::io::Error) -> LesewerkError {
    LesewerkError::unreadable(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use lesewerk_core::human_errors::humanize_error;

    #[test]
    fn extension_mapping() {
        assert_eq!(RasterFormat::from_extension("PNG"), Some(RasterFormat::Png));
        assert_eq!(RasterFormat::from_extension("jpeg"), Some(RasterFormat::Jpeg));
        assert_eq!(RasterFormat::from_extension("Gif"), Some(RasterFormat::Gif));
        assert_eq!(RasterFormat::from_extension("txt"), None);
        for ext in IMAGE_EXTENSIONS {
            assert!(RasterFormat::from_extension(ext).is_some(), "{ext}");
        }
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_raster(Path::new("/nonexistent/lesewerk/scan.png")).unwrap_err();
        assert!(matches!(err, LesewerkError::ResourceUnavailable { .. }));
    }

    #[test]
    fn directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raster(dir.path()).unwrap_err();
        assert!(matches!(err, LesewerkError::ResourceUnavailable { .. }));
    }

    #[test]
    fn corrupt_png_is_recognition_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        // PNG signature followed by garbage.
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();
        let err = load_raster(&path).unwrap_err();
        assert!(
            matches!(
                err,
                LesewerkError::RecognitionFailure { stage: RecognitionStage::Decode, .. }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn unknown_bytes_without_extension_is_recognition_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystery");
        std::fs::write(&path, b"plain words, no pixels").unwrap();
        let err = load_raster(&path).unwrap_err();
        assert!(
            matches!(
                err,
                LesewerkError::RecognitionFailure { stage: RecognitionStage::Decode, .. }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn corrupt_image_under_models_dir_is_still_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let models = dir.path().join("3d-models");
        std::fs::create_dir(&models).unwrap();
        let path = models.join("receipt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

        let err = load_raster(&path).unwrap_err();
        assert!(err.to_string().contains("3d-models"));
        assert!(matches!(
            err,
            LesewerkError::RecognitionFailure { stage: RecognitionStage::Decode, .. }
        ));
        assert_eq!(
            humanize_error(&err).message,
            "No text could be read from this image."
        );
    }

    #[test]
    fn decodes_real_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        RgbImage::from_pixel(32, 16, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let img = load_raster(&path).unwrap();
        assert_eq!((img.width(), img.height()), (32, 16));
    }
}
