// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the viewer's status line.
//
// The status line never shows raw error text on its own; each variant gets a
// sentence a reader can act on.

use crate::error::{FormattingField, LesewerkError, RecognitionStage, Unavailable};

/// How the viewer should treat the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Trying again may work without changing anything.
    Transient,
    /// User must do something (pick another file, enter another value).
    ActionRequired,
    /// Retrying the same input will not help.
    Permanent,
}

/// What the status line says about a failed action.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One sentence, no error codes.
    pub message: String,
    /// Next step for the reader.
    pub suggestion: String,
    /// Severity level (drives colour in the UI).
    pub severity: Severity,
}

impl HumanError {
    fn new(message: &str, suggestion: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            severity,
        }
    }

    /// Single-line form for a status bar.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.message, self.suggestion)
    }
}

/// Convert a `LesewerkError` into a `HumanError`.
///
/// Only the error's kind decides the wording. `detail` is appended for
/// formatting errors, where it names the rejected value.
pub fn humanize_error(err: &LesewerkError) -> HumanError {
    match err {
        LesewerkError::ResourceUnavailable { reason, .. } => match reason {
            Unavailable::NotUtf8 => HumanError::new(
                "This file isn't plain text.",
                "Only UTF-8 text files can be opened as text. Try opening it as an image instead, or re-save it as UTF-8.",
                Severity::Permanent,
            ),
            Unavailable::Unreadable => HumanError::new(
                "The file couldn't be opened.",
                "It may have been moved, deleted, or you may not have permission to read it. Try choosing the file again.",
                Severity::ActionRequired,
            ),
        },

        LesewerkError::RecognitionFailure { stage, .. } => match stage {
            RecognitionStage::Setup => HumanError::new(
                "Text recognition isn't set up.",
                "The OCR model files are missing. Install them, then try opening the image again.",
                Severity::ActionRequired,
            ),
            RecognitionStage::Decode => HumanError::new(
                "No text could be read from this image.",
                "The image is damaged or in an unusual format. Try saving it as PNG or JPEG first.",
                Severity::Permanent,
            ),
            RecognitionStage::Engine => HumanError::new(
                "Text recognition stopped unexpectedly.",
                "Try opening the image again.",
                Severity::Transient,
            ),
        },

        LesewerkError::InvalidFormattingValue { field, detail } => {
            let hint = match field {
                FormattingField::FontFamily => "Choose a font from the list.",
                FormattingField::FontSize => "Font sizes must be between 1 and 100.",
                FormattingField::Color => "Colours must look like #1a2b3c.",
            };
            HumanError::new(
                "That formatting value can't be used.",
                format!("{hint} ({detail})"),
                Severity::ActionRequired,
            )
        }

        LesewerkError::Config(_) | LesewerkError::Serialization(_) => HumanError::new(
            "The viewer's settings couldn't be read.",
            "Default settings are being used. Check the config file for typos.",
            Severity::Permanent,
        ),

        LesewerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError::new(
                    "The viewer doesn't have permission to write its settings.",
                    "Check the permissions of the settings directory.",
                    Severity::ActionRequired,
                )
            } else {
                HumanError::new(
                    "There was a problem reading or writing a file.",
                    "Try again. If this keeps happening, your disk may be full.",
                    Severity::Transient,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_needs_action() {
        let err = LesewerkError::unreadable("/tmp/nope.png: No such file");
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn non_utf8_text_is_permanent() {
        let err = LesewerkError::not_utf8("notes.txt: first bad byte at offset 3");
        assert_eq!(humanize_error(&err).severity, Severity::Permanent);
    }

    #[test]
    fn path_text_does_not_change_the_kind() {
        let err = LesewerkError::unreadable("/home/u/UTF-8 exports/notes.txt: No such file");
        assert_eq!(humanize_error(&err).message, "The file couldn't be opened.");

        let err = LesewerkError::recognition(
            RecognitionStage::Decode,
            "failed to decode image /home/u/3d-models/receipt.png: Format error",
        );
        let human = humanize_error(&err);
        assert_eq!(human.message, "No text could be read from this image.");
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn missing_models_need_action() {
        let err = LesewerkError::recognition(RecognitionStage::Setup, "detection model not found");
        let human = humanize_error(&err);
        assert_eq!(human.message, "Text recognition isn't set up.");
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn corrupt_image_is_permanent() {
        let err = LesewerkError::recognition(RecognitionStage::Decode, "failed to decode image");
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
    }

    #[test]
    fn engine_failure_may_be_retried() {
        let err = LesewerkError::recognition(RecognitionStage::Engine, "worker stopped");
        assert_eq!(humanize_error(&err).severity, Severity::Transient);
    }

    #[test]
    fn bad_font_size_mentions_range() {
        let err = LesewerkError::invalid(FormattingField::FontSize, "font size 0 outside 1..=100");
        let human = humanize_error(&err);
        assert!(human.suggestion.contains("between 1 and 100"));
        assert!(human.status_line().starts_with(&human.message));
    }

    #[test]
    fn formatting_hint_follows_the_field() {
        let family = humanize_error(&LesewerkError::invalid(
            FormattingField::FontFamily,
            "font family must not be empty",
        ));
        assert!(family.suggestion.starts_with("Choose a font"));
        assert!(!family.suggestion.contains("between 1 and 100"));

        let colour = humanize_error(&LesewerkError::invalid(
            FormattingField::Color,
            "colour \"red\" is not of the form #rrggbb",
        ));
        assert!(colour.suggestion.contains("#1a2b3c"));
        assert!(!colour.suggestion.contains("between 1 and 100"));
    }
}
