// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document model — the text currently on screen and the one formatting record
// that applies to all of it.
//
// Content is only ever replaced wholesale. Formatting setters validate every
// input before writing anything, so a rejected call leaves the document
// exactly as it was.

use lesewerk_core::error::{FormattingField, LesewerkError, Result};
use lesewerk_core::types::{ColorSetting, FontSize, FormattingState};
use serde::Serialize;
use tracing::{debug, warn};

/// The viewer's single document.
///
/// Created once at startup with empty content. Every mutator takes
/// `&mut self`, so the borrow checker enforces the one-caller-at-a-time
/// discipline the UI event loop already follows.
///
/// ```rust
/// use lesewerk_core::types::{ColorSetting, Rgb};
/// use lesewerk_document::Document;
///
/// let mut doc = Document::new();
/// doc.replace_content("Hello");
/// doc.set_font("Serif", 14).unwrap();
/// doc.set_text_color(ColorSetting::Rgb(Rgb::new(200, 0, 0)));
///
/// let view = doc.current_state();
/// assert_eq!(view.content, "Hello");
/// assert_eq!(view.formatting.font_size.get(), 14);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
    formatting: FormattingState,
}

/// Borrowed, read-only snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentView<'a> {
    pub content: &'a str,
    pub formatting: &'a FormattingState,
}

/// Owned snapshot, for handing state across a thread boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentState {
    pub content: String,
    pub formatting: FormattingState,
}

impl DocumentView<'_> {
    pub fn to_owned_state(&self) -> DocumentState {
        DocumentState {
            content: self.content.to_owned(),
            formatting: self.formatting.clone(),
        }
    }
}

impl Document {
    /// Empty document with default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document starting from the given formatting (config defaults).
    pub fn with_formatting(formatting: FormattingState) -> Self {
        Self {
            content: String::new(),
            formatting,
        }
    }

    // -- Content ---------------------------------------------------------------

    /// Replace the whole body with `new_text`. Formatting is left alone.
    pub fn replace_content(&mut self, new_text: impl Into<String>) {
        self.content = new_text.into();
        debug!(
            chars = self.content.chars().count(),
            bytes = self.content.len(),
            "document content replaced"
        );
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    // -- Formatting ------------------------------------------------------------

    pub fn formatting(&self) -> &FormattingState {
        &self.formatting
    }

    /// Set font family and size together.
    ///
    /// # Errors
    ///
    /// [`LesewerkError::InvalidFormattingValue`] if `family` is blank or
    /// `size_points` is outside `1..=100`. Nothing is changed in that case.
    pub fn set_font(&mut self, family: &str, size_points: i64) -> Result<()> {
        let family = family.trim();
        if family.is_empty() {
            warn!("rejected empty font family");
            return Err(LesewerkError::invalid(
                FormattingField::FontFamily,
                "font family must not be empty",
            ));
        }
        let size = validated_size(size_points)?;

        self.formatting.font_family = family.to_string();
        self.formatting.font_size = size;
        debug!(family, size = size.get(), "font changed");
        Ok(())
    }

    /// Change only the font size.
    ///
    /// # Errors
    ///
    /// [`LesewerkError::InvalidFormattingValue`] if `size_points` is outside
    /// `1..=100`. The previous size is kept.
    pub fn resize(&mut self, size_points: i64) -> Result<()> {
        let size = validated_size(size_points)?;
        self.formatting.font_size = size;
        debug!(size = size.get(), "font resized");
        Ok(())
    }

    /// Set the foreground colour, or revert it with [`ColorSetting::Unset`].
    pub fn set_text_color(&mut self, color: ColorSetting) {
        self.formatting.text_color = color;
        debug!(color = ?color, "text colour changed");
    }

    /// Set the background colour, or revert it with [`ColorSetting::Unset`].
    pub fn set_background_color(&mut self, color: ColorSetting) {
        self.formatting.background_color = color;
        debug!(color = ?color, "background colour changed");
    }

    // -- Snapshot --------------------------------------------------------------

    /// Read-only view of content and formatting for rendering.
    pub fn current_state(&self) -> DocumentView<'_> {
        DocumentView {
            content: &self.content,
            formatting: &self.formatting,
        }
    }
}

fn validated_size(size_points: i64) -> Result<FontSize> {
    FontSize::new(size_points).inspect_err(|err| {
        warn!(size_points, error = %err, "rejected font size");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesewerk_core::types::Rgb;

    fn doc_with_size(size: i64) -> Document {
        let mut doc = Document::new();
        doc.resize(size).unwrap();
        doc
    }

    #[test]
    fn fresh_document_is_empty_with_defaults() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.formatting(), &FormattingState::default());
    }

    #[test]
    fn replace_content_sets_text() {
        let mut doc = Document::new();
        doc.replace_content("Hello");
        assert_eq!(doc.current_state().content, "Hello");
    }

    #[test]
    fn replace_content_keeps_formatting() {
        let mut doc = Document::new();
        doc.set_font("Monospace", 30).unwrap();
        doc.set_background_color(Rgb::new(1, 2, 3).into());
        let before = doc.formatting().clone();

        for text in ["", "first", "zweite Zeile\nmit Umlaut äöü", "\u{1F600}\r\n\t"] {
            doc.replace_content(text);
            assert_eq!(doc.content(), text);
            assert_eq!(doc.formatting(), &before);
        }
    }

    #[test]
    fn replace_content_never_appends() {
        let mut doc = Document::new();
        doc.replace_content("one");
        doc.replace_content("two");
        assert_eq!(doc.content(), "two");
        doc.replace_content("");
        assert!(doc.is_empty());
    }

    #[test]
    fn resize_accepts_whole_range() {
        let mut doc = Document::new();
        for n in 1..=100 {
            doc.resize(n).unwrap();
            assert_eq!(i64::from(doc.formatting().font_size.get()), n);
        }
    }

    #[test]
    fn resize_rejects_out_of_range_and_keeps_size() {
        let mut doc = doc_with_size(37);
        for n in [i64::MIN, -1, 0, 101, 1000, i64::MAX] {
            let err = doc.resize(n).unwrap_err();
            assert!(matches!(
                err,
                LesewerkError::InvalidFormattingValue { field: FormattingField::FontSize, .. }
            ));
            assert_eq!(doc.formatting().font_size.get(), 37);
        }
    }

    #[test]
    fn resize_zero_from_twelve() {
        let mut doc = doc_with_size(12);
        assert!(doc.resize(0).is_err());
        assert_eq!(doc.formatting().font_size.get(), 12);
    }

    #[test]
    fn set_font_sets_family_and_size() {
        let mut doc = Document::new();
        doc.set_font("  Serif ", 14).unwrap();
        assert_eq!(doc.formatting().font_family, "Serif");
        assert_eq!(doc.formatting().font_size.get(), 14);
    }

    #[test]
    fn set_font_with_bad_size_changes_nothing() {
        let mut doc = Document::new();
        doc.set_font("Serif", 14).unwrap();
        let before = doc.formatting().clone();

        assert!(doc.set_font("Monospace", 0).is_err());
        assert!(doc.set_font("Monospace", 101).is_err());
        assert_eq!(doc.formatting(), &before);
    }

    #[test]
    fn set_font_with_blank_family_changes_nothing() {
        let mut doc = Document::new();
        let before = doc.formatting().clone();
        let err = doc.set_font("   ", 20).unwrap_err();
        assert!(matches!(
            err,
            LesewerkError::InvalidFormattingValue { field: FormattingField::FontFamily, .. }
        ));
        assert_eq!(doc.formatting(), &before);
    }

    #[test]
    fn colour_setters_are_isolated() {
        let mut doc = Document::new();
        doc.set_font("Serif", 14).unwrap();
        doc.set_text_color(Rgb::new(10, 20, 30).into());
        doc.set_background_color(ColorSetting::Unset);

        let fmt = doc.formatting();
        assert_eq!(fmt.font_family, "Serif");
        assert_eq!(fmt.font_size.get(), 14);
        assert_eq!(fmt.text_color, ColorSetting::Rgb(Rgb::new(10, 20, 30)));
        assert!(fmt.background_color.is_unset());
    }

    #[test]
    fn set_text_color_is_idempotent() {
        let color = ColorSetting::Rgb(Rgb::new(0, 128, 255));
        let mut once = Document::new();
        once.set_text_color(color);
        let mut twice = Document::new();
        twice.set_text_color(color);
        twice.set_text_color(color);
        assert_eq!(once, twice);
    }

    #[test]
    fn unset_reverts_colour() {
        let mut doc = Document::new();
        doc.set_background_color(Rgb::WHITE.into());
        doc.set_background_color(ColorSetting::Unset);
        assert!(doc.formatting().background_color.is_unset());
    }

    #[test]
    fn owned_state_matches_view() {
        let mut doc = Document::with_formatting(FormattingState {
            font_family: "Serif".into(),
            ..FormattingState::default()
        });
        doc.replace_content("snapshot");
        let owned = doc.current_state().to_owned_state();
        assert_eq!(owned.content, "snapshot");
        assert_eq!(owned.formatting.font_family, "Serif");
    }
}
