// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core formatting types for the Lesewerk viewer.
//
// Formatting is a single record applied to the whole document; there is no
// per-range styling anywhere in the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormattingField, LesewerkError};

/// Font family used before the user picks one.
pub const DEFAULT_FONT_FAMILY: &str = "Sans Serif";

/// A 24-bit RGB colour. Channel bounds are guaranteed by the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, as accepted by CSS and HTML colour inputs.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = LesewerkError;

    /// Parse `#rrggbb` or `rrggbb` (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LesewerkError::invalid(
                FormattingField::Color,
                format!("colour {s:?} is not of the form #rrggbb"),
            ));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|err| {
                LesewerkError::invalid(FormattingField::Color, format!("colour {s:?}: {err}"))
            })
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A colour slot that may be left at the toolkit default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSetting {
    /// Use whatever the rendering toolkit would use.
    #[default]
    Unset,
    Rgb(Rgb),
}

impl ColorSetting {
    /// The explicit colour, if one is set.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Self::Unset => None,
            Self::Rgb(rgb) => Some(*rgb),
        }
    }

    /// CSS value for this colour, or `None` when the toolkit default applies.
    pub fn css_value(&self) -> Option<String> {
        self.rgb().map(|rgb| rgb.to_hex())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Rgb> for ColorSetting {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// Font size in points, always within `[FontSize::MIN, FontSize::MAX]`.
///
/// Out-of-range requests are rejected, never clamped. Deserialization goes
/// through the same check, so a hand-edited config cannot smuggle in `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct FontSize(u8);

impl FontSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: FontSize = FontSize(12);

    /// Validate a requested size in points.
    pub fn new(points: i64) -> Result<Self, LesewerkError> {
        if points < i64::from(Self::MIN) || points > i64::from(Self::MAX) {
            return Err(LesewerkError::invalid(
                FormattingField::FontSize,
                format!("font size {points} outside {}..={}", Self::MIN, Self::MAX),
            ));
        }
        // Range checked above, the cast cannot truncate.
        Ok(Self(points as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

impl TryFrom<i64> for FontSize {
    type Error = LesewerkError;

    fn try_from(points: i64) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl TryFrom<u32> for FontSize {
    type Error = LesewerkError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(points))
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// The uniform formatting applied to every character of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingState {
    pub font_family: String,
    pub font_size: FontSize,
    pub text_color: ColorSetting,
    pub background_color: ColorSetting,
}

impl Default for FormattingState {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: FontSize::DEFAULT,
            text_color: ColorSetting::Unset,
            background_color: ColorSetting::Unset,
        }
    }
}

impl FormattingState {
    /// Inline CSS declarations for the rendering boundary.
    ///
    /// Unset colours are omitted so the toolkit default shows through.
    pub fn to_css(&self) -> String {
        let family = self.font_family.replace(['\'', '"', ';'], "");
        let mut css = format!(
            "font-family: '{family}'; font-size: {}pt;",
            self.font_size.get()
        );
        if let Some(color) = self.text_color.css_value() {
            css.push_str(&format!(" color: {color};"));
        }
        if let Some(background) = self.background_color.css_value() {
            css.push_str(&format!(" background-color: {background};"));
        }
        css
    }
}
