//! Straight (non-premultiplied) 8-bit RGBA color.
//!
//! Colors round-trip through CSS-style hex strings (`#rrggbb`,
//! `#rrggbbaa`, and the short `#rgb` / `#rgba` forms), which is also
//! their serde representation so configs stay human-editable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid color length {0} in {1:?} (expected 3, 4, 6 or 8 hex digits)")]
    Length(usize, String),
    #[error("Invalid hex digit in color {0:?}")]
    Digit(String),
}

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 0x11);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let digit_err = |_| ColorParseError::Digit(s.to_string());

        match hex.len() {
            3 => Ok(Color::rgb(
                nibble(0).map_err(digit_err)?,
                nibble(1).map_err(digit_err)?,
                nibble(2).map_err(digit_err)?,
            )),
            4 => Ok(Color::rgba(
                nibble(0).map_err(digit_err)?,
                nibble(1).map_err(digit_err)?,
                nibble(2).map_err(digit_err)?,
                nibble(3).map_err(digit_err)?,
            )),
            6 => Ok(Color::rgb(
                byte(0).map_err(digit_err)?,
                byte(2).map_err(digit_err)?,
                byte(4).map_err(digit_err)?,
            )),
            8 => Ok(Color::rgba(
                byte(0).map_err(digit_err)?,
                byte(2).map_err(digit_err)?,
                byte(4).map_err(digit_err)?,
                byte(6).map_err(digit_err)?,
            )),
            n => Err(ColorParseError::Length(n, s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ===================================================================
// Tests
// ===================================================================
