//! Background palettes.
//!
//! The bundled palette is a `const` table; a [`Palette`] built from it
//! is an ordinary owned value, so nothing here is global mutable state.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::selector;

/// Bundled default background colors (medium-dark tones that keep
/// near-white letters readable).
pub const DEFAULT_COLORS: [Color; 16] = [
    Color::rgb(0xe5, 0x39, 0x35), // red
    Color::rgb(0xd8, 0x1b, 0x60), // pink
    Color::rgb(0x8e, 0x24, 0xaa), // purple
    Color::rgb(0x5e, 0x35, 0xb1), // deep purple
    Color::rgb(0x39, 0x49, 0xab), // indigo
    Color::rgb(0x1e, 0x88, 0xe5), // blue
    Color::rgb(0x03, 0x9b, 0xe5), // light blue
    Color::rgb(0x00, 0xac, 0xc1), // cyan
    Color::rgb(0x00, 0x89, 0x7b), // teal
    Color::rgb(0x43, 0xa0, 0x47), // green
    Color::rgb(0x7c, 0xb3, 0x42), // light green
    Color::rgb(0xc0, 0xca, 0x33), // lime
    Color::rgb(0xfb, 0x8c, 0x00), // orange
    Color::rgb(0xf4, 0x51, 0x1e), // deep orange
    Color::rgb(0x6d, 0x4c, 0x41), // brown
    Color::rgb(0x54, 0x6e, 0x7a), // blue grey
];

/// Ordered list of candidate background colors. May be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// A palette with no colors; selection from it yields opaque black.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pick a background color; see [`selector::select_background`].
    pub fn select(&self, key: &str) -> Color {
        selector::select_background(&self.0, key)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.to_vec())
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ===================================================================
// Tests
// ===================================================================
