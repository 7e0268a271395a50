//! Serializable avatar configuration.
//!
//! Every field is optional; missing fields fall back to the bundled
//! defaults when the config is resolved into render options.
//!
//! ```json
//! {
//!   "palette": ["#e53935", "#1e88e5"],
//!   "letter_color": "#ffffff",
//!   "font_size": 0,
//!   "palette_key": "user@example.com",
//!   "font_path": "fonts/Inter-Bold.ttf"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Color;
use crate::palette::Palette;

/// Default glyph color: near-white, slightly translucent.
pub const DEFAULT_LETTER_COLOR: Color = Color::rgba(0xf0, 0xf0, 0xf0, 0xf0);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Candidate background colors. `None` uses the bundled palette;
    /// an empty list always yields a black background.
    pub palette: Option<Palette>,
    /// Glyph color (default [`DEFAULT_LETTER_COLOR`]).
    pub letter_color: Option<Color>,
    /// Explicit font size in pixels; `<= 0` selects the size automatically.
    pub font_size: f32,
    /// Deterministic palette-selection key; empty picks randomly.
    pub palette_key: String,
    /// TrueType/OpenType file to use instead of the bundled font.
    pub font_path: Option<PathBuf>,
}

impl AvatarConfig {
    pub fn palette_or_default(&self) -> Palette {
        self.palette.clone().unwrap_or_default()
    }

    pub fn letter_color_or_default(&self) -> Color {
        self.letter_color.unwrap_or(DEFAULT_LETTER_COLOR)
    }
}

// ===================================================================
// Tests
// ===================================================================
