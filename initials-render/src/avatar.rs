//! Avatar rendering entry points.
//!
//! ```text
//! AvatarOptions ──palette.select(key)──► background
//!       │
//!       ├──layout_with_font(letters, size)──► FontFace + anchor
//!       ▼
//! compose(size, background, letter_color, face, letters, anchor) ──► Canvas
//! ```
//!
//! Each call opens its own face and drops it before returning, so
//! renders on different threads share nothing but the font bytes.

use std::path::PathBuf;

use initials_core::{AvatarConfig, Color, Palette, DEFAULT_LETTER_COLOR};
use initials_text::{layout_with_font, FontFace, FontFaceError, FontResource, Hinting, MIN_AUTO_FONT_SIZE};
use thiserror::Error;

use crate::compositor::{compose, Canvas};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid avatar config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Cannot read font file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Font error: {0}")]
    Font(#[from] FontFaceError),
}

// ── Options ─────────────────────────────────────────────────────────

/// Styling for one avatar. `Default` is the bundled font and palette,
/// near-white letters, automatic font size, and a random background.
#[derive(Clone, Debug)]
pub struct AvatarOptions {
    pub font: FontResource,
    pub palette: Palette,
    pub letter_color: Color,
    /// Explicit font size; `<= 0` picks one from the letter count.
    pub font_size: f32,
    /// Key for a stable background choice; empty picks at random.
    pub palette_key: String,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            font: FontResource::bundled(),
            palette: Palette::default(),
            letter_color: DEFAULT_LETTER_COLOR,
            font_size: 0.0,
            palette_key: String::new(),
        }
    }
}

impl AvatarOptions {
    /// Resolve a config, reading `font_path` from disk when set.
    ///
    /// A custom font is opened once here so a bad file fails now rather
    /// than on the first render.
    pub fn from_config(config: &AvatarConfig) -> Result<Self, ConfigError> {
        let font = match &config.font_path {
            Some(path) => {
                let font = FontResource::from_file(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                FontFace::new(&font, MIN_AUTO_FONT_SIZE, Hinting::Full)?;
                log::debug!("loaded avatar font from {}", path.display());
                font
            }
            None => FontResource::bundled(),
        };

        Ok(Self {
            font,
            palette: config.palette_or_default(),
            letter_color: config.letter_color_or_default(),
            font_size: config.font_size,
            palette_key: config.palette_key.clone(),
        })
    }

    /// Parse an [`AvatarConfig`] from JSON and resolve it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AvatarConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    pub fn with_font(mut self, font: FontResource) -> Self {
        self.font = font;
        self
    }

    pub fn with_palette(mut self, palette: impl Into<Palette>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn with_letter_color(mut self, color: Color) -> Self {
        self.letter_color = color;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_palette_key(mut self, key: impl Into<String>) -> Self {
        self.palette_key = key.into();
        self
    }
}

// ── Requests ────────────────────────────────────────────────────────

/// Everything needed to render one avatar.
#[derive(Clone, Debug)]
pub struct AvatarRequest {
    pub size: u32,
    pub letters: Vec<char>,
    pub options: AvatarOptions,
}

impl AvatarRequest {
    pub fn new(size: u32, letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            size,
            letters: letters.into_iter().collect(),
            options: AvatarOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AvatarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn render(&self) -> Result<Canvas, FontFaceError> {
        render_avatar(self.size, &self.letters, &self.options)
    }
}

/// Render `letters` centered on a `size × size` canvas.
///
/// The only failure is the font face refusing to open; nothing is
/// drawn in that case.
pub fn render_avatar(size: u32, letters: &[char], options: &AvatarOptions) -> Result<Canvas, FontFaceError> {
    let background = options.palette.select(&options.palette_key);

    let (mut face, layout) = layout_with_font(letters, size, options.font_size, &options.font)
        .inspect_err(|e| log::warn!("avatar font failed to open: {e}"))?;

    let canvas = compose(
        size,
        background,
        options.letter_color,
        &mut face,
        letters,
        layout.anchor(),
    );
    log::debug!(
        "rendered {size}px avatar: {} letters, font {:.2}px, background {background}",
        letters.len(),
        layout.font_size,
    );
    Ok(canvas)
}

/// [`render_avatar`] over the characters of `text`.
pub fn render_initials(size: u32, text: &str, options: &AvatarOptions) -> Result<Canvas, FontFaceError> {
    let letters: Vec<char> = text.chars().collect();
    render_avatar(size, &letters, options)
}

// ===================================================================
// Tests
// ===================================================================
