//! Font resources and sized faces.
//!
//! A [`FontResource`] is shared, immutable font bytes. A [`FontFace`]
//! is that resource opened at one pixel size with one hinting policy;
//! it answers metric queries and rasterizes strings.
//!
//! ## Architecture
//!
//! ```text
//! FontResource (Arc<bytes>, face index)
//!     │  FontFace::new(size, hinting)
//!     ▼
//! FontFace
//!   ├── font_system: FontSystem   (fontdb with just this face)
//!   ├── swash_cache: SwashCache   (glyph rasterizer)
//!   └── font: Arc<Font>           (ttf-parser metrics)
//! ```
//!
//! Faces are cheap enough to build per render and are not shared
//! between threads; resources are.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use cosmic_text::rustybuzz::ttf_parser;
use cosmic_text::{fontdb, CacheKey, CacheKeyFlags, Color as CColor, Font, FontSystem, SwashCache};
use thiserror::Error;

/// Bundled default font (DejaVu Sans, Bitstream Vera license).
pub static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Locale handed to the per-face font system; only one face is ever
/// loaded so it never influences matching.
const FACE_LOCALE: &str = "en-US";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontFaceError {
    #[error("Font data contains no usable face")]
    NoFace,
    #[error("Font face index {index} out of range ({count} faces available)")]
    MissingFace { index: u32, count: usize },
    #[error("Font size {0} cannot be rendered (must be finite and > 0)")]
    InvalidSize(f32),
}

// ── Font resource ───────────────────────────────────────────────────

/// Immutable font bytes plus the index of the face to use.
///
/// Cloning is an `Arc` bump, so one resource can back renders on
/// many threads.
#[derive(Clone)]
pub struct FontResource {
    data: Arc<dyn AsRef<[u8]> + Send + Sync>,
    index: u32,
}

impl FontResource {
    /// The bundled default font.
    pub fn bundled() -> Self {
        Self::from_static(BUNDLED_FONT)
    }

    pub fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Arc::new(data),
            index: 0,
        }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(data),
            index: 0,
        }
    }

    /// Read a TrueType/OpenType file. The bytes are not validated
    /// until a face is opened.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        log::debug!("loaded font {} ({} bytes)", path.display(), data.len());
        Ok(Self::from_vec(data))
    }

    /// Select a face inside a font collection (`.ttc`).
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn data(&self) -> &[u8] {
        (*self.data).as_ref()
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl Default for FontResource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Debug for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResource")
            .field("len", &self.data().len())
            .field("index", &self.index)
            .finish()
    }
}

// ── Hinting ─────────────────────────────────────────────────────────

/// Hinting policy for a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hinting {
    /// Fractional advances and metrics.
    None,
    /// Advances and line metrics snap to whole pixels.
    #[default]
    Full,
}

impl Hinting {
    fn apply(self, value: f32) -> f32 {
        match self {
            Hinting::None => value,
            Hinting::Full => value.round(),
        }
    }
}

// ── Face abstraction ────────────────────────────────────────────────

/// Vertical metrics in pixels. `descent` is positive below the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    /// Recommended baseline-to-baseline distance.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// What layout and compositing need from a sized face.
pub trait TextFace {
    /// Pixel size the face was opened at.
    fn size(&self) -> f32;

    /// Horizontal advance of `ch`, or `None` when the face has no glyph for it.
    fn glyph_advance(&self, ch: char) -> Option<f32>;

    fn metrics(&self) -> LineMetrics;

    /// Rasterize `text` with its baseline starting at `origin`.
    ///
    /// `plot(x, y, coverage)` is called for every pixel the glyphs touch,
    /// in canvas coordinates; coordinates may fall outside any canvas.
    /// Characters without a glyph advance by the width of a space and
    /// draw nothing.
    fn draw_text(&mut self, text: &[char], origin: (i32, i32), plot: impl FnMut(i32, i32, u8));
}

// ── Font face ───────────────────────────────────────────────────────

/// A font opened at a fixed pixel size.
///
/// Owns its own `FontSystem` and glyph cache; dropping the face
/// releases both.
pub struct FontFace {
    font_system: FontSystem,
    swash_cache: SwashCache,
    font: Arc<Font>,
    size: f32,
    hinting: Hinting,
    scale: f32,
    space_advance: f32,
}

impl FontFace {
    /// Open `resource` at `size` pixels.
    pub fn new(resource: &FontResource, size: f32, hinting: Hinting) -> Result<Self, FontFaceError> {
        if !size.is_finite() || size <= 0.0 {
            log::warn!("rejecting font size {size}");
            return Err(FontFaceError::InvalidSize(size));
        }

        let mut db = fontdb::Database::new();
        let ids = db.load_font_source(fontdb::Source::Binary(Arc::clone(&resource.data)));
        if ids.is_empty() {
            log::warn!("font data ({} bytes) has no parsable face", resource.data().len());
            return Err(FontFaceError::NoFace);
        }
        let id = *ids
            .get(resource.index as usize)
            .ok_or(FontFaceError::MissingFace {
                index: resource.index,
                count: ids.len(),
            })?;

        let mut font_system = FontSystem::new_with_locale_and_db(FACE_LOCALE.to_string(), db);
        let font = font_system.get_font(id).ok_or(FontFaceError::NoFace)?;

        let tables: &ttf_parser::Face<'_> = font.rustybuzz();
        let units_per_em = tables.units_per_em();
        if units_per_em == 0 {
            return Err(FontFaceError::NoFace);
        }
        let scale = size / f32::from(units_per_em);

        let mut face = Self {
            font_system,
            swash_cache: SwashCache::new(),
            font,
            size,
            hinting,
            scale,
            space_advance: 0.0,
        };
        face.space_advance = face.glyph_advance(' ').unwrap_or(0.0);

        log::trace!("opened face {:?} at {size}px ({hinting:?})", face.font.id());
        Ok(face)
    }

    pub fn hinting(&self) -> Hinting {
        self.hinting
    }

    /// Advance used for characters the face cannot render.
    pub fn space_advance(&self) -> f32 {
        self.space_advance
    }

    /// Parsed font tables backing this face.
    fn tables(&self) -> &ttf_parser::Face<'_> {
        self.font.rustybuzz()
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.tables()
            .glyph_index(ch)
            .map(|gid| gid.0)
            .filter(|&gid| gid != 0)
    }
}

impl TextFace for FontFace {
    fn size(&self) -> f32 {
        self.size
    }

    fn glyph_advance(&self, ch: char) -> Option<f32> {
        let face = self.tables();
        let gid = face.glyph_index(ch).filter(|gid| gid.0 != 0)?;
        let advance = face.glyph_hor_advance(gid)?;
        Some(self.hinting.apply(f32::from(advance) * self.scale))
    }

    fn metrics(&self) -> LineMetrics {
        let face = self.tables();
        LineMetrics {
            ascent: self.hinting.apply(f32::from(face.ascender()) * self.scale),
            descent: self.hinting.apply(-f32::from(face.descender()) * self.scale),
            line_gap: self.hinting.apply(f32::from(face.line_gap()) * self.scale),
        }
    }

    fn draw_text(&mut self, text: &[char], origin: (i32, i32), mut plot: impl FnMut(i32, i32, u8)) {
        let (origin_x, origin_y) = origin;
        let font_id = self.font.id();
        let mut pen_x = 0.0f32;

        for &ch in text {
            let glyph = self.glyph_id(ch).zip(self.glyph_advance(ch));
            let Some((glyph_id, advance)) = glyph else {
                pen_x += self.space_advance;
                continue;
            };

            let (cache_key, dx, dy) =
                CacheKey::new(font_id, glyph_id, self.size, (pen_x, 0.0), CacheKeyFlags::empty());

            self.swash_cache.with_pixels(
                &mut self.font_system,
                cache_key,
                CColor::rgb(0xff, 0xff, 0xff),
                |x, y, color| {
                    let coverage = color.a();
                    if coverage > 0 {
                        plot(origin_x + dx + x, origin_y + dy + y, coverage);
                    }
                },
            );

            pen_x += advance;
        }
    }
}

impl Drop for FontFace {
    fn drop(&mut self) {
        log::trace!("released face {:?} at {}px", self.font.id(), self.size);
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("font", &self.font.id())
            .field("size", &self.size)
            .field("hinting", &self.hinting)
            .finish_non_exhaustive()
    }
}

// ===================================================================
// Tests
// ===================================================================
