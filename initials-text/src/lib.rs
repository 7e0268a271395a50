//! # initials-text
//!
//! Font loading, metrics, rasterization, and layout for initials avatars.
//!
//! ## Architecture
//!
//! ```text
//! FontResource (shared bytes)
//!     │
//!     ▼
//! layout(letters, canvas, size) ──► FontFace + LayoutResult { size, width, anchor }
//!     │                                 │
//!     ▼                                 ▼
//!  auto font size                draw_text(origin, plot) ──► coverage per pixel
//! ```
//!
//! - **`font`** — font resources, sized faces, metrics, glyph rasterization.
//! - **`layout`** — automatic font size, text measurement, centering.

pub mod font;
pub mod layout;

// Re-exports for ergonomic use.
pub use font::{
    FontFace, FontFaceError, FontResource, Hinting, LineMetrics, TextFace, BUNDLED_FONT,
};
pub use layout::{
    auto_font_size, center_anchor, layout, layout_with_font, measure_text, resolve_font_size,
    LayoutResult, TextExtents, MIN_AUTO_FONT_SIZE,
};
