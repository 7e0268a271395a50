//! # initials-render
//!
//! Renders initials avatars: a solid background with centered,
//! anti-aliased letters, as an in-memory RGBA image.
//!
//! ## Architecture
//!
//! ```text
//! render_avatar(size, letters, options)
//!     │
//!     ├── initials-core  ── background color (random or keyed)
//!     ├── initials-text  ── font size, measurement, anchor, glyphs
//!     ▼
//! compositor ── fill + coverage blend ──► Canvas (image::RgbaImage)
//! ```
//!
//! - **`avatar`** — options, requests, and the render entry points.
//! - **`compositor`** — canvas allocation and text blending.

pub mod avatar;
pub mod compositor;

// Re-exports for ergonomic use.
pub use avatar::{render_avatar, render_initials, AvatarOptions, AvatarRequest, ConfigError};
pub use compositor::{compose, draw_text, new_canvas, Canvas};
pub use initials_core::{AvatarConfig, Color, Palette};
pub use initials_text::{FontFaceError, FontResource};
