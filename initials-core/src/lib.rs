//! # initials-core
//!
//! Colors, palettes, and background selection for initials avatars.
//!
//! ## Architecture
//!
//! ```text
//! AvatarConfig (serde)
//!     │
//!     ▼
//! Palette ──select(key)──► selector ──► Color
//!                            ├─ key empty  → thread-local RNG
//!                            └─ key given  → FNV-1a → PCG → index
//! ```
//!
//! - **`color`** — straight RGBA color with hex parsing.
//! - **`palette`** — ordered background palettes and the bundled default.
//! - **`selector`** — random and keyed palette index selection.
//! - **`config`** — serializable avatar settings.

pub mod color;
pub mod config;
pub mod palette;
pub mod selector;

// Re-exports for ergonomic use.
pub use color::{Color, ColorParseError};
pub use config::{AvatarConfig, DEFAULT_LETTER_COLOR};
pub use palette::{Palette, DEFAULT_COLORS};
pub use selector::{keyed_index, random_index, select_background, PaletteSeed};
