//! Background color selection.
//!
//! Two paths:
//!
//! 1. **Keyed**: the palette index is a pure function of
//!    `(key, palette length)`, so the same user always gets the same
//!    background.
//! 2. **Random**: an empty key draws from the thread-local generator.
//!
//! ## Keyed index derivation
//!
//! ```text
//! key bytes ──FNV-1a 64──► hash
//!                            │
//!                            ▼
//!        PaletteSeed { state: hash, stream: (hash >> 1) | 1 }
//!                            │
//!                            ▼
//!        Pcg64Dxsm::new(state, stream).random_range(0..n)
//! ```
//!
//! The stream word is forced odd (and therefore non-zero), which PCG
//! requires for its increment.

use std::hash::Hasher;

use fnv::FnvHasher;
use rand::Rng;
use rand_pcg::Pcg64Dxsm;

use crate::color::Color;

/// Two seed words derived from a 64-bit key hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteSeed {
    pub state: u64,
    /// Always odd.
    pub stream: u64,
}

impl PaletteSeed {
    pub fn from_hash(hash: u64) -> Self {
        Self {
            state: hash,
            stream: (hash >> 1) | 1,
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::from_hash(key_hash(key))
    }

    /// Draw one index in `[0, n)` from a generator seeded with these words.
    pub fn index(self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        let mut rng = Pcg64Dxsm::new(u128::from(self.state), u128::from(self.stream));
        rng.random_range(0..n)
    }
}

/// 64-bit FNV-1a over the raw key bytes.
pub fn key_hash(key: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

/// Deterministic palette index for `key` in a palette of `n` colors.
pub fn keyed_index(n: usize, key: &str) -> usize {
    let seed = PaletteSeed::from_key(key);
    let index = seed.index(n);
    log::trace!("keyed_index({n}, {key:?}): seed={seed:?} -> {index}");
    index
}

/// Uniformly random palette index from the calling thread's generator.
pub fn random_index(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    rand::rng().random_range(0..n)
}

/// Pick a background color from `palette`.
///
/// - empty palette → opaque black
/// - empty key → uniformly random entry
/// - otherwise → [`keyed_index`] entry
pub fn select_background(palette: &[Color], key: &str) -> Color {
    if palette.is_empty() {
        return Color::BLACK;
    }

    let index = if key.is_empty() {
        random_index(palette.len())
    } else {
        keyed_index(palette.len(), key)
    };

    let color = palette[index];
    log::debug!(
        "background {color} (index {index} of {}, keyed: {})",
        palette.len(),
        !key.is_empty(),
    );
    color
}

// ===================================================================
// Tests
// ===================================================================
