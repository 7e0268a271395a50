//! Avatar text layout: font size selection, measurement, centering.
//!
//! ```text
//! letters, canvas size, requested size
//!     │
//!     ▼
//! resolve_font_size()  ── requested > 0 ? requested : auto_font_size()
//!     │
//!     ▼
//! face_factory(size) ──► TextFace
//!     │
//!     ▼
//! measure_text()  ── Σ advances (space for missing glyphs), ceil'd metrics
//!     │
//!     ▼
//! center_anchor() ── baseline origin for a centered text block
//! ```

use crate::font::{FontFace, FontFaceError, FontResource, Hinting, TextFace};

/// Smallest automatically chosen font size.
pub const MIN_AUTO_FONT_SIZE: f32 = 12.0;

/// Pick a font size for `letter_count` letters on a `canvas_size` square.
///
/// Starts at two thirds of the canvas, shrinks by `3 / (n + 2)` for more
/// than one letter, then clamps to at least [`MIN_AUTO_FONT_SIZE`] and at
/// most the canvas size. The floor wins on canvases smaller than it.
pub fn auto_font_size(letter_count: usize, canvas_size: u32) -> f32 {
    let canvas = canvas_size as f32;
    let mut size = canvas * 2.0 / 3.0;

    if letter_count > 1 {
        size = size * 3.0 / (letter_count as f32 + 2.0);
    }

    if size < MIN_AUTO_FONT_SIZE {
        MIN_AUTO_FONT_SIZE
    } else if size > canvas {
        canvas
    } else {
        size
    }
}

/// `requested` if positive, otherwise [`auto_font_size`].
pub fn resolve_font_size(requested: f32, letter_count: usize, canvas_size: u32) -> f32 {
    if requested > 0.0 {
        requested
    } else {
        auto_font_size(letter_count, canvas_size)
    }
}

/// Whole-pixel text extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtents {
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
}

/// Measure a single line of text.
///
/// Width, ascent and descent are each rounded up independently.
pub fn measure_text<F: TextFace>(face: &F, text: &[char]) -> TextExtents {
    let space = face.glyph_advance(' ').unwrap_or(0.0);
    let width: f32 = text
        .iter()
        .map(|&ch| face.glyph_advance(ch).unwrap_or(space))
        .sum();

    let metrics = face.metrics();
    let ascent = metrics.ascent.ceil() as i32;
    let descent = metrics.descent.ceil() as i32;
    let line_gap = metrics.height().ceil() as i32 - ascent - descent;

    TextExtents {
        width: width.ceil() as i32,
        ascent,
        descent,
        line_gap,
    }
}

/// Baseline origin that centers `extents` on a `canvas_size` square.
///
/// Integer division truncates toward zero. Text wider than the canvas
/// gets a negative `x` and is cropped on both sides.
pub fn center_anchor(canvas_size: u32, extents: &TextExtents) -> (i32, i32) {
    let size = i32::try_from(canvas_size).unwrap_or(i32::MAX);
    let x = (size - extents.width) / 2;
    let y = size / 2 + (extents.ascent - extents.descent) / 2;
    (x, y)
}

/// Everything layout decided for one avatar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    pub font_size: f32,
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
    /// Baseline origin of the first glyph.
    pub x: i32,
    pub y: i32,
}

impl LayoutResult {
    pub fn anchor(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Resolve the font size, build a face with `face_factory`, and center
/// `letters` on the canvas.
///
/// The face is handed back so the caller can draw with it; it is
/// dropped when the caller is done.
pub fn layout<F, B>(
    letters: &[char],
    canvas_size: u32,
    requested_font_size: f32,
    face_factory: B,
) -> Result<(F, LayoutResult), FontFaceError>
where
    F: TextFace,
    B: FnOnce(f32) -> Result<F, FontFaceError>,
{
    let font_size = resolve_font_size(requested_font_size, letters.len(), canvas_size);
    let face = face_factory(font_size)?;

    let extents = measure_text(&face, letters);
    let (x, y) = center_anchor(canvas_size, &extents);

    let result = LayoutResult {
        font_size,
        width: extents.width,
        ascent: extents.ascent,
        descent: extents.descent,
        line_gap: extents.line_gap,
        x,
        y,
    };
    log::debug!(
        "layout {} letters on {canvas_size}px: size {font_size:.2}, width {}, anchor ({x}, {y})",
        letters.len(),
        extents.width,
    );
    Ok((face, result))
}

/// [`layout`] with a fully hinted face opened from `font`.
///
/// Faces are rasterized at 72 DPI, so the font size in points is also
/// the pixel size handed to the face.
pub fn layout_with_font(
    letters: &[char],
    canvas_size: u32,
    requested_font_size: f32,
    font: &FontResource,
) -> Result<(FontFace, LayoutResult), FontFaceError> {
    layout(letters, canvas_size, requested_font_size, |size| {
        FontFace::new(font, size, Hinting::Full)
    })
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::LineMetrics;

    /// Fixed-metric face: every glyph is `advance` wide except `missing`.
    struct FixedFace {
        size: f32,
        advance: f32,
        space: f32,
        missing: char,
        metrics: LineMetrics,
    }

    impl FixedFace {
        fn new(size: f32) -> Self {
            Self {
                size,
                advance: 10.4,
                space: 4.5,
                missing: '?',
                metrics: LineMetrics {
                    ascent: 7.2,
                    descent: 2.1,
                    line_gap: 0.5,
                },
            }
        }
    }

    impl TextFace for FixedFace {
        fn size(&self) -> f32 {
            self.size
        }

        fn glyph_advance(&self, ch: char) -> Option<f32> {
            match ch {
                ' ' => Some(self.space),
                c if c == self.missing => None,
                _ => Some(self.advance),
            }
        }

        fn metrics(&self) -> LineMetrics {
            self.metrics
        }

        fn draw_text(&mut self, _text: &[char], _origin: (i32, i32), _plot: impl FnMut(i32, i32, u8)) {}
    }

    #[test]
    fn test_auto_font_size_single_letter() {
        assert!((auto_font_size(1, 90) - 60.0).abs() < 1e-4);
        assert!((auto_font_size(0, 90) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_auto_font_size_shrinks_with_letters() {
        // 2/3 * 60 = 40, then * 3/4 for two letters.
        assert!((auto_font_size(2, 60) - 30.0).abs() < 1e-4);
        // * 3/5 for three letters.
        assert!((auto_font_size(3, 60) - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_auto_font_size_floor() {
        assert_eq!(auto_font_size(1, 12), MIN_AUTO_FONT_SIZE);
        assert_eq!(auto_font_size(10, 30), MIN_AUTO_FONT_SIZE);
        // Floor wins over the canvas ceiling on tiny canvases.
        assert_eq!(auto_font_size(1, 6), MIN_AUTO_FONT_SIZE);
        assert_eq!(auto_font_size(1, 0), MIN_AUTO_FONT_SIZE);
    }

    #[test]
    fn test_auto_font_size_monotonic_and_bounded() {
        for size in [12u32, 16, 30, 50, 64, 128, 256, 1000] {
            let mut previous = f32::INFINITY;
            for n in 0..40 {
                let fs = auto_font_size(n, size);
                assert!(fs <= previous, "size {size}: n={n} grew {previous} -> {fs}");
                assert!(fs >= MIN_AUTO_FONT_SIZE);
                assert!(fs <= size as f32);
                previous = fs;
            }
        }
    }

    #[test]
    fn test_resolve_font_size() {
        assert_eq!(resolve_font_size(17.5, 3, 100), 17.5);
        assert_eq!(resolve_font_size(0.0, 1, 90), auto_font_size(1, 90));
        assert_eq!(resolve_font_size(-4.0, 2, 90), auto_font_size(2, 90));
    }

    #[test]
    fn test_measure_ceils_each_extent() {
        let face = FixedFace::new(10.0);
        let extents = measure_text(&face, &['A', 'B']);
        assert_eq!(
            extents,
            TextExtents {
                width: 21, // 20.8
                ascent: 8, // 7.2
                descent: 3, // 2.1
                line_gap: -1, // ceil(9.8) - 8 - 3
            }
        );
    }

    #[test]
    fn test_measure_positive_line_gap() {
        let mut face = FixedFace::new(10.0);
        face.metrics = LineMetrics {
            ascent: 7.0,
            descent: 2.0,
            line_gap: 2.5,
        };
        // ceil(11.5) - 7 - 2
        assert_eq!(measure_text(&face, &['A']).line_gap, 3);
    }

    #[test]
    fn test_measure_missing_glyph_uses_space() {
        let face = FixedFace::new(10.0);
        assert_eq!(measure_text(&face, &['A', '?']).width, 15); // 10.4 + 4.5
    }

    #[test]
    fn test_measure_empty_text() {
        let face = FixedFace::new(10.0);
        let extents = measure_text(&face, &[]);
        assert_eq!(extents.width, 0);
        assert_eq!(extents.ascent, 8);
    }

    #[test]
    fn test_center_anchor() {
        let extents = TextExtents {
            width: 20,
            ascent: 30,
            descent: 8,
            line_gap: 0,
        };
        assert_eq!(center_anchor(50, &extents), (15, 25 + 11));
    }

    #[test]
    fn test_center_anchor_odd_values_truncate() {
        let extents = TextExtents {
            width: 21,
            ascent: 9,
            descent: 4,
            line_gap: 0,
        };
        // (50 - 21) / 2 = 14, 25 + 5 / 2 = 27
        assert_eq!(center_anchor(50, &extents), (14, 27));
    }

    #[test]
    fn test_center_anchor_wide_text_not_clamped() {
        let extents = TextExtents {
            width: 75,
            ascent: 10,
            descent: 3,
            line_gap: 0,
        };
        // (40 - 75) / 2 truncates toward zero.
        assert_eq!(center_anchor(40, &extents).0, -17);
    }

    #[test]
    fn test_layout_uses_factory_with_resolved_size() {
        let mut requested = None;
        let (face, result) = layout(&['A', 'B'], 60, 0.0, |size| {
            requested = Some(size);
            Ok(FixedFace::new(size))
        })
        .unwrap();

        assert_eq!(requested, Some(auto_font_size(2, 60)));
        assert_eq!(face.size(), result.font_size);
        assert_eq!(result.width, 21);
        assert_eq!(result.anchor(), ((60 - 21) / 2, 30 + (8 - 3) / 2));
    }

    #[test]
    fn test_layout_propagates_factory_error() {
        let result = layout::<FixedFace, _>(&['A'], 60, 0.0, |size| Err(FontFaceError::InvalidSize(size)));
        assert!(matches!(result, Err(FontFaceError::InvalidSize(_))));
    }

    #[test]
    fn test_layout_with_bundled_font() {
        let font = FontResource::bundled();
        let (face, result) = layout_with_font(&['Z'], 50, 0.0, &font).unwrap();

        assert!((face.size() - 50.0 * 2.0 / 3.0).abs() < 1e-4);
        assert!(result.width > 0 && result.width < 50);
        assert!(result.ascent > result.descent);
        assert!(result.x > 0);
        assert!(result.y > 25 && result.y < 50);
    }

    #[test]
    fn test_layout_with_font_on_large_canvas() {
        let font = FontResource::bundled();
        let (face, result) = layout_with_font(&['A'], 6200, 0.0, &font).unwrap();
        assert!((face.size() - 6200.0 * 2.0 / 3.0).abs() < 1e-2);
        assert!(result.width > 0 && result.width < 6200);
        assert!(result.x > 0);
    }

    #[test]
    fn test_layout_with_explicit_size() {
        let font = FontResource::bundled();
        let (face, result) = layout_with_font(&['A', 'B', 'C'], 40, 20.0, &font).unwrap();
        assert_eq!(face.size(), 20.0);
        assert_eq!(result.font_size, 20.0);
    }

    #[test]
    fn test_layout_with_bad_font() {
        let font = FontResource::from_vec(vec![0u8; 64]);
        let result = layout_with_font(&['A'], 40, 0.0, &font);
        assert!(matches!(result, Err(FontFaceError::NoFace)));
    }
}
