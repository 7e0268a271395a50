//! CPU compositor: flat background plus coverage-blended text.
//!
//! Colors are straight (non-premultiplied) RGBA throughout. Glyph
//! coverage scales the foreground alpha, and the result is blended
//! source-over onto the background in integer math; an opaque
//! background stays opaque.

use image::{Rgba, RgbaImage};
use initials_core::Color;
use initials_text::TextFace;

/// Output pixel buffer.
pub type Canvas = RgbaImage;

/// Allocate a `width × height` canvas with every pixel set to `fill`.
///
/// Pixels are replaced, not blended, so a translucent fill stays
/// translucent.
pub fn new_canvas(width: u32, height: u32, fill: Color) -> Canvas {
    RgbaImage::from_pixel(width, height, Rgba(fill.to_array()))
}

/// Foreground pixel for one glyph coverage sample.
fn coverage_pixel(foreground: Color, coverage: u8) -> Rgba<u8> {
    let alpha = u16::from(coverage) * u16::from(foreground.a) / 255;
    Rgba([foreground.r, foreground.g, foreground.b, alpha as u8])
}

/// `x / 255`, rounded to nearest.
fn div255(x: u32) -> u32 {
    (x + 127) / 255
}

/// Straight-alpha source-over: `src` on top of `dst`.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = u32::from(src.0[3]);
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = src;
        return;
    }

    let da = u32::from(dst.0[3]);
    // Destination weight after the source covers `sa` of it.
    let dw = div255(da * (255 - sa));
    let out_a = sa + dw;

    for c in 0..3 {
        let sp = u32::from(src.0[c]) * sa;
        let dp = u32::from(dst.0[c]) * dw;
        dst.0[c] = ((sp + dp + out_a / 2) / out_a).min(255) as u8;
    }
    dst.0[3] = out_a.min(255) as u8;
}

/// Draw `text` onto `canvas` with its baseline starting at `anchor`.
///
/// Pixels outside the canvas are dropped.
pub fn draw_text<F: TextFace>(
    canvas: &mut Canvas,
    face: &mut F,
    text: &[char],
    anchor: (i32, i32),
    foreground: Color,
) {
    let (width, height) = canvas.dimensions();
    face.draw_text(text, anchor, |x, y, coverage| {
        let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if px >= width || py >= height {
            return;
        }
        blend_over(canvas.get_pixel_mut(px, py), coverage_pixel(foreground, coverage));
    });
}

/// Build a `size × size` avatar: `background` fill, then `text` in
/// `foreground` at `anchor`.
pub fn compose<F: TextFace>(
    size: u32,
    background: Color,
    foreground: Color,
    face: &mut F,
    text: &[char],
    anchor: (i32, i32),
) -> Canvas {
    let mut canvas = new_canvas(size, size, background);
    if !text.is_empty() {
        draw_text(&mut canvas, face, text, anchor, foreground);
    }
    canvas
}

// ===================================================================
// Tests
// ===================================================================
