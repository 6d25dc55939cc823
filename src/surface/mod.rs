// =============================================================================
// SURFACE — the pixel-buffer capability the rasterizer draws through
//
// Anything that can set a pixel can be drawn on.  The run, line and rectangle
// primitives have straightforward defaults built on `pixel`; buffers with
// faster native routines (hardware fills, packed byte writes) override them.
// =============================================================================

mod framebuffer;

pub use framebuffer::{FrameBuffer, PixelFormat};

use crate::glyph::{self, Glyph};

/// Addressable 2D pixel buffer.
///
/// Coordinates may lie outside the buffer; implementations clip.  Colors are
/// raw values in the buffer's own pixel format.
pub trait Surface {
    /// Set a single pixel.
    fn pixel(&mut self, x: i32, y: i32, color: u32);

    /// Horizontal run of `len` pixels starting at `(x, y)` going right.
    fn hline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        for dx in 0..len {
            self.pixel(x + dx, y, color);
        }
    }

    /// Vertical run of `len` pixels starting at `(x, y)` going down.
    fn vline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        for dy in 0..len {
            self.pixel(x, y + dy, color);
        }
    }

    /// Straight line including both endpoints.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        walk_line(x0, y0, x1, y1, |x, y| self.pixel(x, y, color));
    }

    /// Solid `w × h` rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for dy in 0..h {
            self.hline(x, y + dy, w, color);
        }
    }

    /// 8×8 bitmap for `ch`.  Defaults to the built-in ASCII font.
    fn glyph(&self, ch: char) -> Glyph {
        glyph::builtin(ch)
    }
}

// =============================================================================
// BRESENHAM'S LINE ALGORITHM
// =============================================================================

/// Plot every point of the line from `(x0, y0)` to `(x1, y1)`, both
/// endpoints included, stepping from the first towards the second.
pub fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let (mut x, mut y) = (x0, y0);
    let mut err = dx - dy;
    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            return;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
