// =============================================================================
// SHAPES.RS — Circle and triangle rasterizer
//
// Integer-only drawing on top of the `Surface` primitives:
// - Midpoint circle, outline (8-way symmetric points) and filled (vertical runs)
// - Triangle outline (three lines) and scanline fill
// =============================================================================

use glam::IVec2;

use crate::surface::Surface;

// =============================================================================
// MIDPOINT CIRCLE
// =============================================================================

/// Incremental state of the midpoint circle walk for one octant.
///
/// Starts at the top of the circle (`x = 0`, `y = radius`) and yields each
/// subsequent `(x, y)` while `x < y`.
struct CircleSteps {
    x: i32,
    y: i32,
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
}

impl CircleSteps {
    fn new(radius: i32) -> Self {
        Self { x: 0, y: radius, f: 1 - radius, ddf_x: 1, ddf_y: -2 * radius }
    }
}

impl Iterator for CircleSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

/// Draw a circle of `radius` centred on `(cx, cy)`.
///
/// The outline is one pixel wide.  When `filled` is set the disc is drawn
/// with vertical runs instead: one through the centre, then four per step of
/// the walk.  A radius of 0 draws a single pixel; a negative radius draws
/// nothing.
pub fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: i32,
    color: u32,
    filled: bool,
) {
    if radius < 0 {
        return;
    }

    if filled {
        surface.vline(cx, cy - radius, 2 * radius + 1, color);
        for (x, y) in CircleSteps::new(radius) {
            surface.vline(cx + x, cy - y, 2 * y + 1, color);
            surface.vline(cx + y, cy - x, 2 * x + 1, color);
            surface.vline(cx - x, cy - y, 2 * y + 1, color);
            surface.vline(cx - y, cy - x, 2 * x + 1, color);
        }
    } else {
        surface.pixel(cx, cy + radius, color);
        surface.pixel(cx, cy - radius, color);
        surface.pixel(cx + radius, cy, color);
        surface.pixel(cx - radius, cy, color);
        for (x, y) in CircleSteps::new(radius) {
            surface.pixel(cx + x, cy + y, color);
            surface.pixel(cx - x, cy + y, color);
            surface.pixel(cx + x, cy - y, color);
            surface.pixel(cx - x, cy - y, color);
            surface.pixel(cx + y, cy + x, color);
            surface.pixel(cx - y, cy + x, color);
            surface.pixel(cx + y, cy - x, color);
            surface.pixel(cx - y, cy - x, color);
        }
    }
}

// =============================================================================
// TRIANGLE
// =============================================================================

/// Draw the triangle with corners `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
///
/// Outline mode draws the three edges with [`Surface::line`].  Filled mode is
/// a scanline fill using floor-divided edge intercepts; see
/// [`fill_triangle`].
#[allow(clippy::too_many_arguments)]
pub fn draw_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: u32,
    filled: bool,
) {
    if filled {
        fill_triangle(surface, IVec2::new(x0, y0), IVec2::new(x1, y1), IVec2::new(x2, y2), color);
    } else {
        surface.line(x0, y0, x1, y1, color);
        surface.line(x1, y1, x2, y2, color);
        surface.line(x2, y2, x0, y0, color);
    }
}

/// [`draw_triangle`] taking the corners as points.
pub fn draw_triangle_points<S: Surface + ?Sized>(
    surface: &mut S,
    corners: [IVec2; 3],
    color: u32,
    filled: bool,
) {
    let [a, b, c] = corners;
    draw_triangle(surface, a.x, a.y, b.x, b.y, c.x, c.y, color, filled);
}

/// Scanline-fill a triangle.
///
/// Corners are sorted top to bottom.  If all three share a row the triangle
/// collapses to a single run spanning the leftmost to the rightmost corner.
/// Otherwise rows `v0.y..=v1.y` are filled between the v0→v1 and v0→v2 edges
/// (the first row is skipped when the top edge is flat), and the remaining
/// rows down to `v2.y` between v1→v2 and v0→v2.
///
/// An edge with zero height divides by 1 instead of 0.  Intercepts use floor
/// division, so left-leaning edges round away from the edge's start.
pub fn fill_triangle<S: Surface + ?Sized>(
    surface: &mut S,
    v0: IVec2,
    v1: IVec2,
    v2: IVec2,
    color: u32,
) {
    let (mut v0, mut v1, mut v2) = (v0, v1, v2);
    if v0.y > v1.y {
        std::mem::swap(&mut v0, &mut v1);
    }
    if v1.y > v2.y {
        std::mem::swap(&mut v1, &mut v2);
    }
    if v0.y > v1.y {
        std::mem::swap(&mut v0, &mut v1);
    }

    if v0.y == v2.y {
        let a = v0.x.min(v1.x).min(v2.x);
        let b = v0.x.max(v1.x).max(v2.x);
        surface.hline(a, v0.y, b - a + 1, color);
        return;
    }

    let dx01 = v1.x - v0.x;
    let dy01 = nonzero(v1.y - v0.y);
    let dx02 = v2.x - v0.x;
    let dy02 = nonzero(v2.y - v0.y);
    let dx12 = v2.x - v1.x;
    let dy12 = nonzero(v2.y - v1.y);

    let last = if v0.y == v1.y { v1.y - 1 } else { v1.y };

    let mut sa: i32 = 0;
    let mut sb: i32 = 0;
    let mut y = v0.y;

    // Upper part: v0→v1 against v0→v2.
    while y <= last {
        let a = v0.x + sa.div_euclid(dy01);
        let b = v0.x + sb.div_euclid(dy02);
        sa += dx01;
        sb += dx02;
        span(surface, a, b, y, color);
        y += 1;
    }

    // Lower part: v1→v2 against v0→v2.
    sa = dx12 * (y - v1.y);
    sb = dx02 * (y - v0.y);
    while y <= v2.y {
        let a = v1.x + sa.div_euclid(dy12);
        let b = v0.x + sb.div_euclid(dy02);
        sa += dx12;
        sb += dx02;
        span(surface, a, b, y, color);
        y += 1;
    }
}

#[inline]
fn nonzero(d: i32) -> i32 {
    if d == 0 { 1 } else { d }
}

/// Inclusive horizontal run between two intercepts in either order.
#[inline]
fn span<S: Surface + ?Sized>(surface: &mut S, a: i32, b: i32, y: i32, color: u32) {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    surface.hline(a, y, b - a + 1, color);
}
