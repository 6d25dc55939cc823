// ── Large text rendering ──────────────────────────────────────────────────────
//
// Glyphs are blitted from the surface's 8×8 font.  Each set bit is mapped
// through a quarter-turn rotation of the glyph cell and then either plotted
// (scale 1) or drawn as a `scale × scale` block.

use glam::IVec2;

use crate::config::{CHAR_PIX, TextConfig};
use crate::error::GfxError;
use crate::glyph::{GLYPH_SIZE, Glyph};
use crate::surface::Surface;
use crate::text::wrap::TextWrapper;

// ── Rotation ──────────────────────────────────────────────────────────────────

/// Rotation in 90° steps, clockwise on a y-down screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Normalise any angle to `0..360` and round down to a quarter turn,
    /// so `-90` is `Deg270` and `135` is `Deg90`.
    pub fn from_degrees(degrees: i32) -> Self {
        Self::from_quarter_turns(degrees.rem_euclid(360) / 90)
    }

    /// `turns` is taken modulo 4.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    pub fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    /// Glyph-cell transform for this rotation.
    pub fn transform(self) -> GlyphTransform {
        QUARTER_TURNS[self.quarter_turns()]
    }

    /// Cursor step between characters for a cell of `cell` pixels.
    ///
    /// Text at 0° and 180° runs horizontally, at 90° and 270° vertically.
    /// The step is always positive; upside-down text is drawn by reversing
    /// the characters instead.
    pub fn advance(self, cell: i32) -> IVec2 {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => IVec2::new(cell, 0),
            Rotation::Deg90 | Rotation::Deg270 => IVec2::new(0, cell),
        }
    }

    /// Whether characters are laid out last to first.
    pub fn reverses_text(self) -> bool {
        matches!(self, Rotation::Deg180 | Rotation::Deg270)
    }
}

// ── GlyphTransform ────────────────────────────────────────────────────────────

/// Integer 2×2 rotation `{a, b, c, d}` of an 8×8 glyph cell.
///
/// Bit `(i, j)` lands at `origin + (a·i + c·j, b·i + d·j)`, where the origin
/// moves to the far edge on any axis the rotation flips, keeping the glyph
/// inside its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphTransform {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
}

/// Indexed by quarter turns.  Entry `n + 1` is entry `n` with
/// `(a, b, c, d) → (c, d, -a, -b)`.
pub const QUARTER_TURNS: [GlyphTransform; 4] = [
    GlyphTransform { a: 1, b: 0, c: 0, d: 1 },
    GlyphTransform { a: 0, b: 1, c: -1, d: 0 },
    GlyphTransform { a: -1, b: 0, c: 0, d: -1 },
    GlyphTransform { a: 0, b: -1, c: 1, d: 0 },
];

impl GlyphTransform {
    /// Cell offset that keeps rotated bits in `0..8` on both axes.
    pub fn origin(self) -> IVec2 {
        let far = GLYPH_SIZE as i32 - 1;
        IVec2::new(
            if self.a + self.c > 0 { 0 } else { far },
            if self.b + self.d > 0 { 0 } else { far },
        )
    }

    /// Position of glyph bit `(i, j)` inside the rotated cell.
    #[inline]
    pub fn apply(self, i: i32, j: i32) -> IVec2 {
        self.origin() + IVec2::new(self.a * i + self.c * j, self.b * i + self.d * j)
    }
}

// ── TextStyle ─────────────────────────────────────────────────────────────────

/// How a run of text is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Integer magnification; each glyph occupies `8 * scale` pixels.
    pub scale: u32,
    /// Raw color in the surface's pixel format.
    pub color: u32,
    /// Direction the text runs in.
    pub rotation: Rotation,
    /// Rotation of each glyph in its cell.  `None` follows `rotation`.
    pub char_rotation: Option<Rotation>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { scale: 1, color: 1, rotation: Rotation::Deg0, char_rotation: None }
    }
}

impl TextStyle {
    pub fn new(scale: u32, color: u32) -> Self {
        Self { scale, color, ..Self::default() }
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn char_rotated(mut self, rotation: Rotation) -> Self {
        self.char_rotation = Some(rotation);
        self
    }

    /// Rotation actually applied to each glyph.
    pub fn glyph_rotation(&self) -> Rotation {
        self.char_rotation.unwrap_or(self.rotation)
    }
}

pub(crate) fn checked_scale(scale: u32) -> Result<i32, GfxError> {
    match i32::try_from(scale) {
        Ok(m) if m >= 1 => Ok(m),
        _ => Err(GfxError::invalid(format!("scale out of range: {scale}"))),
    }
}

// ── draw_text ─────────────────────────────────────────────────────────────────

/// Draw one line of `text` with its first cell at `(x, y)`.
///
/// Fails only when `style.scale` is zero.
pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    style: &TextStyle,
) -> Result<(), GfxError> {
    let m = checked_scale(style.scale)?;
    let advance = style.rotation.advance(CHAR_PIX * m);
    let transform = style.glyph_rotation().transform();
    let mut cursor = IVec2::new(x, y);

    let mut render = |ch: char| {
        let scratch = surface.glyph(ch);
        blit_glyph(&mut *surface, &scratch, cursor, transform, m, style.color);
        cursor += advance;
    };

    if style.rotation.reverses_text() {
        text.chars().rev().for_each(&mut render);
    } else {
        text.chars().for_each(&mut render);
    }
    Ok(())
}

fn blit_glyph<S: Surface + ?Sized>(
    surface: &mut S,
    glyph: &Glyph,
    at: IVec2,
    transform: GlyphTransform,
    m: i32,
    color: u32,
) {
    for (i, j) in glyph.set_bits() {
        let p = transform.apply(i, j);
        if m == 1 {
            surface.pixel(at.x + p.x, at.y + p.y, color);
        } else {
            surface.fill_rect(at.x + p.x * m, at.y + p.y * m, m, m, color);
        }
    }
}

// ── Wrapped text ──────────────────────────────────────────────────────────────

/// Characters of `8 * scale` pixels that fit in `max_line_px`.
///
/// Fails when the width is not positive or holds less than one character.
pub fn max_chars_per_line(scale: u32, max_line_px: i32) -> Result<usize, GfxError> {
    if max_line_px <= 0 {
        return Err(GfxError::invalid(format!(
            "max line width must be positive, got {max_line_px}px"
        )));
    }
    let m = checked_scale(scale)?;
    let max_chars = max_line_px / CHAR_PIX.saturating_mul(m);
    if max_chars < 1 {
        return Err(GfxError::invalid(format!(
            "{max_line_px}px cannot hold one character at scale {scale}"
        )));
    }
    Ok(max_chars as usize)
}

/// Draw `lines` top to bottom, `pitch` pixels apart.  Blank lines are not
/// drawn but still take up their row.
pub(crate) fn draw_lines<S: Surface + ?Sized>(
    surface: &mut S,
    lines: &[String],
    x: i32,
    y: i32,
    style: &TextStyle,
    pitch: i32,
) -> Result<(), GfxError> {
    let mut line_y = y;
    for line in lines {
        if !line.trim().is_empty() {
            draw_text(surface, line, x, line_y, style)?;
        }
        line_y += pitch;
    }
    Ok(())
}

/// Word-wrap `text` to `max_line_px` and draw it line by line.
///
/// Lines are `8·scale + leading` pixels apart.  Returns the number of lines
/// laid out, blank ones included.
pub fn draw_text_wrapped<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    style: &TextStyle,
    max_line_px: i32,
    config: &TextConfig,
) -> Result<usize, GfxError> {
    let max_chars = max_chars_per_line(style.scale, max_line_px)?;
    let lines = TextWrapper::new(config).wrap(text, max_chars)?;
    draw_lines(surface, &lines, x, y, style, config.wrap_pitch(style.scale))?;
    Ok(lines.len())
}
