// ── Fit-to-window ─────────────────────────────────────────────────────────────
//
// Shrinks the text scale one step at a time until the wrapped block fits the
// window, then draws it.  Nothing is drawn unless the whole block fits.

use crate::config::TextConfig;
use crate::error::GfxError;
use crate::surface::Surface;
use crate::text::render::{TextStyle, draw_lines, max_chars_per_line};
use crate::text::wrap::TextWrapper;

/// Result of a successful fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FitOutcome {
    /// Largest scale, not above the requested one, at which the block fits.
    pub scale: u32,
    /// Lines in the block, blank ones included.
    pub lines: usize,
}

/// Find the largest scale `<= scale` at which `text` fits in a
/// `max_w_px × max_h_px` window, without drawing.
///
/// At each scale the window holds `max_w_px / (8·s)` characters per line and
/// `max_h_px / ((8 + leading)·s)` lines.
///
/// # Errors
/// - [`GfxError::InvalidArgument`] for a zero scale, a non-positive window
///   dimension, or a width narrower than one character at the requested
///   scale.
/// - [`GfxError::DoesNotFit`] when the block is still too tall at scale 1.
pub fn layout_fit(
    text: &str,
    scale: u32,
    max_w_px: i32,
    max_h_px: i32,
    config: &TextConfig,
) -> Result<(FitOutcome, Vec<String>), GfxError> {
    if max_w_px <= 0 || max_h_px <= 0 {
        return Err(GfxError::invalid(format!(
            "window must be positive, got {max_w_px}x{max_h_px}px"
        )));
    }
    let wrapper = TextWrapper::new(config);
    let mut scale = scale;
    loop {
        // Only the requested scale can be narrower than one character, and
        // that is reported rather than shrunk away.
        let max_chars = max_chars_per_line(scale, max_w_px)?;
        let max_lines = (max_h_px / config.line_pitch(scale)) as usize;

        let lines = wrapper.wrap(text, max_chars)?;
        if lines.len() <= max_lines {
            tracing::debug!(scale, lines = lines.len(), max_lines, "text fits");
            return Ok((FitOutcome { scale, lines: lines.len() }, lines));
        }
        if scale == 1 {
            return Err(GfxError::DoesNotFit { lines: lines.len(), max_lines });
        }
        tracing::debug!(scale, lines = lines.len(), max_lines, "block too tall, shrinking");
        scale -= 1;
    }
}

/// Wrap `text` into the window at `(x, y)`, shrinking `style.scale` as far as
/// needed, and draw it.
///
/// Lines are `(8 + leading)·scale` pixels apart; blank lines are skipped but
/// keep their row.  On error the surface is left untouched.
#[allow(clippy::too_many_arguments)]
pub fn fit_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    style: &TextStyle,
    max_w_px: i32,
    max_h_px: i32,
    config: &TextConfig,
) -> Result<FitOutcome, GfxError> {
    let (outcome, lines) = layout_fit(text, style.scale, max_w_px, max_h_px, config)?;
    let fitted = TextStyle { scale: outcome.scale, ..*style };
    draw_lines(surface, &lines, x, y, &fitted, config.line_pitch(outcome.scale))?;
    Ok(outcome)
}
