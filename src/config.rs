// ── Constants ─────────────────────────────────────────────────────────────────

use serde::Deserialize;

use crate::error::GfxError;

/// Width and height of one glyph cell at scale 1, in pixels.
pub const CHAR_PIX: i32 = 8;

/// Blank pixels between two text lines at scale 1.
pub const LINE_LEADING_PIX: u32 = 4;

/// Characters after (or, for whitespace, at) which a line may be broken.
pub const WORD_DELIMITERS: &str = " -.\t!?;:";

/// Whitespace that is dropped when a line breaks on it.
pub const BREAK_WHITESPACE: &str = " \t";

/// Appended to a word that had to be split because no delimiter was found.
pub const HYPHEN: char = '-';

// ── TextConfig ────────────────────────────────────────────────────────────────

/// Tunable parameters for text layout.
///
/// Every field is optional in JSON; missing fields fall back to the
/// constants above:
///
/// ```json
/// { "line_leading": 2, "word_delimiters": " -", "hyphen": "~" }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Blank pixels between lines.  Scaled with the text when fitting to a
    /// window, added unscaled when wrapping to a fixed width.
    pub line_leading: u32,
    /// Legal break points for the word wrapper.
    pub word_delimiters: String,
    /// Character appended to force-split words.
    pub hyphen: char,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            line_leading: LINE_LEADING_PIX,
            word_delimiters: WORD_DELIMITERS.to_string(),
            hyphen: HYPHEN,
        }
    }
}

impl TextConfig {
    /// Deserialise a `TextConfig` from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GfxError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Vertical distance between the tops of two consecutive lines of a
    /// fitted block: `(8 + leading)·scale`.
    pub fn line_pitch(&self, scale: u32) -> i32 {
        (CHAR_PIX + self.line_leading as i32).saturating_mul(scale as i32)
    }

    /// Line pitch for text wrapped to a fixed width: `8·scale + leading`.
    pub fn wrap_pitch(&self, scale: u32) -> i32 {
        CHAR_PIX
            .saturating_mul(scale as i32)
            .saturating_add(self.line_leading as i32)
    }
}
