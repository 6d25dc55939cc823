pub mod fit;
pub mod render;
pub mod wrap;

pub use fit::{FitOutcome, fit_text, layout_fit};
pub use render::{
    GlyphTransform, QUARTER_TURNS, Rotation, TextStyle, draw_text, draw_text_wrapped,
    max_chars_per_line,
};
pub use wrap::{TextWrapper, WrapLines, find_word_break, wrap};
