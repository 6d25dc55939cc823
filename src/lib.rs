pub mod config;
pub mod error;
pub mod glyph;
pub mod shapes;
pub mod surface;
pub mod text;

pub use config::{CHAR_PIX, LINE_LEADING_PIX, TextConfig};
pub use error::GfxError;
pub use glyph::Glyph;
pub use surface::{FrameBuffer, PixelFormat, Surface};
