// Demo: draws a small status screen the size of a 128×64 OLED and writes it
// to a PNG.
//
//     cargo run -- [output.png]
//
// Set RUST_LOG=framegfx=debug to watch the fit search.

use framegfx::shapes::{draw_circle, draw_triangle};
use framegfx::text::{Rotation, TextStyle, draw_text, fit_text};
use framegfx::{FrameBuffer, GfxError, PixelFormat, Surface, TextConfig};
use tracing_subscriber::EnvFilter;

// ── Layout ──────────────────────────────────────────────────────────────────
const WIDTH: u32 = 128;
const HEIGHT: u32 = 64;
const ON: u32 = 1;

const MESSAGE: &str = "LOW\nBATT";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "framegfx-demo.png".to_string());

    if let Err(e) = run(&out) {
        eprintln!("demo failed: {e}");
        std::process::exit(1);
    }
    println!("wrote {out}");
}

fn run(out: &str) -> Result<(), GfxError> {
    let mut fb = FrameBuffer::new(WIDTH, HEIGHT, PixelFormat::MonoHlsb);
    let config = TextConfig::default();

    // Frame and a vertical title down the left edge.
    fb.line(0, 0, WIDTH as i32 - 1, 0, ON);
    fb.line(0, HEIGHT as i32 - 1, WIDTH as i32 - 1, HEIGHT as i32 - 1, ON);
    draw_text(&mut fb, "PWR", 2, 4, &TextStyle::new(1, ON).rotated(Rotation::Deg90))?;
    fb.vline(12, 1, HEIGHT as i32 - 2, ON);

    // Gauge: an outlined dial with a filled hub and a triangular needle.
    draw_circle(&mut fb, 108, 32, 16, ON, false);
    draw_circle(&mut fb, 108, 32, 3, ON, true);
    draw_triangle(&mut fb, 106, 32, 110, 32, 98, 20, ON, true);

    // Message panel between the title bar and the gauge, largest scale that fits.
    let outcome = fit_text(&mut fb, MESSAGE, 15, 3, &TextStyle::new(3, ON), 74, 58, &config)?;
    tracing::info!(scale = outcome.scale, lines = outcome.lines, "message placed");

    fb.save_png(out)
}
