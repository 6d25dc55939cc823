// ── Reference in-memory frame buffer ──────────────────────────────────────────
//
// Stores one `u32` per pixel, masked to the bit depth of the pixel format, so
// that drawing results can be inspected directly in tests and exported as PNG.
// Packing into the hardware byte layout is left to the display driver.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::Surface;
use crate::error::GfxError;

// ── PixelFormat ───────────────────────────────────────────────────────────────

/// Pixel layouts supported by common small display controllers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 1 bit per pixel, vertically packed bytes, LSB at the top.
    MonoVlsb,
    /// 1 bit per pixel, horizontally packed bytes, MSB at the left.
    MonoHlsb,
    /// 1 bit per pixel, horizontally packed bytes, LSB at the left.
    MonoHmsb,
    /// 16-bit 5-6-5 RGB.
    Rgb565,
    /// 2-bit grayscale.
    Gs2Hmsb,
    /// 4-bit grayscale.
    Gs4Hmsb,
    /// 8-bit grayscale.
    Gs8,
}

impl PixelFormat {
    /// Bits of color stored per pixel.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::MonoVlsb | PixelFormat::MonoHlsb | PixelFormat::MonoHmsb => 1,
            PixelFormat::Gs2Hmsb => 2,
            PixelFormat::Gs4Hmsb => 4,
            PixelFormat::Gs8 => 8,
            PixelFormat::Rgb565 => 16,
        }
    }

    /// Mask applied to every color written into a buffer of this format.
    pub fn color_mask(self) -> u32 {
        (1u32 << self.bits_per_pixel()) - 1
    }

    /// Convert a stored color to 8-bit RGBA for previews.
    fn to_rgba(self, color: u32) -> Rgba<u8> {
        match self {
            PixelFormat::Rgb565 => {
                let r = (color >> 11) & 0x1F;
                let g = (color >> 5) & 0x3F;
                let b = color & 0x1F;
                Rgba([
                    ((r * 255) / 31) as u8,
                    ((g * 255) / 63) as u8,
                    ((b * 255) / 31) as u8,
                    0xFF,
                ])
            }
            _ => {
                let max = self.color_mask();
                let l = ((color * 255) / max) as u8;
                Rgba([l, l, l, 0xFF])
            }
        }
    }
}

// ── FrameBuffer ───────────────────────────────────────────────────────────────

/// Owned pixel grid implementing [`Surface`] with clipping.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a cleared (all zero) buffer.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set every pixel to `color` (use `0` to clear).
    pub fn fill(&mut self, color: u32) {
        let color = color & self.format.color_mask();
        self.pixels.fill(color);
    }

    /// Number of pixels currently holding `color`.
    pub fn count_color(&self, color: u32) -> usize {
        let color = color & self.format.color_mask();
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Coordinates of every pixel that is not zero, row-major.
    pub fn lit_pixels(&self) -> Vec<(i32, i32)> {
        let w = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != 0)
            .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
            .collect()
    }

    /// Render the buffer as an RGBA image.
    ///
    /// Monochrome and grayscale values are stretched to the full 0–255 range;
    /// RGB565 channels are expanded to 8 bits each.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let color = self.pixels[y as usize * self.width as usize + x as usize];
            *px = self.format.to_rgba(color);
        }
        img
    }

    /// Write the buffer to `path` as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), GfxError> {
        self.to_rgba_image().save(path)?;
        Ok(())
    }
}

impl Surface for FrameBuffer {
    fn pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color & self.format.color_mask();
        }
    }

    fn hline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        if len <= 0 || y < 0 || y as u32 >= self.height {
            return;
        }
        let x_start = x.max(0);
        let x_end = (x + len).min(self.width as i32);
        if x_start >= x_end {
            return;
        }
        let row = y as usize * self.width as usize;
        let color = color & self.format.color_mask();
        self.pixels[row + x_start as usize..row + x_end as usize].fill(color);
    }

    fn vline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        if len <= 0 || x < 0 || x as u32 >= self.width {
            return;
        }
        let y_start = y.max(0);
        let y_end = (y + len).min(self.height as i32);
        let color = color & self.format.color_mask();
        for yy in y_start..y_end {
            let i = yy as usize * self.width as usize + x as usize;
            self.pixels[i] = color;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        if w <= 0 || h <= 0 {
            return;
        }
        for yy in y..y + h {
            self.hline(x, yy, w, color);
        }
    }
}
