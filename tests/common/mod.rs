// ── Recording surface shared by the integration tests ─────────────────────────

#![allow(dead_code)]

use std::collections::BTreeSet;

use framegfx::Surface;

/// One primitive call as seen by the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Pixel { x: i32, y: i32, color: u32 },
    HLine { x: i32, y: i32, len: i32, color: u32 },
    VLine { x: i32, y: i32, len: i32, color: u32 },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: u32 },
    FillRect { x: i32, y: i32, w: i32, h: i32, color: u32 },
}

/// Logs every call instead of drawing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pixel the logged calls would touch (lines excluded).
    pub fn covered(&self) -> BTreeSet<(i32, i32)> {
        let mut out = BTreeSet::new();
        for op in &self.ops {
            match *op {
                Op::Pixel { x, y, .. } => {
                    out.insert((x, y));
                }
                Op::HLine { x, y, len, .. } => out.extend((0..len).map(|d| (x + d, y))),
                Op::VLine { x, y, len, .. } => out.extend((0..len).map(|d| (x, y + d))),
                Op::FillRect { x, y, w, h, .. } => {
                    for dy in 0..h {
                        out.extend((0..w).map(|dx| (x + dx, y + dy)));
                    }
                }
                Op::Line { .. } => {}
            }
        }
        out
    }
}

impl Surface for Recorder {
    fn pixel(&mut self, x: i32, y: i32, color: u32) {
        self.ops.push(Op::Pixel { x, y, color });
    }
    fn hline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        self.ops.push(Op::HLine { x, y, len, color });
    }
    fn vline(&mut self, x: i32, y: i32, len: i32, color: u32) {
        self.ops.push(Op::VLine { x, y, len, color });
    }
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        self.ops.push(Op::Line { x0, y0, x1, y1, color });
    }
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        self.ops.push(Op::FillRect { x, y, w, h, color });
    }
}
