mod common;

use common::{Op, Recorder};
use framegfx::text::{FitOutcome, TextStyle, fit_text, layout_fit};
use framegfx::{GfxError, TextConfig};

fn cfg() -> TextConfig {
    TextConfig::default()
}

#[test]
fn keeps_scale_when_text_fits() {
    let mut rec = Recorder::new();
    let outcome = fit_text(&mut rec, "hi", 0, 0, &TextStyle::new(2, 1), 64, 24, &cfg()).unwrap();
    assert_eq!(outcome, FitOutcome { scale: 2, lines: 1 });
    assert!(!rec.ops.is_empty());
    assert!(rec.ops.iter().all(|op| matches!(op, Op::FillRect { w: 2, h: 2, .. })));
}

#[test]
fn shrinks_until_block_fits() {
    // Scale 4 and 3 leave room for one line of at most 4 characters; scale 2
    // gives two lines of six, enough for "hello" / "world".
    let (outcome, lines) = layout_fit("hello world", 4, 96, 48, &cfg()).unwrap();
    assert_eq!(outcome, FitOutcome { scale: 2, lines: 2 });
    assert_eq!(lines, ["hello", "world"]);
}

#[test]
fn shrinks_to_scale_one() {
    let (outcome, lines) = layout_fit("hello world", 4, 96, 30, &cfg()).unwrap();
    assert_eq!(outcome, FitOutcome { scale: 1, lines: 1 });
    assert_eq!(lines, ["hello world"]);
}

#[test]
fn draws_at_the_fitted_scale() {
    let mut rec = Recorder::new();
    let outcome =
        fit_text(&mut rec, "hello world", 0, 0, &TextStyle::new(4, 1), 96, 30, &cfg()).unwrap();
    assert_eq!(outcome.scale, 1);
    assert!(rec.ops.iter().all(|op| matches!(op, Op::Pixel { .. })));
}

#[test]
fn does_not_fit_draws_nothing() {
    let mut rec = Recorder::new();
    let err = fit_text(&mut rec, "a b c d e f", 0, 0, &TextStyle::new(2, 1), 16, 12, &cfg())
        .unwrap_err();
    assert!(matches!(err, GfxError::DoesNotFit { lines: 6, max_lines: 1 }), "{err}");
    assert!(rec.ops.is_empty());
}

#[test]
fn invalid_budgets_are_rejected() {
    let mut rec = Recorder::new();
    let style = TextStyle::new(1, 1);
    for (w, h) in [(0, 10), (10, 0), (-5, 10), (7, 100)] {
        let err = fit_text(&mut rec, "abc", 0, 0, &style, w, h, &cfg()).unwrap_err();
        assert!(matches!(err, GfxError::InvalidArgument(_)), "{w}x{h}: {err}");
    }
    let err = fit_text(&mut rec, "abc", 0, 0, &TextStyle::new(0, 1), 80, 80, &cfg()).unwrap_err();
    assert!(matches!(err, GfxError::InvalidArgument(_)));
    assert!(rec.ops.is_empty());
}

#[test]
fn blank_lines_advance_by_scaled_pitch() {
    // "_" fills the bottom glyph row, so each drawn line shows up at y + 7·m.
    let mut rec = Recorder::new();
    let outcome =
        fit_text(&mut rec, "_\n\n_", 0, 0, &TextStyle::new(2, 1), 64, 80, &cfg()).unwrap();
    assert_eq!(outcome, FitOutcome { scale: 2, lines: 3 });
    let rows: std::collections::BTreeSet<i32> = rec
        .ops
        .iter()
        .map(|op| match *op {
            Op::FillRect { y, .. } => y,
            _ => unreachable!(),
        })
        .collect();
    // Pitch is (8 + 4) · 2 = 24; the middle line is blank.
    assert_eq!(rows.into_iter().collect::<Vec<_>>(), vec![14, 62]);
}

#[test]
fn leading_comes_from_config() {
    let tight = TextConfig { line_leading: 0, ..TextConfig::default() };
    // Three 8px lines need exactly 24px without leading.
    let (outcome, _) = layout_fit("a\nb\nc", 1, 16, 24, &tight).unwrap();
    assert_eq!(outcome, FitOutcome { scale: 1, lines: 3 });
    assert!(matches!(
        layout_fit("a\nb\nc", 1, 16, 24, &cfg()),
        Err(GfxError::DoesNotFit { lines: 3, max_lines: 2 })
    ));
}

#[test]
fn too_narrow_for_the_requested_scale_is_rejected() {
    // 20px holds two characters at scale 1 but none at scale 3; the scale
    // is not lowered to make room.
    let mut rec = Recorder::new();
    let err = fit_text(&mut rec, "hi", 0, 0, &TextStyle::new(3, 1), 20, 100, &cfg()).unwrap_err();
    assert!(matches!(err, GfxError::InvalidArgument(_)), "{err}");
    assert!(rec.ops.is_empty());
    assert!(matches!(
        layout_fit("hi", 3, 20, 100, &cfg()),
        Err(GfxError::InvalidArgument(_))
    ));
}
