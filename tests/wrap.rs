use framegfx::GfxError;
use framegfx::text::{TextWrapper, find_word_break, wrap};

// ── find_word_break ───────────────────────────────────────────────────────────

#[test]
fn find_word_break_walks_backwards() {
    assert_eq!(find_word_break("oneword"), 7);
    let two = "two words";
    let end = find_word_break(two);
    assert_eq!(end, 3);
    assert_eq!(&two[..end], "two");
}

// ── Basic wrapping ────────────────────────────────────────────────────────────

#[test]
fn short_sentence_is_one_line() {
    assert_eq!(wrap("my little pony", 40).unwrap(), ["my little pony"]);
}

#[test]
fn breaks_on_whitespace_at_boundary() {
    assert_eq!(wrap("my little pony", 9).unwrap(), ["my little", "pony"]);
}

#[test]
fn forces_hyphen_in_long_word() {
    let lines = wrap("my little pony has a verylongnamethaticannotpronounce", 9).unwrap();
    assert_eq!(
        lines,
        ["my little", "pony has", "a", "verylong-", "namethat-", "icannotp-", "ronounce"]
    );
}

#[test]
fn wraps_multiple_lines_on_spaces() {
    let lines = wrap("my little pony has a very long name that I cannot pronounce", 9).unwrap();
    assert_eq!(
        lines,
        ["my little", "pony has", "a very", "long name", "that I", "cannot", "pronounce"]
    );
}

#[test]
fn punctuation_stays_on_its_line() {
    let lines = wrap("my-little\tpony has a very;long name-that! I cannot.pronounce", 9).unwrap();
    assert_eq!(
        lines,
        ["my-little", "pony has", "a very;", "long", "name-", "that! I", "cannot.", "pronounce"]
    );
}

#[test]
fn question_and_colon_are_delimiters() {
    assert_eq!(wrap("why?because:yes", 8).unwrap(), ["why?", "because:", "yes"]);
}

// ── Newlines and blank lines ──────────────────────────────────────────────────

#[test]
fn embedded_newline_splits_early() {
    assert_eq!(wrap("ab\ncd ef", 10).unwrap(), ["ab", "cd ef"]);
}

#[test]
fn newline_just_past_the_window_is_not_seen() {
    // Only the first three characters are searched, so "abc" is a word that
    // has to be split before the newline is reached.
    assert_eq!(wrap("abc\ndef", 3).unwrap(), ["ab-", "c", "def"]);
    assert_eq!(wrap("abc\ndef", 4).unwrap(), ["abc", "def"]);
}

#[test]
fn carriage_return_is_searched_first() {
    assert_eq!(wrap("ab\rcd", 10).unwrap(), ["ab", "cd"]);
    assert_eq!(wrap("a\nb\rc", 10).unwrap(), ["a\nb", "c"]);
}

#[test]
fn crlf_is_two_breaks() {
    assert_eq!(wrap("ab\r\ncd", 10).unwrap(), ["ab", "", "cd"]);
}

#[test]
fn newline_past_the_window_is_found_later() {
    // The newline sits at index 12, outside the first window of 5.
    assert_eq!(wrap("aaaa bbbb cc\ndd", 5).unwrap(), ["aaaa", "bbbb", "cc", "dd"]);
}

#[test]
fn blank_lines_are_preserved() {
    let text = "The quick brown fox jumps over the lazy dog.\n\n\
                Second paragraph here.\n\n\nThird.";
    let lines = wrap(text, 50).unwrap();
    assert_eq!(
        lines,
        [
            "The quick brown fox jumps over the lazy dog.",
            "",
            "Second paragraph here.",
            "",
            "",
            "Third.",
        ]
    );
    let source_blanks = text.split('\n').filter(|l| l.is_empty()).count();
    let wrapped_blanks = lines.iter().filter(|l| l.is_empty()).count();
    assert_eq!(source_blanks, wrapped_blanks);
}

#[test]
fn leading_blank_lines_are_kept() {
    assert_eq!(wrap("\n\nx", 4).unwrap(), ["", "", "x"]);
}

#[test]
fn final_newline_does_not_add_a_line() {
    assert_eq!(wrap("abc\n", 5).unwrap(), ["abc"]);
    assert_eq!(wrap("abc\n\n", 5).unwrap(), ["abc", ""]);
}

// ── Edge policy ───────────────────────────────────────────────────────────────

#[test]
fn empty_text_gives_no_lines() {
    assert!(wrap("", 5).unwrap().is_empty());
}

#[test]
fn trailing_whitespace_after_a_break_is_dropped() {
    assert_eq!(wrap("hello   ", 5).unwrap(), ["hello"]);
    // Only the break character itself is dropped; the window keeps its own.
    assert_eq!(wrap("ab cd \t ", 3).unwrap(), ["ab", "cd "]);
}

#[test]
fn blank_tail_after_a_newline_is_dropped() {
    assert_eq!(wrap("a\n   ", 5).unwrap(), ["a"]);
    assert_eq!(wrap("a\n \t", 5).unwrap(), ["a"]);
    assert_eq!(wrap("a\n  b", 5).unwrap(), ["a", "  b"]);
}

#[test]
fn whitespace_only_text_that_fits_is_kept() {
    assert_eq!(wrap("   ", 5).unwrap(), ["   "]);
}

#[test]
fn zero_width_is_rejected() {
    assert!(matches!(wrap("abc", 0), Err(GfxError::InvalidArgument(_))));
}

#[test]
fn width_one_splits_without_hyphens() {
    assert_eq!(wrap("abc", 1).unwrap(), ["a", "b", "c"]);
    assert_eq!(wrap("a b", 1).unwrap(), ["a", "b"]);
}

#[test]
fn width_two_forces_single_letter_hyphens() {
    assert_eq!(wrap("abc", 2).unwrap(), ["a-", "bc"]);
}

// ── Properties ────────────────────────────────────────────────────────────────

const SAMPLES: &[&str] = &[
    "my little pony has a verylongnamethaticannotpronounce",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit; sed do eiusmod.",
    "a b c d e f g h i j k l m n o p",
    "supercalifragilisticexpialidocious",
    "tabs\tand\tspaces mixed\t together!",
];

#[test]
fn no_line_exceeds_the_width() {
    for text in SAMPLES {
        for max in 1..=20 {
            for line in wrap(text, max).unwrap() {
                assert!(line.chars().count() <= max, "{line:?} longer than {max}");
            }
        }
    }
}

#[test]
fn wrapping_only_drops_separators_and_adds_hyphens() {
    // None of the samples contain a hyphen, so every '-' in the output was
    // inserted and every missing character was a separator.
    let strip = |s: &str| s.chars().filter(|c| !matches!(c, ' ' | '\t' | '-')).collect::<String>();
    for text in SAMPLES {
        for max in 1..=20 {
            let joined: String = wrap(text, max).unwrap().concat();
            assert_eq!(strip(&joined), strip(text), "max={max}");
        }
    }
}

#[test]
fn lazy_iterator_matches_collected_block() {
    let wrapper = TextWrapper::default();
    for text in SAMPLES {
        let eager = wrapper.wrap(text, 7).unwrap();
        let lazy: Vec<String> = wrapper.lines(text, 7).unwrap().collect();
        assert_eq!(eager, lazy);
    }
}
