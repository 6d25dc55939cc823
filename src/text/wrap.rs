// ── Word wrapping ─────────────────────────────────────────────────────────────
//
// Greedy, single pass over the remaining fragment.  Each step emits one line:
//
// 1. a newline inside the window ends the line there (blank lines survive);
//    `\r` is looked for before `\n`, and only that one character is dropped;
// 2. a fragment that fits is the last line;
// 3. whitespace right after the window is a clean break and is dropped;
// 4. otherwise break after the last delimiter in the window (whitespace
//    delimiters are dropped, punctuation stays on the line), or force a
//    hyphen when the window holds a single unbroken word.

use crate::config::{BREAK_WHITESPACE, TextConfig};
use crate::error::GfxError;

#[inline]
fn is_break_whitespace(c: char) -> bool {
    BREAK_WHITESPACE.contains(c)
}

/// Index of the first `\r` in `window`, or failing that the first `\n`.
fn find_newline(window: &[char]) -> Option<usize> {
    window
        .iter()
        .position(|&c| c == '\r')
        .or_else(|| window.iter().position(|&c| c == '\n'))
}

// ── TextWrapper ───────────────────────────────────────────────────────────────

/// Word wrapper with a configurable delimiter set and hyphen character.
#[derive(Clone, Debug)]
pub struct TextWrapper {
    delimiters: Vec<char>,
    hyphen: char,
}

impl Default for TextWrapper {
    fn default() -> Self {
        Self::new(&TextConfig::default())
    }
}

impl TextWrapper {
    pub fn new(config: &TextConfig) -> Self {
        Self {
            delimiters: config.word_delimiters.chars().collect(),
            hyphen: config.hyphen,
        }
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Position of the last word delimiter in `window`, or `window.len()`
    /// when there is none.
    pub fn find_word_break(&self, window: &[char]) -> usize {
        window
            .iter()
            .rposition(|&c| self.is_delimiter(c))
            .unwrap_or(window.len())
    }

    /// Lazily wrap `text` to lines of at most `max_chars` characters.
    ///
    /// Fails with [`GfxError::InvalidArgument`] when `max_chars` is zero.
    pub fn lines<'w>(&'w self, text: &str, max_chars: usize) -> Result<WrapLines<'w>, GfxError> {
        if max_chars == 0 {
            return Err(GfxError::invalid("max_chars must be at least 1"));
        }
        let chars: Vec<char> = text.chars().collect();
        Ok(WrapLines {
            wrapper: self,
            done: chars.is_empty(),
            chars,
            pos: 0,
            max_chars,
        })
    }

    /// Wrap `text` into a block of lines, top to bottom.
    pub fn wrap(&self, text: &str, max_chars: usize) -> Result<Vec<String>, GfxError> {
        let lines: Vec<String> = self.lines(text, max_chars)?.collect();
        tracing::trace!(lines = lines.len(), max_chars, "wrapped text");
        Ok(lines)
    }
}

// ── WrapLines ─────────────────────────────────────────────────────────────────

/// Iterator over wrapped lines, produced by [`TextWrapper::lines`].
///
/// Every call to `next` consumes at least one character, so the iterator
/// always terminates.
#[derive(Clone, Debug)]
pub struct WrapLines<'w> {
    wrapper: &'w TextWrapper,
    chars: Vec<char>,
    pos: usize,
    max_chars: usize,
    done: bool,
}

impl WrapLines<'_> {
    fn rest(&self) -> &[char] {
        &self.chars[self.pos..]
    }

    /// Emit `[pos, pos + len)` and resume at `pos + len + skip`.
    fn emit(&mut self, len: usize, skip: usize) -> String {
        let line: String = self.chars[self.pos..self.pos + len].iter().collect();
        self.pos += len + skip;
        line
    }

    /// A remainder of nothing but spaces and tabs after a break would only
    /// produce an invisible trailing line.
    fn stop_if_blank(&mut self) {
        if self.rest().iter().all(|&c| is_break_whitespace(c)) {
            self.done = true;
        }
    }
}

impl Iterator for WrapLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let max = self.max_chars;
        let frag = self.rest();

        if let Some(nl) = find_newline(&frag[..max.min(frag.len())]) {
            let line = self.emit(nl, 1);
            // A newline that ends the text closes the last line.
            self.stop_if_blank();
            return Some(line);
        }

        let remaining = frag.len();
        if remaining <= max {
            self.done = true;
            return Some(self.emit(remaining, 0));
        }

        if is_break_whitespace(frag[max]) {
            let line = self.emit(max, 1);
            self.stop_if_blank();
            return Some(line);
        }

        let pos = self.wrapper.find_word_break(&frag[..max]);
        if pos == max {
            // No break point in the window: split the word.
            if max == 1 {
                return Some(self.emit(1, 0));
            }
            let mut line = self.emit(max - 1, 0);
            line.push(self.wrapper.hyphen);
            return Some(line);
        }

        let line = if is_break_whitespace(frag[pos]) {
            self.emit(pos, 1)
        } else {
            self.emit(pos + 1, 0)
        };
        self.stop_if_blank();
        Some(line)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Wrap `text` with the default delimiters and hyphen.
///
/// ```
/// let lines = framegfx::text::wrap("my little pony", 9).unwrap();
/// assert_eq!(lines, ["my little", "pony"]);
/// ```
pub fn wrap(text: &str, max_chars: usize) -> Result<Vec<String>, GfxError> {
    TextWrapper::default().wrap(text, max_chars)
}

/// Character index of the last default word delimiter in `window`, or its
/// length in characters when there is none.
pub fn find_word_break(window: &str) -> usize {
    let chars: Vec<char> = window.chars().collect();
    TextWrapper::default().find_word_break(&chars)
}
