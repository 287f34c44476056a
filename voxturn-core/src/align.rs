//! Recovers transcript punctuation for timestamped recognizer tokens.
//!
//! The recognizer returns two views of the same utterance: bare tokens with
//! timestamps, and a punctuated full transcript. The aligner walks the
//! transcript with a forward-only cursor and attributes to every token the
//! verbatim text up to the next token, so punctuation and casing survive.

use crate::types::{AlignedToken, RecognizedToken};
use std::borrow::Cow;

/// Default backtrack window in characters
const DEFAULT_BACKTRACK: usize = 5;

/// Default lookahead window in characters
const DEFAULT_LOOKAHEAD: usize = 50;

/// Default trailing punctuation window in characters
const DEFAULT_TRAILING: usize = 5;

/// Punctuation aligner configuration.
///
/// All windows are measured in characters of the case-folded transcript.
#[derive(clap::Args, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aligner {
    /// Characters before the cursor where a missed token may still start
    #[arg(long, default_value_t = DEFAULT_BACKTRACK)]
    pub backtrack: usize,

    /// Maximum gap in characters between a token and the next token's match
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Characters after a token scanned for punctuation when the next token is out of reach
    #[arg(long, default_value_t = DEFAULT_TRAILING)]
    pub trailing: usize,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Aligner {
    pub const DEFAULT: Self = Self {
        backtrack: DEFAULT_BACKTRACK,
        lookahead: DEFAULT_LOOKAHEAD,
        trailing: DEFAULT_TRAILING,
    };

    /// Attribute a substring of `full_text` to every token.
    ///
    /// Metadata markers and tokens that are blank after trimming produce no
    /// output. A token that cannot be located keeps its own text followed by
    /// a space and leaves the cursor untouched.
    pub fn align(&self, tokens: &[RecognizedToken], full_text: &str) -> Vec<AlignedToken> {
        let text = FoldedText::new(full_text);

        let candidates: Vec<(&RecognizedToken, Vec<char>)> = tokens
            .iter()
            .filter(|token| !token.is_marker())
            .map(|token| (token, fold(token.text.trim())))
            .filter(|(_, needle)| !needle.is_empty())
            .collect();

        let mut cursor = 0;
        let mut aligned = Vec::with_capacity(candidates.len());

        for (i, (token, needle)) in candidates.iter().enumerate() {
            let next = candidates.get(i + 1).map(|(_, needle)| needle.as_slice());

            let punctuated = match self.locate(&text, needle, cursor) {
                Some(start) => {
                    let (punctuated, next_cursor) = self.junction(&text, start, needle.len(), next);
                    cursor = next_cursor;
                    punctuated.into_owned()
                }
                None => {
                    tracing::debug!(token = %token.text, cursor, "token not found in transcript");
                    format!("{} ", token.text)
                }
            };

            aligned.push(AlignedToken::new((*token).clone(), punctuated));
        }

        tracing::trace!(
            tokens = tokens.len(),
            aligned = aligned.len(),
            "aligned tokens"
        );

        aligned
    }

    /// Find a token at or after the cursor, retrying slightly before it.
    fn locate(&self, text: &FoldedText<'_>, needle: &[char], cursor: usize) -> Option<usize> {
        text.find(needle, cursor, text.len()).or_else(|| {
            let from = cursor.saturating_sub(self.backtrack);
            (from < cursor)
                .then(|| text.find(needle, from, cursor - 1))
                .flatten()
        })
    }

    /// Text attributed to a token found at `start`, and the cursor after it.
    fn junction<'a>(
        &self,
        text: &FoldedText<'a>,
        start: usize,
        len: usize,
        next: Option<&[char]>,
    ) -> (Cow<'a, str>, usize) {
        let end = start + len;

        let Some(next) = next else {
            return (Cow::Borrowed(text.slice(start, text.len())), text.len());
        };

        if self.lookahead > 0
            && let Some(next_start) = text.find(next, end, end.saturating_add(self.lookahead - 1))
        {
            return (Cow::Borrowed(text.slice(start, next_start)), next_start);
        }

        // next token missing or too far: keep only the punctuation right after the token
        let window_end = end.saturating_add(self.trailing).min(text.len());
        let suffix_end = end
            + text.chars[end..window_end]
                .iter()
                .take_while(|c| !c.is_alphanumeric())
                .count();

        let mut punctuated = text.slice(start, suffix_end).to_string();
        if !punctuated.ends_with(char::is_whitespace) {
            punctuated.push(' ');
        }

        (Cow::Owned(punctuated), suffix_end)
    }
}

/// Align tokens with the default windows.
pub fn align(tokens: &[RecognizedToken], full_text: &str) -> Vec<AlignedToken> {
    Aligner::DEFAULT.align(tokens, full_text)
}

/// Case-fold text one character at a time.
///
/// Per-character folding keeps needles and transcript consistent, unlike
/// `str::to_lowercase` which is context sensitive for final sigma.
fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Case-folded transcript that maps folded positions back to the source.
struct FoldedText<'a> {
    source: &'a str,
    chars: Vec<char>,
    /// Source byte offset of the character each folded char came from, plus `source.len()`
    offsets: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    fn new(source: &'a str) -> Self {
        let mut chars = Vec::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);

        for (offset, c) in source.char_indices() {
            for folded in c.to_lowercase() {
                chars.push(folded);
                offsets.push(offset);
            }
        }
        offsets.push(source.len());

        Self {
            source,
            chars,
            offsets,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// First match of `needle` starting in `from..=max_start`.
    fn find(&self, needle: &[char], from: usize, max_start: usize) -> Option<usize> {
        let end = max_start.saturating_add(needle.len()).min(self.len());
        if needle.is_empty() || from >= end {
            return None;
        }

        self.chars[from..end]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|i| from + i)
    }

    /// Source text between two folded positions.
    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[self.offsets[start]..self.offsets[end]]
    }
}
