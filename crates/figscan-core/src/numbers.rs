//! Number extraction: split a text span into numeric literals.
//!
//! A literal is an optional `$`, optional whitespace, an integer that is either
//! comma-grouped (`1,234,567`) or plain (`1234567`), and an optional decimal
//! fraction. It may be followed by whitespace and one singular scale word
//! ("5 million"). A match must end on a word boundary, so `10x` and `5,00a`
//! are not read as numbers and "5 millions" yields `5` with no scale word.
//!
//! The scanner walks the text once, left to right, and never revisits text
//! that belongs to an earlier match. Where several readings of the same start
//! position are possible it prefers, in order: the grouped integer over the
//! plain one, longer integers, a longer fraction, more trailing whitespace, and
//! a scale word over none. The first reading that ends on a word boundary is
//! taken.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::lexicon::INLINE_SCALE_WORDS;

/// A numeric literal found in text, with its adjacent scale word if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberToken<'a> {
    /// The literal including any leading `$` and whitespace, e.g. `"$1,234.5"`.
    pub literal: &'a str,
    /// Singular scale word immediately following the literal.
    pub scale_word: Option<&'a str>,
    /// The full matched text, literal through scale word.
    pub matched: &'a str,
    /// Byte range of `matched` within the scanned text.
    pub span: Range<usize>,
}

/// Lazy iterator over the [`NumberToken`]s of a text span.
#[derive(Debug, Clone)]
pub struct NumberTokens<'a> {
    text: &'a str,
    pos: usize,
}

/// Tokenize `text` into numeric literals.
pub fn number_tokens(text: &str) -> NumberTokens<'_> {
    NumberTokens { text, pos: 0 }
}

impl<'a> Iterator for NumberTokens<'a> {
    type Item = NumberToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let start = self.pos;
            if let Some(token) = match_at(self.text, start) {
                self.pos = token.span.end;
                return Some(token);
            }
            self.pos += char_len_at(self.text, start);
        }
        None
    }
}

impl FusedIterator for NumberTokens<'_> {}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..).and_then(|rest| rest.chars().next())
}

fn char_len_at(text: &str, pos: usize) -> usize {
    char_at(text, pos).map_or(1, char::len_utf8)
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text.get(..pos).and_then(|head| head.chars().next_back())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `pos` sits between a word character and a non-word character
/// (text edges count as non-word).
fn is_word_boundary(text: &str, pos: usize) -> bool {
    let before = char_before(text, pos).is_some_and(is_word_char);
    let after = char_at(text, pos).is_some_and(is_word_char);
    before != after
}

fn digit_run(bytes: &[u8], pos: usize) -> usize {
    bytes[pos.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn whitespace_run(text: &str, pos: usize) -> usize {
    text.get(pos..).map_or(0, |rest| {
        rest.chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum()
    })
}

/// Candidate ends of the integer part starting at `start`, in preference order.
fn integer_ends(bytes: &[u8], start: usize) -> Vec<usize> {
    let run = digit_run(bytes, start);
    let mut ends = Vec::new();

    for lead in (1..=run.min(3)).rev() {
        let mut group_ends = vec![start + lead];
        let mut pos = start + lead;
        while bytes.get(pos) == Some(&b',') && digit_run(bytes, pos + 1) >= 3 {
            pos += 4;
            group_ends.push(pos);
        }
        ends.extend(group_ends.into_iter().rev());
    }
    ends.extend((1..=run).rev().map(|len| start + len));
    ends
}

/// Candidate ends once an optional `.digits` fraction is appended.
fn fraction_ends(bytes: &[u8], int_end: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    if bytes.get(int_end) == Some(&b'.') {
        let run = digit_run(bytes, int_end + 1);
        ends.extend((1..=run).rev().map(|len| int_end + 1 + len));
    }
    ends.push(int_end);
    ends
}

/// Length of the inline scale word at `pos`, if one starts there.
fn scale_word_at(text: &str, pos: usize) -> Option<usize> {
    INLINE_SCALE_WORDS.iter().find_map(|word| {
        text.get(pos..pos + word.len())
            .filter(|candidate| candidate.eq_ignore_ascii_case(word))
            .map(|_| word.len())
    })
}

fn match_at(text: &str, start: usize) -> Option<NumberToken<'_>> {
    let bytes = text.as_bytes();
    let mut pos = start;
    if bytes.get(pos) == Some(&b'$') {
        pos += 1;
    }
    pos += whitespace_run(text, pos);
    if digit_run(bytes, pos) == 0 {
        return None;
    }

    for int_end in integer_ends(bytes, pos) {
        for literal_end in fraction_ends(bytes, int_end) {
            let gap = whitespace_run(text, literal_end);
            // Fewer trailing spaces can only help when the scale word is absent
            // and the boundary falls right after the literal.
            for trailing in [gap, 0] {
                let word_start = literal_end + trailing;
                if let Some(len) = scale_word_at(text, word_start) {
                    let end = word_start + len;
                    if is_word_boundary(text, end) {
                        return Some(token(text, start, literal_end, Some(word_start..end), end));
                    }
                }
                if is_word_boundary(text, word_start) {
                    return Some(token(text, start, literal_end, None, word_start));
                }
                if gap == 0 {
                    break;
                }
            }
        }
    }
    None
}

fn token(
    text: &str,
    start: usize,
    literal_end: usize,
    word: Option<Range<usize>>,
    end: usize,
) -> NumberToken<'_> {
    NumberToken {
        literal: &text[start..literal_end],
        scale_word: word.map(|range| &text[range]),
        matched: &text[start..end],
        span: start..end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(text: &str) -> Vec<(&str, Option<&str>)> {
        number_tokens(text)
            .map(|t| (t.literal, t.scale_word))
            .collect()
    }

    #[test]
    fn plain_and_grouped_integers() {
        assert_eq!(
            literals("1,234 and 98765"),
            vec![("1,234", None), (" 98765", None)]
        );
    }

    #[test]
    fn currency_and_fraction() {
        assert_eq!(literals("$1,234.56"), vec![("$1,234.56", None)]);
        assert_eq!(literals("$ 42"), vec![("$ 42", None)]);
    }

    #[test]
    fn singular_scale_word_is_captured() {
        let tokens: Vec<_> = number_tokens("raised $5 Billion today").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].literal, "$5");
        assert_eq!(tokens[0].scale_word, Some("Billion"));
        assert_eq!(tokens[0].matched, "$5 Billion");
    }

    #[test]
    fn plural_scale_word_is_not_inline() {
        assert_eq!(literals("5 millions"), vec![("5", None)]);
    }

    #[test]
    fn scale_word_must_end_on_boundary() {
        assert_eq!(literals("5 millionaires"), vec![("5", None)]);
    }

    #[test]
    fn scale_word_without_space() {
        assert_eq!(literals("5million"), vec![("5", Some("million"))]);
    }

    #[test]
    fn percent_sign_ends_literal() {
        assert_eq!(literals("12.3%"), vec![("12.3", None)]);
    }

    #[test]
    fn digits_glued_to_letters_are_skipped() {
        assert_eq!(literals("10x"), vec![]);
        assert_eq!(literals("10.5x"), vec![("10", None)]);
    }

    #[test]
    fn leading_letters_do_not_block_a_match() {
        assert_eq!(literals("FY2023"), vec![("2023", None)]);
    }

    #[test]
    fn broken_grouping_falls_back() {
        assert_eq!(literals("1,2345"), vec![("1", None), ("2345", None)]);
        assert_eq!(literals("12,34"), vec![("12", None), ("34", None)]);
    }

    #[test]
    fn long_plain_integer_is_whole() {
        assert_eq!(literals("1234567"), vec![("1234567", None)]);
    }

    #[test]
    fn trailing_whitespace_is_not_part_of_literal() {
        let tokens: Vec<_> = number_tokens("7   ").collect();
        assert_eq!(tokens[0].literal, "7");
        assert_eq!(tokens[0].span, 0..1);
    }

    #[test]
    fn cloned_token_keeps_span() {
        let token = number_tokens("pay $12 now").next().unwrap();
        let copy = token.clone();
        assert_eq!(copy, token);
        assert_eq!(copy.literal, "$12");
        assert_eq!(&"pay $12 now"[copy.span], copy.matched);
    }

    #[test]
    fn matches_do_not_overlap() {
        let tokens: Vec<_> = number_tokens("1 2 3").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.windows(2).all(|w| w[0].span.end <= w[1].span.start));
    }

    #[test]
    fn non_ascii_text_is_walked_safely() {
        assert_eq!(literals("€ 300 — ¥ 400"), vec![(" 300", None), (" 400", None)]);
    }

    #[test]
    fn exhausted_iterator_stays_empty() {
        let mut tokens = number_tokens("9");
        assert!(tokens.next().is_some());
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }
}
