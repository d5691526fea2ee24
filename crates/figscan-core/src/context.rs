//! Context matching: find a scale annotation such as "(in millions)" in text.
//!
//! Three surface forms are recognized, case-insensitively:
//! `(in WORD)`, `($WORD)` and `dollars in WORD`. Only the leftmost match
//! counts. If its word is not a scale word the text asserts no scale at all;
//! later matches are not consulted.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::lexicon::{identity, scale_factor};

static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(in (?P<paren>\w+)\)|\(\$(?P<dollar>\w+)\)|dollars in (?P<phrase>\w+)")
        .expect("context pattern compiles")
});

/// A scale annotation found in a text span.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMatch<'a> {
    /// The captured scale word, as written.
    pub word: &'a str,
    /// Factor the word denotes.
    pub factor: BigDecimal,
}

/// Find the first scale annotation in `text`.
///
/// Returns `None` when nothing matches, or when the first match captures a
/// word outside the lexicon (e.g. "(in USD)").
pub fn find_context(text: &str) -> Option<ContextMatch<'_>> {
    let caps = CONTEXT_RE.captures(text)?;
    let word = ["paren", "dollar", "phrase"]
        .iter()
        .find_map(|name| caps.name(name))?
        .as_str();
    let factor = scale_factor(word)?.clone();
    Some(ContextMatch { word, factor })
}

/// The multiplier asserted by `text`, or one when it asserts none.
pub fn context_multiplier(text: &str) -> BigDecimal {
    find_context(text).map_or_else(|| identity().clone(), |m| m.factor)
}
