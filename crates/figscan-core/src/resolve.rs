//! Value resolution: turn a literal plus scale information into an exact amount.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::lexicon::scale_factor;

/// Strip currency symbols and grouping separators from a literal.
pub fn clean_literal(raw: &str) -> String {
    raw.replace(['$', ','], "").trim().to_string()
}

/// Resolve a numeric literal to an exact value.
///
/// An inline scale word found in the lexicon overrides `fallback` entirely;
/// the two are never combined. Without one, the literal is multiplied by
/// `fallback`. A literal that does not parse resolves to zero.
pub fn resolve_value(raw: &str, inline_word: Option<&str>, fallback: &BigDecimal) -> BigDecimal {
    let cleaned = clean_literal(raw);
    let Ok(base) = BigDecimal::from_str(&cleaned) else {
        tracing::trace!(literal = raw, "unparseable literal resolves to zero");
        return BigDecimal::zero();
    };

    if let Some(factor) = inline_word.and_then(scale_factor) {
        return base * factor;
    }
    base * fallback
}
