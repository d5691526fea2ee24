//! Scale words and the power-of-ten factors they denote.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;

/// Every recognized scale word, in declaration order.
///
/// Column headers are tested against these in this order, so the first
/// entry that matches wins.
pub const SCALE_WORDS: [(&str, u64); 8] = [
    ("thousand", 1_000),
    ("thousands", 1_000),
    ("million", 1_000_000),
    ("millions", 1_000_000),
    ("billion", 1_000_000_000),
    ("billions", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("trillions", 1_000_000_000_000),
];

/// Scale words accepted directly after a numeric literal ("$5 billion").
///
/// Only the singular forms; "5 billions" carries no inline scale.
pub const INLINE_SCALE_WORDS: [&str; 4] = ["thousand", "million", "billion", "trillion"];

static FACTORS: LazyLock<Vec<(&'static str, BigDecimal)>> = LazyLock::new(|| {
    SCALE_WORDS
        .iter()
        .map(|&(word, factor)| (word, BigDecimal::from(factor)))
        .collect()
});

static IDENTITY: LazyLock<BigDecimal> = LazyLock::new(|| BigDecimal::from(1));

/// Look up the factor for a scale word, ignoring case.
pub fn scale_factor(word: &str) -> Option<&'static BigDecimal> {
    let lower = word.to_lowercase();
    FACTORS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, factor)| factor)
}

/// Iterate the lexicon in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static BigDecimal)> {
    FACTORS.iter().map(|(word, factor)| (*word, factor))
}

/// The multiplier used when no scale applies.
pub fn identity() -> &'static BigDecimal {
    &IDENTITY
}
