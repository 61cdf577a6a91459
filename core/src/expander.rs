//! # Amount Expansion Service
//!
//! Implements the core "amount to English words" use case.
//!
//! The expander walks the base-1000 digit groups of a validated
//! [`Amount`] from highest magnitude down, rendering each non-zero group
//! followed by its magnitude label and skipping zero groups entirely, so
//! `1,000,001` reads "one million one" with no stray label or "zero"
//! token. The word sequence is owned by each call; nothing is shared
//! across invocations.

use spellout_common::amount::Amount;
use spellout_common::config::CentsStyle;

use crate::group::{self, DigitGroup};

/// The one failure possible on an amount that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("The amount entered exceeds the supported maximum")]
    MagnitudeOverflow,
}

/// Renders a validated amount as a capitalized English sentence.
///
/// # Example
/// ```
/// use spellout_common::{amount::Amount, config::CentsStyle};
///
/// let amount: Amount = "2523.04".parse().unwrap();
/// let sentence = spellout_core::expander::expand(&amount, CentsStyle::Auto).unwrap();
/// assert_eq!(sentence, "Two thousand five hundred twenty-three and 04/100 dollars");
/// ```
pub fn expand(amount: &Amount, cents: CentsStyle) -> Result<String, ExpandError> {
    let groups = group::split(amount.dollars())?;

    let mut parts: Vec<String> = Vec::new();
    if groups.iter().all(DigitGroup::is_zero) {
        parts.push("zero".to_string());
    } else {
        for group in &groups {
            if group.is_zero() {
                continue;
            }
            parts.extend(group.words());
            if let Some(label) = group.label() {
                parts.push(label.to_string());
            }
        }
    }

    let clause = parts.join(" ");
    let sentence = if amount.is_whole() && cents == CentsStyle::Auto {
        format!("{clause} dollars")
    } else {
        format!("{clause} and {}/100 dollars", amount.cents())
    };

    Ok(capitalize(sentence))
}

/// Uppercases exactly the first character; hyphenated compounds keep
/// their internal lowercase.
fn capitalize(sentence: String) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => sentence,
    }
}
