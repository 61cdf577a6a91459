//! # Dollar Amount Model
//!
//! Defines the validated input for a conversion.
//!
//! An [`Amount`] can only be constructed through parsing, so every instance
//! already decomposes into a well-formed whole-dollar digit string and a
//! two-digit cents string. Accepted inputs:
//! * Bare digits (e.g., `2523`).
//! * A leading currency symbol (e.g., `$2523`).
//! * Thousands-separating commas every three digits (e.g., `2,523`).
//! * A two-digit cents suffix (e.g., `2523.04`).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Optional `$`; then a single `0` or 1-3 digits with no leading zero
/// followed by optionally comma-separated triplets; then optional `.DD`.
const AMOUNT_GRAMMAR: &str = r"^\$?([1-9]\d{0,2}(,?\d{3})*|0)(\.\d{2})?$";

static GRAMMAR: OnceLock<Regex> = OnceLock::new();

fn grammar() -> &'static Regex {
    GRAMMAR.get_or_init(|| Regex::new(AMOUNT_GRAMMAR).expect("amount grammar must compile"))
}

/// A validated, non-negative dollar amount.
///
/// # Invariants
/// - `dollars` holds only ASCII digits, with no leading zero unless the
///   whole value is `0`.
/// - `cents` is exactly two ASCII digits; an absent cents suffix parses
///   as `"00"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    dollars: String,
    cents: String,
}

/// Rejections produced when parsing an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Only positive dollar amounts are supported")]
    Negative,

    #[error("{0} is not a supported dollar amount format")]
    Format(String),
}

impl Amount {
    /// Whole-dollar digit string, stripped of symbol and commas.
    pub fn dollars(&self) -> &str {
        &self.dollars
    }

    /// Two-digit cents string, `"00"` when the input carried none.
    pub fn cents(&self) -> &str {
        &self.cents
    }

    pub fn is_whole(&self) -> bool {
        self.cents == "00"
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses a raw amount string into an `Amount`.
    ///
    /// A leading minus sign is rejected before grammar matching so the
    /// caller can report it separately from a malformed amount.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.starts_with('-') {
            return Err(AmountError::Negative);
        }

        if !grammar().is_match(raw) {
            return Err(AmountError::Format(raw.to_string()));
        }

        let bare: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
        let (dollars, cents) = match bare.split_once('.') {
            Some((dollars, cents)) => (dollars.to_string(), cents.to_string()),
            None => (bare, String::from("00")),
        };

        debug!(%dollars, %cents, "normalized amount");
        Ok(Self { dollars, cents })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.dollars, self.cents)
    }
}
