//! Reference parser turning a rendered dollar clause back into its value.
//!
//! Used by the integration tests to check round-trip sanity: the value
//! implied by the words must equal the whole-dollar value that produced
//! them. Keeps its own word tables rather than importing the ones in
//! `spellout-core`.

use anyhow::bail;

/// Parses a clause like "two thousand five hundred twenty-three" into
/// its numeric value. Case-insensitive; hyphens separate like spaces.
pub fn value_of(words: &str) -> anyhow::Result<u128> {
    let mut total: u128 = 0;
    let mut group: u128 = 0;

    let lowered = words.to_lowercase();
    for token in lowered.split([' ', '-']).filter(|t| !t.is_empty()) {
        if let Some(value) = unit_value(token) {
            group += value;
        } else if token == "hundred" {
            group *= 100;
        } else if let Some(scale) = magnitude_value(token) {
            total += group * scale;
            group = 0;
        } else {
            bail!("unknown number word: {token}");
        }
    }

    Ok(total + group)
}

fn unit_value(token: &str) -> Option<u128> {
    let value = match token {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

fn magnitude_value(token: &str) -> Option<u128> {
    let scale = match token {
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        "trillion" => 1_000_000_000_000,
        "quadrillion" => 1_000_000_000_000_000,
        "quintillion" => 1_000_000_000_000_000_000,
        _ => return None,
    };
    Some(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_compound_clause() {
        let value = value_of("two thousand five hundred twenty-three").unwrap();
        assert_eq!(value, 2523);
    }

    #[test]
    fn test_parses_skipped_groups() {
        assert_eq!(value_of("one million one").unwrap(), 1_000_001);
    }

    #[test]
    fn test_rejects_unknown_word() {
        assert!(value_of("one gazillion").is_err());
    }
}
