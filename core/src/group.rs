//! # Digit Group Model
//!
//! Partitions a whole-dollar digit string into base-1000 groups.
//!
//! Each group covers up to three consecutive digits sharing one magnitude
//! label. Groups are produced highest magnitude first, so rendering walks
//! them in output order and never has to backtrack over zero runs.

use crate::expander::ExpandError;
use crate::lexicon::{MAGNITUDES, ONES, TEENS, TENS};

/// A run of up to three consecutive whole-dollar digits sharing one
/// magnitude label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    hundreds: u8,
    tens: u8,
    ones: u8,
    /// Distance from the rightmost group: 0 = ones, 1 = thousands, ...
    pub magnitude: usize,
}

impl DigitGroup {
    pub fn is_zero(&self) -> bool {
        self.hundreds == 0 && self.tens == 0 && self.ones == 0
    }

    /// The group's 0-999 numeric value.
    pub fn value(&self) -> u16 {
        u16::from(self.hundreds) * 100 + u16::from(self.tens) * 10 + u16::from(self.ones)
    }

    /// Magnitude label for this group, `None` for the bare ones group.
    ///
    /// Always in range: [`split`] refuses digit strings with more groups
    /// than the label table.
    pub fn label(&self) -> Option<&'static str> {
        (self.magnitude > 0).then(|| MAGNITUDES[self.magnitude])
    }

    /// Spoken form of the group value alone, without its magnitude label.
    ///
    /// An all-zero group yields no words; "zero" is only ever rendered for
    /// an amount that is zero in its entirety, which the caller handles.
    pub fn words(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if self.hundreds > 0 {
            parts.push(ONES[usize::from(self.hundreds)].to_string());
            parts.push("hundred".to_string());
        }

        match (self.tens, self.ones) {
            (0, 0) => {}
            (0, ones) => parts.push(ONES[usize::from(ones)].to_string()),
            (1, ones) => parts.push(TEENS[usize::from(ones)].to_string()),
            (tens, 0) => parts.push(TENS[usize::from(tens)].to_string()),
            (tens, ones) => parts.push(format!(
                "{}-{}",
                TENS[usize::from(tens)],
                ONES[usize::from(ones)]
            )),
        }

        parts
    }
}

/// Cuts a validated whole-dollar digit string into groups, highest
/// magnitude first.
///
/// Fails with [`ExpandError::MagnitudeOverflow`] when the string needs
/// more groups than the label table holds; the amount grammar does not
/// bound digit count, so this is the one failure possible after
/// validation.
pub fn split(dollars: &str) -> Result<Vec<DigitGroup>, ExpandError> {
    let digits: Vec<u8> = dollars.bytes().map(|b| b - b'0').collect();

    let group_count = digits.len().div_ceil(3);
    if group_count > MAGNITUDES.len() {
        return Err(ExpandError::MagnitudeOverflow);
    }

    let mut groups = Vec::with_capacity(group_count);
    let mut rest = digits.as_slice();

    for magnitude in (0..group_count).rev() {
        // Only the leading group may be shorter than three digits.
        let width = rest.len() - magnitude * 3;
        let (head, tail) = rest.split_at(width);

        let mut padded = [0u8; 3];
        padded[3 - head.len()..].copy_from_slice(head);
        groups.push(DigitGroup {
            hundreds: padded[0],
            tens: padded[1],
            ones: padded[2],
            magnitude,
        });

        rest = tail;
    }

    Ok(groups)
}
