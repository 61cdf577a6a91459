//! English word tables for number names.

/// Digit words, indexed by digit value.
pub const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Irregular words for 10-19, indexed by the ones digit.
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Multiples of ten, indexed by the tens digit. Indices 0 and 1 are never
/// rendered from this table (zero is suppressed, the teens are irregular).
pub const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Labels for successive powers of one thousand. Index 0 is the bare ones
/// group. Amounts needing a label past the last entry are a terminal
/// error, never an invented name.
pub const MAGNITUDES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];
