// ============================================================================
// Numeral Tables
// Digit values and the greedy symbol ladder
// ============================================================================

/// Smallest value with a Roman numeral representation.
pub const MIN_VALUE: i64 = 1;

/// Largest value with a Roman numeral representation.
pub const MAX_VALUE: i64 = 3999;

/// Length of the longest canonical numeral (`MMMDCCCLXXXVIII` = 3888).
pub const MAX_NUMERAL_LEN: usize = 15;

/// The seven Roman digits and their values.
pub const DIGITS: [(char, u16); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Symbol-value pairs in greedy order, strictly descending by value.
///
/// Subtractive forms sit between the basic symbols they fall between, so a
/// largest-first walk always yields the canonical spelling.
pub const LADDER: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Look up the value of an uppercase Roman digit in [`DIGITS`].
#[inline]
pub const fn digit_value(c: char) -> Option<u16> {
    let mut i = 0;
    while i < DIGITS.len() {
        if DIGITS[i].0 == c {
            return Some(DIGITS[i].1);
        }
        i += 1;
    }
    None
}
