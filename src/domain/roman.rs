// ============================================================================
// Roman Value Type
// An integer that is known to have a Roman numeral representation
// ============================================================================

use crate::numeral::{decode, encode_to_buf, NumeralError, NumeralResult, MAX_VALUE, MIN_VALUE};
use std::fmt;

/// A value in `1..=3999`, displayed as its canonical Roman numeral.
///
/// # Example
/// ```
/// use roman_numeral::domain::Roman;
///
/// let year: Roman = "mcmxciv".parse().unwrap();
/// assert_eq!(year.value(), 1994);
/// assert_eq!(year.to_string(), "MCMXCIV");
///
/// let next = Roman::new(year.value() as i64 + 30).unwrap();
/// assert_eq!(next.to_string(), "MMXXIV");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Roman(u16);

impl Roman {
    /// `I`
    pub const MIN: Self = Self(MIN_VALUE as u16);

    /// `MMMCMXCIX`
    pub const MAX: Self = Self(MAX_VALUE as u16);

    /// Create from an integer.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value` is not in `1..=3999`.
    #[inline]
    pub fn new(value: i64) -> NumeralResult<Self> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(NumeralError::OutOfRange { value })
        }
    }

    /// The integer value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Add two values, failing if the sum leaves the representable range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumeralResult<Self> {
        Self::new(i64::from(self.0) + i64::from(rhs.0))
    }

    /// Subtract `rhs`, failing if the difference drops below `I`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumeralResult<Self> {
        Self::new(i64::from(self.0) - i64::from(rhs.0))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<i64> for Roman {
    type Error = NumeralError;

    #[inline]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Roman> for u16 {
    #[inline]
    fn from(roman: Roman) -> Self {
        roman.0
    }
}

impl From<Roman> for i64 {
    #[inline]
    fn from(roman: Roman) -> Self {
        i64::from(roman.0)
    }
}

impl std::str::FromStr for Roman {
    type Err = NumeralError;

    /// Parse with the lenient decoder, then range-check the value.
    ///
    /// `"IIII"` parses to 4; `"MMMM"` fails with `OutOfRange`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = decode(s)?;
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        Self::new(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = encode_to_buf(i64::from(self.0)).map_err(|_| fmt::Error)?;
        f.pad(&numeral)
    }
}

impl fmt::Debug for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Roman({} = {})", self, self.0)
    }
}

// ============================================================================
// Serialization (as the numeral string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Roman {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roman {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let numeral = <String as serde::Deserialize>::deserialize(deserializer)?;
        numeral.parse().map_err(serde::de::Error::custom)
    }
}
