#[cfg(feature = "std")]
extern crate std;

use core::fmt;

/// An error returned by `bigint::parse` when a decimal literal is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input is empty
    Empty,
    /// There is an unrecognized character, a non-digit directly after a sign,
    /// or a digit run broken by a `_` that is not flanked by digits on both
    /// sides
    InvalidChar,
    /// The input has no integer digits at all (e.g. just a sign, or just a
    /// `.` with nothing before it)
    EmptyInteger,
    /// A `.` is present but no fractional digits follow it
    EmptyFraction,
    /// An `e`/`E` is present but no exponent digits follow it
    EmptyExponent,
    /// The exponent's magnitude is `>= BASE` (`10^9`), considered
    /// unreasonably large for a decimal literal
    ExponentTooLarge,
    /// The literal has a fractional part that the exponent does not cancel
    /// out (`exp < frac_digits`), so the value is not an integer
    Fractional,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::Empty => "empty input",
            ParseError::InvalidChar => "invalid character in decimal literal",
            ParseError::EmptyInteger => "missing integer digits",
            ParseError::EmptyFraction => "'.' present with no fractional digits",
            ParseError::EmptyExponent => "'e'/'E' present with no exponent digits",
            ParseError::ExponentTooLarge => "exponent magnitude is too large",
            ParseError::Fractional => "value has a non-integer fractional part",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// An error returned by the arithmetic operations that can fail for reasons
/// other than "the inputs don't fit": dividing by zero, and scaling by an
/// out-of-range power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
    /// `div`/`mod`/`div_mod` was called with a zero divisor
    DivisionByZero,
    /// `mul_pow10`/`div_pow10` was called with an exponent that does not fit
    /// in a `Small` integer
    BadScaleExponent,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ArithError::DivisionByZero => "division by zero",
            ArithError::BadScaleExponent => "decimal scale exponent out of range",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithError {}
