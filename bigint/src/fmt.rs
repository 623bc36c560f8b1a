//! `Display`/`FromStr` for [`Integer`], plus `print`/`fprint` convenience
//! wrappers kept for parity with the `integer_print`/`integer_fprint` pair in
//! the runtime this workspace's decimal bignum core is modeled on.

use core::fmt;
use core::str::FromStr;

use crate::{parse, Integer, ParseError};

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `i64`'s own `Display` already renders a sign and no leading
            // zeros/padding, exactly what the canonical decimal form needs.
            Integer::Small(i) => fmt::Display::fmt(i, f),
            Integer::Big(b) => fmt::Display::fmt(b, f),
        }
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse(s)
    }
}

/// Writes `x`'s decimal form to `w`.
#[cfg(feature = "std")]
pub fn fprint<W: std::io::Write>(w: &mut W, x: &Integer) -> std::io::Result<()> {
    write!(w, "{x}")
}

/// Writes `x`'s decimal form to stdout.
#[cfg(feature = "std")]
pub fn print(x: &Integer) {
    print!("{x}");
}
