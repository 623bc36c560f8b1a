//! `Display` for [`BigInt`] in terms of the decimal digit-to-chars
//! primitives in `bigint_internals`. This lives here (rather than only in the
//! `bigint` facade crate) so that the `serde`/`zeroize` support below, and
//! anyone using `bigint_core` directly without the small/big split, gets a
//! canonical string form for free.

use alloc::vec;

use core::fmt;

use bigint_internals::{digit_to_str_full, digit_to_str_partial, Digit, LOG_BASE};

use crate::storage::BigInt;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neg() {
            f.write_str("-")?;
        }
        let digits = self.digits();
        let top = digits.len() - 1;
        let mut buf = [0u8; LOG_BASE];
        let n = digit_to_str_partial(digits[top], &mut buf);
        // `digit_to_str_partial` writes nothing for a zero top digit, which only
        // happens when the whole value is zero (canonical form forbids leading
        // zero digits otherwise); print a single "0" in that case.
        if n == 0 {
            f.write_str("0")?;
        } else {
            f.write_str(core::str::from_utf8(&buf[..n]).expect("ascii digits"))?;
        }
        for i in (0..top).rev() {
            digit_to_str_full(digits[i], &mut buf);
            f.write_str(core::str::from_utf8(&buf).expect("ascii digits"))?;
        }
        Ok(())
    }
}

impl BigInt {
    /// Parses the plain `-?[0-9]+` form that [`fmt::Display`] above produces,
    /// with none of the `_`/`.`/`e` grammar the full decimal-literal parser
    /// one layer up (`bigint::parse`) accepts. Used only to deserialize a
    /// value this crate itself serialized (`serde_impl`); untrusted user
    /// input should go through `bigint::parse` instead.
    #[cfg(feature = "serde")]
    pub(crate) fn from_decimal_str(s: &str) -> Option<BigInt> {
        let bytes = s.as_bytes();
        let (is_neg, rest) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            Some(_) => (false, bytes),
            None => return None,
        };
        if rest.is_empty() || !rest.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let dec_digits = rest.len();
        if dec_digits < LOG_BASE {
            let mut d: i64 = 0;
            for &c in rest {
                d = d * 10 + (c - b'0') as i64;
            }
            if is_neg {
                d = -d;
            }
            return Some(BigInt::from_i64(d));
        }
        let count = (dec_digits + LOG_BASE - 1) / LOG_BASE;
        let mut digits = vec![0 as Digit; count];
        let mut k = count;
        let mut chunk = dec_digits % LOG_BASE;
        if chunk == 0 {
            chunk = LOG_BASE;
        }
        let mut p = 0;
        while p < dec_digits {
            let mut d: Digit = 0;
            for _ in 0..chunk {
                d = d * 10 + (rest[p] - b'0') as Digit;
                p += 1;
            }
            k -= 1;
            digits[k] = d;
            chunk = LOG_BASE;
        }
        Some(BigInt::from_digits(digits, is_neg).trim(true))
    }
}
