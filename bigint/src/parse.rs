//! The decimal-literal parser: `[+-]?[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][0-9]+)?`,
//! with the restriction that the exponent must cancel out any fractional part
//! (the result is always an integer). Ported from the grammar and two-pass
//! structure of the runtime this workspace's decimal bignum core is modeled
//! on (`integer_parse` in its C source): a first pass over the bytes
//! validates the grammar and counts significant/fractional/exponent digits,
//! then a second pass materializes either a machine integer directly or a
//! `BigInt` digit array chunked high-to-low by [`LOG_BASE`].

use alloc::vec;

use bigint_core::BigInt;
use bigint_internals::{ParseError, Digit, BASE, LOG_BASE};

use crate::Integer;

/// Parses a decimal integer literal, per the grammar above.
pub fn parse(s: &str) -> Result<Integer, ParseError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut idx = 0usize;
    let is_neg = match bytes[0] {
        b'+' => {
            idx = 1;
            false
        }
        b'-' => {
            idx = 1;
            true
        }
        _ => false,
    };
    if idx >= bytes.len() || !bytes[idx].is_ascii_digit() {
        return Err(ParseError::EmptyInteger);
    }

    // integer part
    let mut sig_digits = 0usize;
    while idx < bytes.len() {
        let c = bytes[idx];
        if c.is_ascii_digit() {
            sig_digits += 1;
            idx += 1;
        } else if c == b'_' {
            if idx + 1 >= bytes.len() || !bytes[idx + 1].is_ascii_digit() {
                return Err(ParseError::InvalidChar);
            }
            idx += 1;
        } else if c == b'.' || c == b'e' || c == b'E' {
            break;
        } else {
            return Err(ParseError::InvalidChar);
        }
    }

    // fractional part
    let mut frac_digits = 0usize;
    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        if idx >= bytes.len() || !bytes[idx].is_ascii_digit() {
            return Err(ParseError::EmptyFraction);
        }
        while idx < bytes.len() {
            let c = bytes[idx];
            if c.is_ascii_digit() {
                frac_digits += 1;
                idx += 1;
            } else if c == b'_' {
                if idx + 1 >= bytes.len() || !bytes[idx + 1].is_ascii_digit() {
                    return Err(ParseError::InvalidChar);
                }
                idx += 1;
            } else if c == b'e' || c == b'E' {
                break;
            } else {
                return Err(ParseError::InvalidChar);
            }
        }
    }
    let end = idx;

    // exponent
    let mut exp: u64 = 0;
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        idx += 1;
        let exp_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            exp = exp * 10 + (bytes[idx] - b'0') as u64;
            if exp >= BASE as u64 {
                return Err(ParseError::ExponentTooLarge);
            }
            idx += 1;
        }
        if idx == exp_start {
            return Err(ParseError::EmptyExponent);
        }
    }
    if idx != bytes.len() {
        return Err(ParseError::InvalidChar);
    }
    if exp < frac_digits as u64 {
        return Err(ParseError::Fractional);
    }
    let zero_digits = (exp - frac_digits as u64) as usize;
    let dec_digits = sig_digits + frac_digits + zero_digits;

    // direct machine-integer construction: scan the whole prefix (sign
    // included) and keep only the digit characters.
    if dec_digits < LOG_BASE {
        let mut d: i64 = 0;
        for &c in &bytes[..end] {
            if c.is_ascii_digit() {
                d = d * 10 + (c - b'0') as i64;
            }
        }
        for _ in 0..zero_digits {
            d *= 10;
        }
        if is_neg {
            d = -d;
        }
        return Ok(Integer::from_int(d));
    }

    // big-integer construction: fill `count` base-B digits from the most
    // significant chunk down. The first chunk is `dec_digits % LOG_BASE`
    // characters wide (or a full `LOG_BASE` if that's zero); every chunk
    // after is a full `LOG_BASE` wide. Once the source digits run out
    // (`p == end`), the chunk currently being filled is padded with the
    // implicit trailing zeros the exponent calls for, which is what lets a
    // chunk straddle the boundary between real and implicit-zero digits.
    let count = (dec_digits + LOG_BASE - 1) / LOG_BASE;
    let mut digits = vec![0 as Digit; count];
    let mut k = count;
    let mut chunk = dec_digits % LOG_BASE;
    if chunk == 0 {
        chunk = LOG_BASE;
    }
    let mut p = 0usize;
    while p < end {
        let mut d: Digit = 0;
        let mut j = 0;
        while j < chunk {
            let c = if p < end {
                let c = bytes[p];
                p += 1;
                c
            } else {
                b'0'
            };
            if c.is_ascii_digit() {
                j += 1;
                d = d * 10 + (c - b'0') as Digit;
            }
        }
        k -= 1;
        digits[k] = d;
        chunk = LOG_BASE;
    }
    for d in digits.iter_mut().take(k) {
        *d = 0;
    }
    // leading zero digits are possible here (e.g. "00000000001"); trim to
    // keep the canonical-form invariant the rest of this crate family relies
    // on.
    let big = BigInt::from_digits(digits, is_neg).trim(true);
    Ok(Integer::from_big(big))
}
