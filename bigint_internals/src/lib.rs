//! This crate contains common developer utilities for crates within the
//! `bigint` system, namely the digit type and base used by the decimal
//! big-integer representation, the digit/decimal-string conversion
//! primitives that are co-designed with that base, and the error types
//! shared by the parsing and scaling operations further up the stack.
//!
//! Most users should never have to interact with this crate directly; it is
//! reexported through `bigint_core` and `bigint`.

#![no_std]

mod digit;
mod error;

pub use digit::{
    count_digits_digit, digit_to_str_full, digit_to_str_partial, trailing_zeros_digit,
    POWERS_OF_10,
};
pub use error::{ArithError, ParseError};

/// The basic element of a big integer's digit array. Holds values in `[0,
/// BASE)`; `2*BASE + 1` fits with room to spare, which keeps the `add_abs`/
/// `sub_abs` carry chains simple.
pub type Digit = i32;

/// A double-width accumulator used for multiplication and division. Holds
/// `BASE*BASE + BASE` with room.
pub type DDigit = i64;

/// The digit base. Chosen, as in the runtime this crate's arithmetic is
/// modeled on, to be the largest power of ten that still leaves a `Digit`
/// with slack for carries: `10^9` uses 29.9 of `i32`'s 31 magnitude bits.
pub const BASE: Digit = 1_000_000_000;

/// `log10(BASE)`: the number of decimal characters a full digit renders to.
pub const LOG_BASE: usize = 9;

/// Maximum amount of allocated-but-unused digit slack a `BigInt` buffer is
/// allowed to carry before a trim with reallocation permitted will actually
/// shrink the backing allocation. Mirrors the 15-bit `extra` field of the
/// original C `bigint_t` record (`u16::MAX / 2`, the other half of the range
/// reserved by the bitfield packing the `is_neg` flag alongside it).
pub const MAX_EXTRA: usize = (u16::MAX as usize) / 2;

/// Rounds a digit count up to the storage layer's allocation granularity:
/// at least 4 digits, and always an even count.
#[inline]
pub const fn roundup_count(count: usize) -> usize {
    if count < 4 {
        4
    } else if count % 2 == 1 {
        count + 1
    } else {
        count
    }
}
