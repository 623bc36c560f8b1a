//! Arbitrary-precision signed integers with a tagged small/big fast path.
//!
//! [`Integer`] transparently represents either a machine-sized integer (the
//! `Small` fast path) or a heap-allocated, reference-counted [`BigInt`] (the
//! `Big` path, re-exported from [`bigint_core`]). Every operation routes
//! between the two and normalizes its result back down to `Small` whenever
//! it fits, so callers never have to reason about which representation a
//! value happens to be in.
//!
//! This crate adds decimal parsing ([`parse`]), formatting (`Display`, via
//! [`fmt::print`]/[`fmt::fprint`]), and decimal scaling
//! ([`mul_pow10`]/[`div_pow10`]/[`count_digits`]/[`ctz`]) on top of the
//! small/big split and the arithmetic `bigint_core` already provides on
//! `BigInt` directly.
//!
//! Not in scope: bitwise operations, modular exponentiation, and anything
//! faster than schoolbook/Karatsuba multiplication and Knuth long division
//! — see `bigint_core` for the algorithmic core this crate routes to.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod fmt;
mod integer;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(feature = "zeroize")]
mod zeroize_impl;

pub use bigint_core::BigInt;
pub use bigint_internals::{ArithError, ParseError};

#[cfg(feature = "std")]
pub use fmt::{fprint, print};
pub use integer::{
    add, count_digits, ctz, div, div_mod, div_pow10, mul, mul_pow10, neg, pow, rem, sqr, sub,
    Integer, SMALL_MAX, SMALL_MIN,
};
pub use parse::parse;
