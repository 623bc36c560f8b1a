//! Core, allocator-dependent `bigint` functionality: the reference-counted
//! decimal digit storage layer and the unsigned/signed arithmetic built
//! directly on top of it. This crate has no notion of decimal string I/O or
//! of the small/big integer split; both live one layer up, in the `bigint`
//! facade crate.

#![no_std]

extern crate alloc;

mod abs_ops;
mod div;
mod fmt;
mod mul;
#[cfg(feature = "serde")]
mod serde_impl;
mod signed;
mod storage;
#[cfg(feature = "zeroize")]
mod zeroize_impl;

pub use bigint_internals::{ArithError, Digit, BASE, LOG_BASE};
pub use storage::BigInt;

pub use abs_ops::{
    add_abs, cmp_abs, div_mod_small, mul_small, shift_left_by_digits, slice, sub_abs,
};
pub use div::div_mod as div_mod_big;
pub use mul::{mul_karatsuba, mul_schoolbook, sqr as sqr_abs, use_karatsuba};
pub use signed::{
    add, cmp, count_digits, ctz, div, div_mod, div_pow10, is_even, mul, mul_pow10, neg, pow, rem,
    signum, sqr, sub,
};
