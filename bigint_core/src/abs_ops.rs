//! Magnitude-only arithmetic: every routine here ignores `is_neg` on its
//! inputs and leaves the result's sign for the caller (usually
//! [`crate::signed`]) to set. Keeping sign handling out of this layer is what
//! lets the same `add_abs`/`sub_abs` pair serve both `add` and `sub` in the
//! generic dispatch above it.

use alloc::vec;
use alloc::vec::Vec;

use bigint_internals::{Digit, BASE};

use crate::storage::BigInt;

/// Lexicographic-by-magnitude comparison: `-1`, `0`, or `1`.
pub fn cmp_abs(x: &BigInt, y: &BigInt) -> i32 {
    let (cx, cy) = (x.count(), y.count());
    if cx != cy {
        return if cx > cy { 1 } else { -1 };
    }
    for i in (0..cx).rev() {
        let (dx, dy) = (x.digits()[i], y.digits()[i]);
        if dx != dy {
            return if dx > dy { 1 } else { -1 };
        }
    }
    0
}

/// `|x| + |y|`, with `|x| >= |y|`. Reuses `x`'s buffer when uniquely owned.
pub fn add_abs(x: BigInt, y: &BigInt) -> BigInt {
    let cx = x.count();
    let cy = y.count();
    debug_assert!(cx >= cy);

    let last_sum = x.last_digit() as i64
        + if cy == cx { y.last_digit() as i64 } else { 0 }
        + 1;
    let cz = if last_sum >= BASE as i64 { cx + 1 } else { cx };
    let x_tail: Vec<Digit> = x.digits()[..cx].to_vec();
    let mut z = x.alloc_reuse(cz);

    let mut carry: Digit = 0;
    let mut i = 0;
    {
        let zd = z.digits_mut();
        while i < cy {
            let mut sum = x_tail[i] + y.digits()[i] + carry;
            carry = if sum >= BASE {
                sum -= BASE;
                1
            } else {
                0
            };
            zd[i] = sum;
            i += 1;
        }
        while carry != 0 && i < cx {
            let mut sum = x_tail[i] + carry;
            carry = if sum >= BASE {
                sum -= BASE;
                1
            } else {
                0
            };
            zd[i] = sum;
            i += 1;
        }
        if i < cx {
            zd[i..cx].copy_from_slice(&x_tail[i..cx]);
        }
        i = cx;
        if carry != 0 {
            zd[i] = carry;
            i += 1;
        }
    }
    z.trim_to(i, true)
}

/// `|x| - |y|`, requires `|x| >= |y|`.
pub fn sub_abs(x: BigInt, y: &BigInt) -> BigInt {
    debug_assert!(cmp_abs(&x, y) >= 0);
    let cx = x.count();
    let cy = y.count();
    let x_tail: Vec<Digit> = x.digits()[..cx].to_vec();
    let mut z = x.alloc_reuse(cx);

    let mut borrow: Digit = 0;
    let mut i = 0;
    {
        let zd = z.digits_mut();
        while i < cy {
            let mut diff = x_tail[i] - borrow - y.digits()[i];
            borrow = if diff < 0 {
                diff += BASE;
                1
            } else {
                0
            };
            zd[i] = diff;
            i += 1;
        }
        while borrow != 0 && i < cx {
            let mut diff = x_tail[i] - borrow;
            borrow = if diff < 0 {
                diff += BASE;
                1
            } else {
                0
            };
            zd[i] = diff;
            i += 1;
        }
        debug_assert_eq!(borrow, 0);
        if i < cx {
            zd[i..cx].copy_from_slice(&x_tail[i..cx]);
        }
    }
    z.trim(true)
}

/// `x * y` where `-BASE < y < BASE`; the sign of `y` combines with `x`'s sign
/// to produce the result's sign.
pub fn mul_small(x: BigInt, y: i64) -> BigInt {
    debug_assert!(y > -(BASE as i64) && y < BASE as i64);
    let neg_y = y < 0;
    let y = y.unsigned_abs() as i64;
    let result_neg = x.is_neg() != neg_y;
    let cx = x.count();
    let x_tail: Vec<Digit> = x.digits()[..cx].to_vec();
    let mut z = x.alloc_reuse(cx + 1);
    let mut carry: i64 = 0;
    let mut i = 0;
    {
        let zd = z.digits_mut();
        while i < cx {
            let prod = x_tail[i] as i64 * y + carry;
            carry = prod / BASE as i64;
            zd[i] = (prod - carry * BASE as i64) as Digit;
            i += 1;
        }
        while carry > 0 {
            zd[i] = (carry % BASE as i64) as Digit;
            carry /= BASE as i64;
            i += 1;
        }
    }
    z.set_neg(result_neg);
    z.trim(true)
}

/// Divides `x` by the small positive `y` (`0 < y < BASE`), returning the
/// quotient with `x`'s buffer reused where possible and the remainder.
pub fn div_mod_small(x: BigInt, y: i64) -> (BigInt, i64) {
    debug_assert!(y > 0 && y < BASE as i64);
    let cx = x.count();
    let x_tail: Vec<Digit> = x.digits()[..cx].to_vec();
    let mut z = x.alloc_reuse(cx);
    let mut modulus: i64 = 0;
    {
        let zd = z.digits_mut();
        for i in (0..cx).rev() {
            let div = modulus * BASE as i64 + x_tail[i] as i64;
            let q = div / y;
            modulus = div - q * y;
            zd[i] = q as Digit;
        }
    }
    (z.trim(true), modulus)
}

/// Prepends `digits` zero digits, i.e. multiplies by `BASE^digits`.
pub fn shift_left_by_digits(x: BigInt, digits: usize) -> BigInt {
    if digits == 0 {
        return x;
    }
    let cx = x.count();
    let x_tail: Vec<Digit> = x.digits()[..cx].to_vec();
    let mut z = x.alloc_reuse(cx + digits);
    {
        let zd = z.digits_mut();
        for k in (0..cx).rev() {
            zd[k + digits] = x_tail[k];
        }
        for k in 0..digits {
            zd[k] = 0;
        }
    }
    z
}

/// Returns the digits `[lo, hi)` of `x` as a standalone `BigInt`, with `x`'s
/// sign. Equivalent to dividing by `BASE^lo` and truncating to `hi - lo`
/// digits.
pub fn slice(x: &BigInt, lo: usize, hi: usize) -> BigInt {
    let count = x.count();
    let lo = lo.min(count);
    let hi = hi.min(count);
    if hi <= lo {
        return BigInt::zero();
    }
    let mut v = vec![0 as Digit; hi - lo];
    v.copy_from_slice(&x.digits()[lo..hi]);
    BigInt::from_digits(v, x.is_neg())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_i64(i: i64) -> BigInt {
        BigInt::from_i64(i)
    }

    // `BigInt::from_i64` returns a uniquely-owned buffer with spare capacity
    // (`alloc`'s `roundup_count` rounds up to at least 4 digits), so passing
    // its result straight into these functions by value (no `.clone()`)
    // exercises `alloc_reuse`'s in-place-growth path, not the "allocate
    // fresh" fallback.

    #[test]
    fn add_abs_grows_owned_buffer_by_a_digit() {
        let x = from_i64(999_999_999);
        let y = from_i64(1);
        let z = add_abs(x, &y);
        assert_eq!(z.digits(), &[0, 1]);
    }

    #[test]
    fn sub_abs_shrinks_to_canonical_zero() {
        let x = from_i64(5);
        let y = from_i64(5);
        let z = sub_abs(x, &y);
        assert_eq!(z.digits(), &[0]);
        assert!(!z.is_neg());
    }

    #[test]
    fn mul_small_grows_owned_buffer_by_a_digit() {
        let x = from_i64(500_000_000);
        let z = mul_small(x, 3);
        assert_eq!(z.digits(), &[500_000_000, 1]);
        assert!(!z.is_neg());
    }

    #[test]
    fn mul_small_negates_sign_for_negative_factor() {
        let x = from_i64(7);
        let z = mul_small(x, -6);
        assert_eq!(z.digits(), &[42]);
        assert!(z.is_neg());
    }

    #[test]
    fn mul_small_by_zero_is_never_negative() {
        let z = mul_small(from_i64(0), -6);
        assert!(!z.is_neg());
        assert_eq!(z.digits(), &[0]);
    }

    #[test]
    fn div_mod_small_divides_owned_buffer() {
        let x = from_i64(100);
        let (q, r) = div_mod_small(x, 7);
        assert_eq!(q.digits(), &[14]);
        assert_eq!(r, 2);
    }

    #[test]
    fn shift_left_by_digits_grows_owned_buffer() {
        let x = from_i64(7);
        let z = shift_left_by_digits(x, 2);
        assert_eq!(z.digits(), &[0, 0, 7]);
    }

    #[test]
    fn shift_left_by_zero_is_identity() {
        let x = from_i64(7);
        let z = shift_left_by_digits(x, 0);
        assert_eq!(z.digits(), &[7]);
    }

    #[test]
    fn slice_extracts_digit_window() {
        let x = BigInt::from_digits(vec![1, 2, 3, 4], false);
        let z = slice(&x, 1, 3);
        assert_eq!(z.digits(), &[2, 3]);
    }

    #[test]
    fn slice_empty_window_is_canonical_zero() {
        let x = BigInt::from_digits(vec![1, 2, 3], false);
        let z = slice(&x, 2, 2);
        assert_eq!(z.digits(), &[0]);
    }

    #[test]
    fn cmp_abs_orders_by_count_then_top_down() {
        assert_eq!(cmp_abs(&from_i64(5), &from_i64(1_000_000_000)), -1);
        assert_eq!(cmp_abs(&from_i64(5), &from_i64(5)), 0);
        assert_eq!(cmp_abs(&from_i64(6), &from_i64(5)), 1);
    }
}
