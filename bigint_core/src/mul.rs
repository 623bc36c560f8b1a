//! Multiplication: the schoolbook O(n*m) routine, and a Karatsuba
//! divide-and-conquer wrapper that falls back to schoolbook below a size
//! cutoff. Both operate on magnitudes only and combine the operands' signs by
//! XOR; callers pass already-signed `BigInt`s in and get a correctly-signed
//! product out.

use bigint_internals::{Digit, BASE};

use crate::abs_ops::{add_abs, cmp_abs, shift_left_by_digits, slice, sub_abs};
use crate::storage::BigInt;

/// `x * y`, schoolbook algorithm: O(count(x) * count(y)) single-digit
/// multiply-accumulates, each carried in a 64-bit accumulator.
pub fn mul_schoolbook(x: &BigInt, y: &BigInt) -> BigInt {
    let cx = x.count();
    let cy = y.count();
    let is_neg = x.is_neg() != y.is_neg();
    let mut z = BigInt::alloc_zero(cx + cy, is_neg);
    {
        let zd = z.digits_mut();
        for i in 0..cx {
            let dx = x.digits()[i] as i64;
            if dx == 0 {
                continue;
            }
            let mut carry: i64 = 0;
            for j in 0..cy {
                let dy = y.digits()[j] as i64;
                let prod = dx * dy + zd[i + j] as i64 + carry;
                carry = prod / BASE as i64;
                zd[i + j] = (prod - carry * BASE as i64) as Digit;
            }
            zd[i + cy] += carry as Digit;
        }
    }
    z.trim(true)
}

/// `x * x`.
pub fn sqr(x: &BigInt) -> BigInt {
    mul_schoolbook(x, x)
}

/// The cost-model cutover from the schoolbook to the divide-and-conquer
/// algorithm, balancing Karatsuba's better asymptotics against its higher
/// constant factor and recursion overhead. `i` and `j` are operand digit
/// counts.
pub fn use_karatsuba(i: usize, j: usize) -> bool {
    let (i, j) = (i as f64, j as f64);
    (0.000012 * (i * j) - 0.0025 * (i + j)) >= 0.0
}

/// Below this many digits in the larger operand, Karatsuba's recursive
/// overhead isn't worth it regardless of the cost-model heuristic above.
const KARATSUBA_CUTOFF: usize = 25;

/// `x * y` via Karatsuba's three-multiplication divide-and-conquer identity,
/// recursing on half-size slices until operands drop below
/// [`KARATSUBA_CUTOFF`] digits, where it defers to [`mul_schoolbook`].
pub fn mul_karatsuba(x: &BigInt, y: &BigInt) -> BigInt {
    let n = x.count().max(y.count());
    if n <= KARATSUBA_CUTOFF {
        return mul_schoolbook(x, y);
    }
    let n = (n + 1) / 2;

    let a = slice(x, 0, n);
    let b = slice(x, n, x.count());
    let c = slice(y, 0, n);
    let d = slice(y, n, y.count());

    let ac = mul_karatsuba(&a, &c);
    let bd = mul_karatsuba(&b, &d);
    let a_plus_b = add_signed(&a, &b);
    let c_plus_d = add_signed(&c, &d);
    let abcd = mul_karatsuba(&a_plus_b, &c_plus_d);

    // (ac + bd) both already computed; middle term is abcd - ac - bd
    let middle = sub_signed(&sub_signed(&abcd, &ac), &bd);
    let p1 = shift_left_by_digits(middle, n);
    let p2 = shift_left_by_digits(bd, 2 * n);
    let sum = add_signed(&add_signed(&ac, &p1), &p2);
    sum.trim(true)
}

/// Signed addition used only inside Karatsuba, where `a`/`b`/`c`/`d` are
/// magnitude-only slices carrying `x`/`y`'s overall sign.
fn add_signed(x: &BigInt, y: &BigInt) -> BigInt {
    if x.is_neg() == y.is_neg() {
        let is_neg = x.is_neg();
        let mut z = if x.count() >= y.count() {
            add_abs(x.clone(), y)
        } else {
            add_abs(y.clone(), x)
        };
        z.set_neg(is_neg);
        z
    } else if cmp_abs(x, y) >= 0 {
        let mut z = sub_abs(x.clone(), y);
        z.set_neg(x.is_neg());
        z
    } else {
        let mut z = sub_abs(y.clone(), x);
        z.set_neg(y.is_neg());
        z
    }
}

fn sub_signed(x: &BigInt, y: &BigInt) -> BigInt {
    let neg_y = BigInt::from_digits(y.digits().to_vec(), !y.is_neg());
    add_signed(x, &neg_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_i64(i: i64) -> BigInt {
        BigInt::from_i64(i)
    }

    #[test]
    fn schoolbook_matches_hand_computed() {
        // 123456789 * 987654321 == 121932631112635269
        let x = from_i64(123_456_789);
        let y = from_i64(987_654_321);
        let z = mul_schoolbook(&x, &y);
        assert!(!z.is_neg());
        assert_eq!(z.digits(), &[112_635_269, 121_932_631]);
    }

    #[test]
    fn karatsuba_matches_schoolbook_above_cutoff() {
        // build two ~40-digit numbers out of repeated small multiplies
        let mut x = from_i64(1);
        let mut y = from_i64(1);
        for _ in 0..40 {
            x = super::mul_schoolbook(&x, &from_i64(99_999_989));
            y = super::mul_schoolbook(&y, &from_i64(99_999_971));
        }
        let a = mul_schoolbook(&x, &y);
        let b = mul_karatsuba(&x, &y);
        assert_eq!(a.digits(), b.digits());
        assert_eq!(a.is_neg(), b.is_neg());
    }

    #[test]
    fn cutover_heuristic_favors_schoolbook_for_small_operands() {
        assert!(!use_karatsuba(4, 4));
        assert!(use_karatsuba(500, 500));
    }
}
