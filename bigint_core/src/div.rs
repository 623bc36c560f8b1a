//! Long division of one magnitude by another, via Knuth's Algorithm D
//! (*The Art of Computer Programming*, vol. 2, 4.3.1). The terminology below
//! follows the "duo"/"div" naming a reader of this workspace's bit-based
//! division routines will already recognize: `duo` is the dividend (what's
//! being divided up), `div` is the divisor, `quo` is the quotient, and `rem`
//! is the remainder. Spelling it out up front avoids the usual `x`/`y`/`q`/`r`
//! ambiguity once normalization and denormalization are in the mix.
//!
//! Requires `count(duo) >= count(div)` and `count(div) >= 2` (single-digit
//! divisors go through [`crate::abs_ops::div_mod_small`] instead, which needs
//! no normalization step at all).

use bigint_internals::{Digit, BASE};

use crate::abs_ops::div_mod_small;
use crate::storage::BigInt;

/// `duo / div`, `duo % div`, both magnitudes. `div` must have at least 2
/// digits; the caller is expected to have already routed single-digit
/// divisors to the cheaper `div_mod_small` path.
pub fn div_mod(duo: &BigInt, div: &BigInt) -> (BigInt, BigInt) {
    let c_duo = duo.count();
    let c_div = div.count();
    debug_assert!(c_duo >= c_div);
    debug_assert!(c_div >= 2);

    let mut quo = BigInt::alloc_zero(c_duo - c_div + 1, false);

    // Normalize so the divisor's leading digit is >= BASE/2: this bounds the
    // trial quotient digit estimate to within 2 of the true value.
    let divisor_hi = div.last_digit() as i64;
    let lambda = (BASE as i64 + 2 * divisor_hi - 1) / (2 * divisor_hi);

    let mut rem = crate::abs_ops::mul_small(duo.clone(), lambda);
    if rem.count() <= c_duo {
        rem = rem.ensure_unique().push(0);
    }
    let mut div_n = crate::abs_ops::mul_small(div.clone(), lambda);
    let divisor_hi = div_n.last_digit() as i64;
    div_n = div_n.ensure_unique().push(0);

    let cd = div_n.count();
    let shift_max = (c_duo - c_div) as isize;
    {
        let quo_d = quo.digits_mut();
        for shift in (0..=shift_max).rev() {
            let shift = shift as usize;
            let mut qd: i64 = BASE as i64 - 1;
            debug_assert!(rem.count() > shift + c_div);
            if rem.digits()[shift + c_div] as i64 != divisor_hi {
                debug_assert!(rem.count() > 1);
                let rem_hi =
                    rem.digits()[shift + c_div] as i64 * BASE as i64 + rem.digits()[shift + c_div - 1] as i64;
                qd = rem_hi / divisor_hi;
            }
            debug_assert!(qd <= BASE as i64 - 1);

            let mut carry: i64 = 0;
            let mut borrow: i64 = 0;
            {
                let rem_d = rem.digits_mut();
                for i in 0..cd {
                    carry += qd * div_n.digits()[i] as i64;
                    let q = carry / BASE as i64;
                    borrow += rem_d[shift + i] as i64 - (carry - q * BASE as i64);
                    carry = q;
                    if borrow < 0 {
                        rem_d[shift + i] = (borrow + BASE as i64) as Digit;
                        borrow = -1;
                    } else {
                        rem_d[shift + i] = borrow as Digit;
                        borrow = 0;
                    }
                }
            }
            while borrow != 0 {
                qd -= 1;
                let mut carry: i64 = 0;
                let rem_d = rem.digits_mut();
                for i in 0..cd {
                    carry += rem_d[shift + i] as i64 - BASE as i64 + div_n.digits()[i] as i64;
                    if carry < 0 {
                        rem_d[shift + i] = (carry + BASE as i64) as Digit;
                        carry = 0;
                    } else {
                        rem_d[shift + i] = carry as Digit;
                        carry = 1;
                    }
                }
                borrow += carry;
            }
            quo_d[shift] = qd as Digit;
        }
    }
    // denormalize the remainder
    let (rem, _) = div_mod_small(rem, lambda);
    (quo.trim(true), rem)
}
