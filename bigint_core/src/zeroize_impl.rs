//! `zeroize` support for [`BigInt`], gated behind the `zeroize` feature.
//! Zeroing only takes effect when the digit buffer is uniquely owned; a
//! `BigInt` sharing its buffer with another live handle is first deep-copied
//! (via [`BigInt::ensure_unique`]) so that zeroizing one handle can never
//! corrupt a value still visible through another.

use zeroize::Zeroize;

use crate::storage::BigInt;

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        let this = core::mem::replace(self, BigInt::zero());
        let mut this = this.ensure_unique();
        this.digits_mut().zeroize();
        this.set_neg(false);
        *self = this;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_clears_digits_and_sign() {
        let mut b = BigInt::from_i64(-123_456_789_012);
        b.zeroize();
        assert!(!b.is_neg());
        assert!(b.digits().iter().all(|&d| d == 0));
    }
}
