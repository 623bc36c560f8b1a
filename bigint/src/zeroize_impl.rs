//! `zeroize` support for [`Integer`].

use zeroize::Zeroize;

use crate::Integer;

impl Zeroize for Integer {
    fn zeroize(&mut self) {
        match self {
            Integer::Small(i) => i.zeroize(),
            Integer::Big(b) => b.zeroize(),
        }
        *self = Integer::Small(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_resets_to_zero() {
        let mut i = Integer::from_int(-42);
        i.zeroize();
        assert_eq!(i, Integer::from_int(0));
    }
}
