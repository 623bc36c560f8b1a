//! The tagged `Integer` value: a machine-word fast path (`Small`) with
//! transparent promotion to and demotion from an arbitrary-precision
//! representation (`Big`, a [`BigInt`]). Every operation here either stays
//! entirely on the `Small` fast path (when both operands are `Small` and the
//! result provably fits) or promotes to `Big`, runs the `bigint_core`
//! operation, and normalizes the result back down to `Small` if it fits —
//! mirroring the `integer_*_generic` dispatch this workspace's decimal bignum
//! core is modeled on.

use bigint_core::BigInt;
use bigint_internals::ArithError;

/// The largest magnitude a [`Integer::Small`] may hold. Chosen so that
/// `Small + Small`, `Small - Small`, and `-Small` can all be computed
/// directly in `i64` before the range check runs, without risking `i64`
/// overflow themselves: doubling [`SMALL_MAX`] (or negating [`SMALL_MIN`])
/// stays comfortably inside `i64`'s range.
pub const SMALL_MAX: i64 = (1i64 << 62) - 1;
/// The smallest (most negative) magnitude a [`Integer::Small`] may hold.
pub const SMALL_MIN: i64 = -(1i64 << 62);

/// An arbitrary-precision signed integer: either a machine integer in
/// `[SMALL_MIN, SMALL_MAX]`, or a reference to a heap-allocated [`BigInt`].
///
/// `Big` is never used to hold a value that would fit in `Small`: every
/// operation that produces an `Integer` normalizes its result, so `Big` is
/// only ever observed holding a genuinely out-of-range magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Integer {
    Small(i64),
    Big(BigInt),
}

impl Integer {
    /// Builds an `Integer` from a machine integer, routing to `Small` when it
    /// fits in `[SMALL_MIN, SMALL_MAX]` and promoting to `Big` otherwise
    /// (`SMALL_MAX`/`SMALL_MIN` are narrower than `i64::MAX`/`i64::MIN`, so
    /// this can actually happen).
    pub fn from_int(i: i64) -> Integer {
        if (SMALL_MIN..=SMALL_MAX).contains(&i) {
            Integer::Small(i)
        } else {
            Integer::Big(BigInt::from_i64(i))
        }
    }

    /// Wraps an already-computed [`BigInt`], downcasting to `Small` if it
    /// fits. This is the single normalization point every `Big`-path
    /// operation below funnels its result through.
    pub fn from_big(b: BigInt) -> Integer {
        if let Some(i) = small_value(&b) {
            Integer::Small(i)
        } else {
            Integer::Big(b)
        }
    }

    /// Promotes `self` to a [`BigInt`], consuming it. A `Small` value is
    /// materialized fresh; a `Big` value is returned as-is (an `Rc` bump, not
    /// a deep copy).
    pub fn into_big(self) -> BigInt {
        match self {
            Integer::Small(i) => BigInt::from_i64(i),
            Integer::Big(b) => b,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Small(i) => *i == 0,
            Integer::Big(b) => b.is_zero(),
        }
    }

    pub fn signum(&self) -> i32 {
        match self {
            Integer::Small(i) => i.signum() as i32,
            Integer::Big(b) => bigint_core::signum(b),
        }
    }

    pub fn is_even(&self) -> bool {
        match self {
            Integer::Small(i) => i % 2 == 0,
            Integer::Big(b) => bigint_core::is_even(b),
        }
    }

    pub fn neg(self) -> Integer {
        match self {
            // SMALL_MIN's negation, `1 << 62`, still fits in `i64` (it only
            // falls outside `[SMALL_MIN, SMALL_MAX]`), so `from_int` correctly
            // promotes it rather than wrapping.
            Integer::Small(i) => Integer::from_int(-i),
            Integer::Big(b) => Integer::from_big(bigint_core::neg(b)),
        }
    }

    /// `-1`/`0`/`1` comparing `self` to `other`.
    pub fn cmp(self, other: Integer) -> i32 {
        match (&self, &other) {
            (Integer::Small(a), Integer::Small(b)) => (*a > *b) as i32 - (*a < *b) as i32,
            _ => bigint_core::cmp(&self.into_big(), &other.into_big()),
        }
    }
}

/// Returns `Some(i)` if `b`'s value fits in `[SMALL_MIN, SMALL_MAX]`.
fn small_value(b: &BigInt) -> Option<i64> {
    // SMALL_MAX is ~4.6e18, which needs up to 3 base-1e9 digits (BASE^2 is
    // only ~1e18); anything wider than that can never fit regardless of sign.
    if b.count() > 3 {
        return None;
    }
    let mut v: i128 = 0;
    for &d in b.digits().iter().rev() {
        v = v * (bigint_internals::BASE as i128) + d as i128;
    }
    if b.is_neg() {
        v = -v;
    }
    if v >= SMALL_MIN as i128 && v <= SMALL_MAX as i128 {
        Some(v as i64)
    } else {
        None
    }
}

pub fn add(x: Integer, y: Integer) -> Integer {
    if let (Integer::Small(a), Integer::Small(b)) = (&x, &y) {
        if let Some(s) = a.checked_add(*b) {
            if (SMALL_MIN..=SMALL_MAX).contains(&s) {
                return Integer::Small(s);
            }
        }
    }
    Integer::from_big(bigint_core::add(x.into_big(), &y.into_big()))
}

pub fn sub(x: Integer, y: Integer) -> Integer {
    if let (Integer::Small(a), Integer::Small(b)) = (&x, &y) {
        if let Some(s) = a.checked_sub(*b) {
            if (SMALL_MIN..=SMALL_MAX).contains(&s) {
                return Integer::Small(s);
            }
        }
    }
    Integer::from_big(bigint_core::sub(x.into_big(), &y.into_big()))
}

pub fn mul(x: Integer, y: Integer) -> Integer {
    if let (Integer::Small(a), Integer::Small(b)) = (&x, &y) {
        if let Some(p) = a.checked_mul(*b) {
            if (SMALL_MIN..=SMALL_MAX).contains(&p) {
                return Integer::Small(p);
            }
        }
    }
    let xb = x.into_big();
    let yb = y.into_big();
    Integer::from_big(bigint_core::mul(&xb, &yb))
}

pub fn sqr(x: Integer) -> Integer {
    if let Integer::Small(a) = &x {
        if let Some(p) = a.checked_mul(*a) {
            if (SMALL_MIN..=SMALL_MAX).contains(&p) {
                return Integer::Small(p);
            }
        }
    }
    let xb = x.into_big();
    Integer::from_big(bigint_core::sqr(&xb))
}

pub fn div_mod(x: Integer, y: Integer) -> Result<(Integer, Integer), ArithError> {
    if let (Integer::Small(a), Integer::Small(b)) = (&x, &y) {
        let (a, b) = (*a, *b);
        if b == 0 {
            return Err(ArithError::DivisionByZero);
        }
        // truncating division/remainder, matching `div_mod`'s contract; `a`
        // and `b` are both in `[SMALL_MIN, SMALL_MAX]` so neither `a / b` nor
        // `a % b` can overflow `i64` the way `i64::MIN / -1` would.
        let q = a / b;
        let r = a % b;
        return Ok((Integer::Small(q), Integer::Small(r)));
    }
    let (q, r) = bigint_core::div_mod(&x.into_big(), &y.into_big())?;
    Ok((Integer::from_big(q), Integer::from_big(r)))
}

pub fn div(x: Integer, y: Integer) -> Result<Integer, ArithError> {
    div_mod(x, y).map(|(q, _)| q)
}

pub fn rem(x: Integer, y: Integer) -> Result<Integer, ArithError> {
    div_mod(x, y).map(|(_, r)| r)
}

/// `x^p`, `p >= 0` (negative exponents truncate to `0` except for `x` in
/// `{-1, 1}`, per [`bigint_core::pow`]'s special cases).
pub fn pow(x: Integer, p: Integer) -> Integer {
    Integer::from_big(bigint_core::pow(x.into_big(), &p.into_big()))
}

pub fn count_digits(x: &Integer) -> Integer {
    let b = match x {
        Integer::Small(i) => BigInt::from_i64(*i),
        Integer::Big(b) => b.clone(),
    };
    Integer::from_int(bigint_core::count_digits(&b) as i64)
}

pub fn ctz(x: &Integer) -> Integer {
    if x.is_zero() {
        return Integer::from_int(0);
    }
    let b = match x {
        Integer::Small(i) => BigInt::from_i64(*i),
        Integer::Big(b) => b.clone(),
    };
    Integer::from_int(bigint_core::ctz(&b) as i64)
}

/// Multiplies `x` by `10^p`. `p` must itself be `Small` (a `Big` exponent is
/// rejected as unreasonable, per [`ArithError::BadScaleExponent`]).
pub fn mul_pow10(x: Integer, p: Integer) -> Result<Integer, ArithError> {
    match p {
        Integer::Small(p) => Ok(Integer::from_big(bigint_core::mul_pow10(x.into_big(), p))),
        Integer::Big(_) => Err(ArithError::BadScaleExponent),
    }
}

/// Divides `x` by `10^p`, truncating. `p` must be `Small`.
pub fn div_pow10(x: Integer, p: Integer) -> Result<Integer, ArithError> {
    match p {
        Integer::Small(p) => Ok(Integer::from_big(bigint_core::div_pow10(x.into_big(), p))),
        Integer::Big(_) => Err(ArithError::BadScaleExponent),
    }
}
