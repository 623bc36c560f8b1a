//! Property tests for the core algebraic laws (commutativity, associativity,
//! distributivity, identities, and the division remainder identity),
//! exercised over randomly generated `Integer`s spanning both the `Small`
//! and `Big` representations. Uses a seeded `Xoshiro128StarStar` directly
//! from `rand_core`, rather than pulling in the full `rand` crate.

use bigint::{add, count_digits, div_mod, mul, neg, pow, sqr, sub, Integer};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

const TRIALS: usize = 300;

/// Generates a mix of small machine integers and genuinely large integers
/// (built by repeated multiplication so they reliably land on the `Big`
/// path), both signed.
fn random_integer(rng: &mut Xoshiro128StarStar) -> Integer {
    match rng.next_u32() % 4 {
        0 => Integer::from_int(rng.next_u32() as i64 - (u32::MAX as i64 / 2)),
        1 => Integer::from_int(0),
        2 => {
            let n = 4 + (rng.next_u32() % 20) as usize;
            let mut v = Integer::from_int((rng.next_u32() % 90 + 10) as i64);
            for _ in 0..n {
                v = mul(v, Integer::from_int((rng.next_u32() % 90 + 10) as i64));
            }
            if rng.next_u32() % 2 == 0 {
                v = neg(v);
            }
            v
        }
        _ => Integer::from_int(rng.next_u32() as i64),
    }
}

fn rng_at(seed: u64) -> Xoshiro128StarStar {
    Xoshiro128StarStar::seed_from_u64(seed)
}

#[test]
fn addition_is_commutative_and_associative() {
    let mut rng = rng_at(1);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        let y = random_integer(&mut rng);
        let z = random_integer(&mut rng);
        assert_eq!(
            add(x.clone(), y.clone()),
            add(y.clone(), x.clone()),
            "commutativity"
        );
        let lhs = add(add(x.clone(), y.clone()), z.clone());
        let rhs = add(x, add(y, z));
        assert_eq!(lhs, rhs, "associativity");
    }
}

#[test]
fn multiplication_is_commutative_and_associative() {
    let mut rng = rng_at(2);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        let y = random_integer(&mut rng);
        let z = random_integer(&mut rng);
        assert_eq!(
            mul(x.clone(), y.clone()),
            mul(y.clone(), x.clone()),
            "commutativity"
        );
        let lhs = mul(mul(x.clone(), y.clone()), z.clone());
        let rhs = mul(x, mul(y, z));
        assert_eq!(lhs, rhs, "associativity");
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    let mut rng = rng_at(3);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        let y = random_integer(&mut rng);
        let z = random_integer(&mut rng);
        let lhs = mul(x.clone(), add(y.clone(), z.clone()));
        let rhs = add(mul(x.clone(), y), mul(x, z));
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn add_neg_is_zero_and_sub_self_is_zero() {
    let mut rng = rng_at(4);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        assert_eq!(add(x.clone(), neg(x.clone())), Integer::from_int(0));
        assert_eq!(sub(x.clone(), x), Integer::from_int(0));
    }
}

#[test]
fn additive_and_multiplicative_identities() {
    let mut rng = rng_at(5);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        assert_eq!(add(x.clone(), Integer::from_int(0)), x.clone());
        assert_eq!(mul(x.clone(), Integer::from_int(1)), x.clone());
        assert_eq!(mul(x, Integer::from_int(0)), Integer::from_int(0));
    }
}

#[test]
fn division_satisfies_the_remainder_identity() {
    let mut rng = rng_at(6);
    let mut trials = 0;
    while trials < TRIALS {
        let x = random_integer(&mut rng);
        let y = random_integer(&mut rng);
        if y.is_zero() {
            continue;
        }
        trials += 1;
        let (q, r) = div_mod(x.clone(), y.clone()).unwrap();
        let reconstructed = add(mul(q, y.clone()), r.clone());
        assert_eq!(reconstructed, x.clone());

        let abs_r = if r.signum() < 0 { neg(r.clone()) } else { r.clone() };
        let abs_y = if y.signum() < 0 { neg(y.clone()) } else { y.clone() };
        assert!(abs_r.cmp(abs_y) < 0, "|remainder| must be smaller than |divisor|");
        assert!(r.signum() == 0 || r.signum() == x.signum());
    }
}

#[test]
fn squaring_matches_self_multiply() {
    let mut rng = rng_at(7);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        assert_eq!(sqr(x.clone()), mul(x.clone(), x));
    }
}

#[test]
fn pow_identities() {
    let mut rng = rng_at(8);
    for _ in 0..50 {
        let x = random_integer(&mut rng);
        assert_eq!(pow(x.clone(), Integer::from_int(0)), Integer::from_int(1));
        if !x.is_zero() {
            let p = (rng.next_u32() % 6) as i64;
            let q = (rng.next_u32() % 6) as i64;
            let lhs = pow(x.clone(), Integer::from_int(p + q));
            let rhs = mul(
                pow(x.clone(), Integer::from_int(p)),
                pow(x, Integer::from_int(q)),
            );
            assert_eq!(lhs, rhs);
        }
    }
    assert_eq!(pow(Integer::from_int(0), Integer::from_int(5)), Integer::from_int(0));
}

#[test]
fn count_digits_is_never_zero() {
    let mut rng = rng_at(9);
    for _ in 0..TRIALS {
        let x = random_integer(&mut rng);
        assert!(count_digits(&x).cmp(Integer::from_int(0)) > 0);
    }
}
