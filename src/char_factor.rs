//! Characteristic factors of the multiplicative group (Z/nZ)*.
//!
//! Follows Shanks' tabulation method (Solved and Unsolved Problems in
//! Number Theory, 2nd ed., p. 93): from the factorization of n, write down
//! the primary decomposition of (Z/nZ)* as per-prime cyclic components,
//! then combine coprime components into the invariant-factor form
//! d1 | d2 | ... | dk.

use std::collections::BTreeMap;

use crate::arith::factorize;
use crate::Result;

fn add_component(components: &mut BTreeMap<u64, Vec<u32>>, p: u64, a: u32) {
    components.entry(p).or_default().push(a);
}

/// Primary decomposition of (Z/nZ)*: a map from prime p to the ascending
/// list of exponents a such that C_{p^a} is a direct factor.
///
/// Construction, per Shanks:
/// 1. Factor n = 2^m * p_1^a_1 * ... with odd primes p_i.
/// 2. The 2-part contributes C_2 when m >= 2 and additionally C_{2^(m-2)}
///    when m > 2 (nothing for m in {0, 1}).
/// 3. Each odd p_i^a_i contributes C_{p_i^(a_i - 1)} when a_i > 1, plus one
///    component per prime-power factor of p_i - 1.
pub fn primary_decomposition(n: u64) -> Result<BTreeMap<u64, Vec<u32>>> {
    let mut prime_factors = factorize(n)?;
    let mut components: BTreeMap<u64, Vec<u32>> = BTreeMap::new();

    let m = prime_factors.remove(&2).unwrap_or(0);
    if m >= 2 {
        add_component(&mut components, 2, 1);
    }
    if m > 2 {
        add_component(&mut components, 2, m - 2);
    }

    for (&p, &a) in &prime_factors {
        if a > 1 {
            add_component(&mut components, p, a - 1);
        }
        for (&q, &b) in &factorize(p - 1)? {
            add_component(&mut components, q, b);
        }
    }

    for exponents in components.values_mut() {
        exponents.sort_unstable();
    }
    Ok(components)
}

/// Combine a primary decomposition into invariant factors.
///
/// Each round pops the largest remaining exponent of every prime that still
/// has one and multiplies the popped prime powers into a single factor;
/// primes with exhausted lists drop out of later rounds. The result is
/// sorted ascending, so each factor divides the next.
pub fn reduce_to_invariant_factors(mut primary: BTreeMap<u64, Vec<u32>>) -> Vec<u64> {
    let mut factors = Vec::new();
    while !primary.is_empty() {
        let mut product = 1u64;
        for (&p, exponents) in primary.iter_mut() {
            if let Some(a) = exponents.pop() {
                product *= p.pow(a);
            }
        }
        factors.push(product);
        primary.retain(|_, exponents| !exponents.is_empty());
    }
    factors.sort_unstable();
    factors
}

/// The characteristic factors of n: the invariant-factor decomposition of
/// the multiplicative group (Z/nZ)*, sorted ascending.
///
/// The trivial unit groups mod 1 and mod 2 give an empty list.
pub fn characteristic_factors(n: u64) -> Result<Vec<u64>> {
    Ok(reduce_to_invariant_factors(primary_decomposition(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::totient;
    use crate::GroupError;

    #[test]
    fn test_trivial_unit_groups() {
        assert!(characteristic_factors(1).unwrap().is_empty());
        assert!(characteristic_factors(2).unwrap().is_empty());
    }

    #[test]
    fn test_known_unit_groups() {
        // (Z/7Z)* is cyclic of order 6
        assert_eq!(characteristic_factors(7).unwrap(), vec![6]);
        // (Z/8Z)* is C2 x C2
        assert_eq!(characteristic_factors(8).unwrap(), vec![2, 2]);
        // (Z/16Z)* is C2 x C4
        assert_eq!(characteristic_factors(16).unwrap(), vec![2, 4]);
        // (Z/15Z)* is C2 x C4
        assert_eq!(characteristic_factors(15).unwrap(), vec![2, 4]);
        // (Z/24Z)* is C2 x C2 x C2
        assert_eq!(characteristic_factors(24).unwrap(), vec![2, 2, 2]);
        // (Z/9Z)* is cyclic of order 6
        assert_eq!(characteristic_factors(9).unwrap(), vec![6]);
        // (Z/35Z)* is C2 x C12
        assert_eq!(characteristic_factors(35).unwrap(), vec![2, 12]);
    }

    #[test]
    fn test_factors_multiply_to_totient() {
        for n in 1u64..=200 {
            let factors = characteristic_factors(n).unwrap();
            let product: u64 = factors.iter().product();
            assert_eq!(
                product,
                totient(n).unwrap(),
                "invariant factors of (Z/{}Z)* must multiply to phi({})",
                n,
                n
            );
        }
    }

    #[test]
    fn test_each_factor_divides_the_next() {
        for n in 1u64..=200 {
            let factors = characteristic_factors(n).unwrap();
            for pair in factors.windows(2) {
                assert_eq!(
                    pair[1] % pair[0],
                    0,
                    "invariant factors of (Z/{}Z)* must form a divisibility chain: {:?}",
                    n,
                    factors
                );
            }
            assert!(
                factors.iter().all(|&d| d > 1),
                "no trivial factors may appear for n = {}",
                n
            );
        }
    }

    #[test]
    fn test_primary_decomposition_exponents_sorted() {
        // n = 16: unit group C2 x C4 -> prime 2 with exponents [1, 2]
        let primary = primary_decomposition(16).unwrap();
        assert_eq!(primary[&2], vec![1, 2]);

        // n = 7: 7 - 1 = 6 = 2 * 3
        let primary = primary_decomposition(7).unwrap();
        assert_eq!(primary[&2], vec![1]);
        assert_eq!(primary[&3], vec![1]);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(matches!(
            characteristic_factors(0),
            Err(GroupError::InvalidInput(_))
        ));
    }
}
