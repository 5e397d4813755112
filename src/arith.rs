//! Integer arithmetic primitives: factorization, divisor enumeration,
//! gcd/lcm, and Euler's totient.

use std::collections::BTreeMap;

use num_integer::Integer;

use crate::{GroupError, Result};

/// Factor `n` into a prime -> exponent map via trial division.
///
/// `factorize(1)` is the empty map. Fails for n = 0, which has no
/// prime factorization.
pub fn factorize(n: u64) -> Result<BTreeMap<u64, u32>> {
    if n == 0 {
        return Err(GroupError::InvalidInput(
            "cannot factorize 0: argument must be a positive integer".to_string(),
        ));
    }

    let mut factors = BTreeMap::new();
    let mut remaining = n;

    // Factor out 2
    let mut exp = 0u32;
    while remaining % 2 == 0 {
        exp += 1;
        remaining /= 2;
    }
    if exp > 0 {
        factors.insert(2, exp);
    }

    // Odd trial divisors
    let mut d = 3u64;
    while d.saturating_mul(d) <= remaining {
        let mut exp = 0u32;
        while remaining % d == 0 {
            exp += 1;
            remaining /= d;
        }
        if exp > 0 {
            factors.insert(d, exp);
        }
        d += 2;
    }

    if remaining > 1 {
        factors.insert(remaining, 1);
    }

    Ok(factors)
}

/// All positive divisors of `n`, sorted ascending. Includes 1 and n.
pub fn divisors(n: u64) -> Result<Vec<u64>> {
    let factors = factorize(n)?;

    let mut divs = vec![1u64];
    for (&p, &a) in &factors {
        let mut extended = Vec::with_capacity(divs.len() * (a as usize + 1));
        for &d in &divs {
            let mut pk = 1u64;
            for _ in 0..=a {
                extended.push(d * pk);
                pk = pk.saturating_mul(p);
            }
        }
        divs = extended;
    }
    divs.sort_unstable();
    Ok(divs)
}

/// Greatest common divisor.
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Least common multiple.
pub fn lcm(a: u64, b: u64) -> u64 {
    a.lcm(&b)
}

/// Euler's totient: the number of integers in [1, n] coprime to n.
///
/// Computed from the factorization as the product of (p - 1) * p^(a - 1)
/// over prime powers p^a dividing n. `totient(1) == 1`.
pub fn totient(n: u64) -> Result<u64> {
    let factors = factorize(n)?;
    let mut phi = 1u64;
    for (&p, &a) in &factors {
        phi *= (p - 1) * p.pow(a - 1);
    }
    Ok(phi)
}
