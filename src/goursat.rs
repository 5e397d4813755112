//! Subgroups of a direct product of two cyclic groups.
//!
//! Goursat's lemma identifies the subgroups of G x H with triples
//! (G1/G2, H1/H2, f) where G2 <= G1 <= G, H2 <= H1 <= H and f is an
//! isomorphism G1/G2 -> H1/H2. For cyclic factors every subquotient is
//! cyclic, so the subquotients are exactly the divisor pairs (a, b) with
//! b | a | n, two subquotients are matched precisely when their quotient
//! orders agree, and the isomorphisms between matched quotients of order d
//! correspond to the units mod d, phi(d) of them. Each choice expands to an
//! explicit element set by pairing the cosets of G2 in G1 with the cosets
//! of H2 in H1 along the chosen isomorphism and taking the cross product
//! within each pair.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::arith::{divisors, gcd, totient};
use crate::group::{Coset, CyclicGroup, GroupElement, Subgroup};
use crate::{GroupError, Result};

/// A subquotient descriptor: the order-g1 subgroup of some ambient cyclic
/// group modulo its own order-g2 subgroup. `order` is g1 / g2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotientGroup {
    pub g1: u64,
    pub g2: u64,
    pub order: u64,
}

/// A matched pair of subquotients of equal quotient order, one from each
/// factor of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoursatTuple {
    pub g1: u64,
    pub g2: u64,
    pub h1: u64,
    pub h2: u64,
    pub order: u64,
}

/// One subgroup of C_n x C_m, as an explicit set of element pairs.
///
/// There is no canonical label; two values are equal exactly when their
/// element sets coincide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TupleSubgroup {
    elements: BTreeSet<(GroupElement, GroupElement)>,
}

impl TupleSubgroup {
    fn from_elements(elements: BTreeSet<(GroupElement, GroupElement)>) -> Self {
        TupleSubgroup { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, pair: &(GroupElement, GroupElement)) -> bool {
        self.elements.contains(pair)
    }

    pub fn elements(&self) -> &BTreeSet<(GroupElement, GroupElement)> {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &(GroupElement, GroupElement)> {
        self.elements.iter()
    }
}

/// The subquotients of a cyclic group of order n: every pair (a, b) with
/// b | a | n, carrying quotient order a / b.
pub fn subquotients(n: u64) -> Result<Vec<QuotientGroup>> {
    let mut quotients = Vec::new();
    for a in divisors(n)? {
        for b in divisors(a)? {
            quotients.push(QuotientGroup {
                g1: a,
                g2: b,
                order: a / b,
            });
        }
    }
    Ok(quotients)
}

/// All cross pairs of subquotients of C_n and C_m with equal quotient order.
pub fn goursat_tuples(n: u64, m: u64) -> Result<Vec<GoursatTuple>> {
    let quotients_g = subquotients(n)?;
    let quotients_h = subquotients(m)?;

    let mut tuples = Vec::new();
    for a in &quotients_g {
        for b in &quotients_h {
            if a.order == b.order {
                tuples.push(GoursatTuple {
                    g1: a.g1,
                    g2: a.g2,
                    h1: b.g1,
                    h2: b.g2,
                    order: a.order,
                });
            }
        }
    }
    Ok(tuples)
}

/// The number of subgroups C_n x C_m must have: the sum of phi(order) over
/// all matched subquotient pairs, one subgroup per isomorphism.
pub fn predicted_subgroup_count(n: u64, m: u64) -> Result<u64> {
    let mut count = 0u64;
    for t in goursat_tuples(n, m)? {
        count += totient(t.order)?;
    }
    Ok(count)
}

/// Enumerate every subgroup of C_n x C_m.
///
/// Goursat's lemma guarantees the list is complete and duplicate-free for
/// cyclic factors. Fails with `InvalidInput` for zero orders; an
/// `InvariantViolation` from the coset-pairing stage indicates an
/// algorithmic bug and aborts the whole enumeration.
pub fn subgroups_of_product(n: u64, m: u64) -> Result<Vec<TupleSubgroup>> {
    if n == 0 || m == 0 {
        return Err(GroupError::InvalidInput(
            "product factor orders must be positive integers".to_string(),
        ));
    }

    // Trivial factors collapse the product onto the other factor.
    if n == 1 {
        let identity = CyclicGroup::new(1)?.identity();
        return collapsed_subgroups(m, |h| (identity, h));
    }
    if m == 1 {
        let identity = CyclicGroup::new(1)?.identity();
        return collapsed_subgroups(n, |g| (g, identity));
    }

    let group_g = CyclicGroup::new(n)?;
    let group_h = CyclicGroup::new(m)?;

    let tuples = goursat_tuples(n, m)?;
    log::debug!(
        "enumerating subgroups of C{} x C{}: {} matched subquotient pairs",
        n,
        m,
        tuples.len()
    );

    let mut subgroups = Vec::new();
    for t in &tuples {
        let g1 = group_g.subgroup_of_order(t.g1)?;
        let g2 = group_g.subgroup_of_order(t.g2)?;
        let h1 = group_h.subgroup_of_order(t.h1)?;
        let h2 = group_h.subgroup_of_order(t.h2)?;

        // The isomorphisms G1/G2 -> H1/H2 are indexed by the units mod the
        // quotient order. The max() keeps the range nonempty for order 1,
        // whose single trivial isomorphism is j = 1.
        let units: Vec<u64> = (1..t.order.max(2)).filter(|&j| gcd(j, t.order) == 1).collect();
        let expected = totient(t.order)?;
        if units.len() as u64 != expected {
            return Err(GroupError::InvariantViolation(format!(
                "expected {} units mod {}, found {}",
                expected,
                t.order,
                units.len()
            )));
        }

        for &j in &units {
            subgroups.push(subgroup_from_tuple(&g1, &g2, &h1, &h2, j)?);
        }
    }

    log::debug!(
        "C{} x C{}: {} subgroups from {} tuples",
        n,
        m,
        subgroups.len(),
        tuples.len()
    );
    Ok(subgroups)
}

/// Degenerate product with one trivial factor: one TupleSubgroup per
/// subgroup of C_k, every element paired with the trivial identity.
fn collapsed_subgroups(
    k: u64,
    pair: impl Fn(GroupElement) -> (GroupElement, GroupElement),
) -> Result<Vec<TupleSubgroup>> {
    let lattice = CyclicGroup::new(k)?.all_subgroups()?;
    Ok(lattice
        .values()
        .map(|sub| {
            TupleSubgroup::from_elements(sub.elements().into_iter().map(&pair).collect())
        })
        .collect())
}

/// Expand one Goursat tuple and one isomorphism choice j into an explicit
/// subgroup of the product.
///
/// The isomorphism sends the generator of G1 to the j-th power of the
/// generator of H1. Cosets of G2 in G1 are generated by powers of G1's
/// generator and paired index-for-index with the cosets of H2 in H1
/// generated the same way through the isomorphism image; the subgroup is
/// the union of the cross products within each matched coset pair.
fn subgroup_from_tuple(
    g1: &Subgroup,
    g2: &Subgroup,
    h1: &Subgroup,
    h2: &Subgroup,
    j: u64,
) -> Result<TupleSubgroup> {
    let g = g1.generator();
    let h = h1.generator().pow(j);
    let index = g1.order() / g2.order();

    let mut coset_pairs = Vec::with_capacity(index as usize);
    let mut covered_g: BTreeSet<GroupElement> = BTreeSet::new();
    let mut covered_h: BTreeSet<GroupElement> = BTreeSet::new();
    for i in 0..index {
        let coset_g = Coset::new(g.pow(i), *g2).elements();
        let coset_h = Coset::new(h.pow(i), *h2).elements();
        covered_g.extend(coset_g.iter().copied());
        covered_h.extend(coset_h.iter().copied());
        coset_pairs.push((coset_g, coset_h));
    }

    // The generated cosets must tile exactly the two subquotient numerators;
    // anything else means the generator choice was wrong.
    if covered_g != g1.element_set() {
        return Err(GroupError::InvariantViolation(format!(
            "cosets of the order-{} subgroup do not cover the order-{} subgroup",
            g2.order(),
            g1.order()
        )));
    }
    if covered_h != h1.element_set() {
        return Err(GroupError::InvariantViolation(format!(
            "cosets of the order-{} subgroup do not cover the order-{} subgroup",
            h2.order(),
            h1.order()
        )));
    }

    let mut elements = BTreeSet::new();
    for (coset_g, coset_h) in &coset_pairs {
        for a in coset_g {
            for b in coset_h {
                elements.insert((*a, *b));
            }
        }
    }
    Ok(TupleSubgroup::from_elements(elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subquotients() {
        // Divisor chains b | a | 4: (1,1), (2,1), (2,2), (4,1), (4,2), (4,4)
        let quotients = subquotients(4).unwrap();
        assert_eq!(quotients.len(), 6);
        assert!(quotients.contains(&QuotientGroup { g1: 4, g2: 2, order: 2 }));
        assert!(quotients
            .iter()
            .all(|q| q.g1 % q.g2 == 0 && 4 % q.g1 == 0 && q.order == q.g1 / q.g2));
    }

    #[test]
    fn test_goursat_tuples_orders_match() {
        for t in goursat_tuples(4, 6).unwrap() {
            assert_eq!(t.g1 / t.g2, t.order);
            assert_eq!(t.h1 / t.h2, t.order);
        }
    }

    #[test]
    fn test_rejects_zero_orders() {
        assert!(matches!(
            subgroups_of_product(0, 5),
            Err(GroupError::InvalidInput(_))
        ));
        assert!(matches!(
            subgroups_of_product(5, 0),
            Err(GroupError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_trivial_product() {
        // C1 x C1 has exactly the trivial subgroup
        let subs = subgroups_of_product(1, 1).unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].len(), 1);
    }

    #[test]
    fn test_collapsed_product_matches_cyclic_lattice() {
        // C1 x C12 collapses onto C12: one subgroup per divisor of 12
        let subs = subgroups_of_product(1, 12).unwrap();
        assert_eq!(subs.len(), 6);
        let sizes: Vec<usize> = subs.iter().map(|s| s.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4, 6, 12]);
        for s in &subs {
            assert!(s.iter().all(|(g, _)| g.is_identity()));
        }

        // Symmetric case
        let subs = subgroups_of_product(12, 1).unwrap();
        assert_eq!(subs.len(), 6);
        for s in &subs {
            assert!(s.iter().all(|(_, h)| h.is_identity()));
        }
    }

    #[test]
    fn test_coprime_product_is_cyclic() {
        // C2 x C3 is isomorphic to C6: subgroup count equals divisor count
        let subs = subgroups_of_product(2, 3).unwrap();
        assert_eq!(subs.len(), 4);
        let mut sizes: Vec<usize> = subs.iter().map(|s| s.len()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 3, 6]);
    }

    #[test]
    fn test_known_subgroup_counts() {
        // C2 x C2 (Klein four-group): 5 subgroups
        assert_eq!(subgroups_of_product(2, 2).unwrap().len(), 5);
        // C2 x C4: 8 subgroups
        assert_eq!(subgroups_of_product(2, 4).unwrap().len(), 8);
        // C4 x C6: 16 subgroups
        assert_eq!(subgroups_of_product(4, 6).unwrap().len(), 16);
    }

    #[test]
    fn test_count_matches_prediction() {
        for (n, m) in [(2, 2), (2, 4), (3, 9), (4, 6), (6, 6), (5, 7)] {
            let subs = subgroups_of_product(n, m).unwrap();
            let predicted = predicted_subgroup_count(n, m).unwrap();
            assert_eq!(
                subs.len() as u64,
                predicted,
                "C{} x C{} subgroup count must match the totient-sum prediction",
                n,
                m
            );
        }
    }

    #[test]
    fn test_subgroups_contain_identity_and_are_closed() {
        let n = 4u64;
        let m = 6u64;
        let g = CyclicGroup::new(n).unwrap();
        let h = CyclicGroup::new(m).unwrap();
        let identity = (g.identity(), h.identity());

        for sub in subgroups_of_product(n, m).unwrap() {
            assert!(sub.contains(&identity), "every subgroup contains (e, e)");
            assert_eq!(
                (n * m) as usize % sub.len(),
                0,
                "subgroup cardinality must divide the product order"
            );
            for a in sub.iter() {
                for b in sub.iter() {
                    let product = (a.0.mul(&b.0), a.1.mul(&b.1));
                    assert!(
                        sub.contains(&product),
                        "subgroup must be closed under the componentwise product"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_duplicate_subgroups() {
        for (n, m) in [(2, 4), (4, 6), (6, 6)] {
            let subs = subgroups_of_product(n, m).unwrap();
            let distinct: BTreeSet<&TupleSubgroup> = subs.iter().collect();
            assert_eq!(
                distinct.len(),
                subs.len(),
                "C{} x C{} enumeration must not repeat element sets",
                n,
                m
            );
        }
    }
}
