//! Abstract model of finite cyclic groups, their subgroups, and cosets.
//!
//! A cyclic group of order n is represented purely by n; its elements are
//! generator exponents reduced mod n. Equality and ordering of elements are
//! plain integer comparisons, so no object identity or shared state is
//! involved anywhere. The central structural fact exploited throughout is
//! that a cyclic group of order n has exactly one subgroup per divisor of n,
//! generated by g^(n/k) for the order-k subgroup.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::arith::{divisors, gcd};
use crate::{GroupError, Result};

/// An element of a cyclic group, stored as a generator exponent.
///
/// `modulus` is the order of the owning group; two elements interoperate
/// only when their moduli agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupElement {
    exponent: u64,
    modulus: u64,
}

impl GroupElement {
    fn new(exponent: u64, modulus: u64) -> Self {
        GroupElement {
            exponent: exponent % modulus,
            modulus,
        }
    }

    /// Exponent of the canonical generator, in [0, modulus).
    pub fn exponent(&self) -> u64 {
        self.exponent
    }

    /// Order of the owning group.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn is_identity(&self) -> bool {
        self.exponent == 0
    }

    /// Group operation. Both elements must come from the same group.
    pub fn mul(&self, other: &GroupElement) -> GroupElement {
        debug_assert_eq!(
            self.modulus, other.modulus,
            "elements of different groups cannot be combined"
        );
        GroupElement::new(self.exponent + other.exponent, self.modulus)
    }

    /// k-th power of the element.
    pub fn pow(&self, k: u64) -> GroupElement {
        let exponent = (self.exponent as u128 * k as u128 % self.modulus as u128) as u64;
        GroupElement { exponent, modulus: self.modulus }
    }

    /// Order of the element: the smallest positive k with e^k = identity.
    pub fn order(&self) -> u64 {
        self.modulus / gcd(self.exponent, self.modulus)
    }
}

impl fmt::Display for GroupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            write!(f, "e")
        } else {
            write!(f, "g^{}", self.exponent)
        }
    }
}

/// A finite cyclic group of known order, with a canonical generator g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicGroup {
    order: u64,
}

impl CyclicGroup {
    /// Construct the cyclic group of the given order. Fails for order 0.
    pub fn new(order: u64) -> Result<Self> {
        if order == 0 {
            return Err(GroupError::InvalidInput(
                "group order must be a positive integer".to_string(),
            ));
        }
        Ok(CyclicGroup { order })
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn identity(&self) -> GroupElement {
        GroupElement::new(0, self.order)
    }

    /// The canonical generator g. For the trivial group this is the identity.
    pub fn generator(&self) -> GroupElement {
        GroupElement::new(1, self.order)
    }

    /// The element g^exponent.
    pub fn element(&self, exponent: u64) -> GroupElement {
        GroupElement::new(exponent, self.order)
    }

    /// All elements, ordered by exponent.
    pub fn elements(&self) -> Vec<GroupElement> {
        (0..self.order).map(|i| self.element(i)).collect()
    }

    /// The unique subgroup of order k, generated by g^(order/k).
    ///
    /// Fails with `DivisorError` when k does not divide the group order.
    pub fn subgroup_of_order(&self, k: u64) -> Result<Subgroup> {
        if k == 0 || self.order % k != 0 {
            return Err(GroupError::DivisorError {
                requested: k,
                parent: self.order,
            });
        }
        Ok(Subgroup {
            order: k,
            parent_order: self.order,
        })
    }

    /// The full subgroup lattice: one subgroup per divisor of the order,
    /// keyed by subgroup order. Includes the trivial subgroup and the
    /// group itself.
    pub fn all_subgroups(&self) -> Result<BTreeMap<u64, Subgroup>> {
        divisors(self.order)?
            .into_iter()
            .map(|k| Ok((k, self.subgroup_of_order(k)?)))
            .collect()
    }
}

/// The unique order-k subgroup of a cyclic group of order n (k | n).
///
/// Its elements are the powers of g^(n/k), viewed as elements of the
/// parent group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subgroup {
    order: u64,
    parent_order: u64,
}

impl Subgroup {
    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn parent_order(&self) -> u64 {
        self.parent_order
    }

    /// Number of cosets of this subgroup in its parent.
    pub fn index(&self) -> u64 {
        self.parent_order / self.order
    }

    /// Generator of the subgroup as an element of the parent group.
    pub fn generator(&self) -> GroupElement {
        GroupElement::new(self.parent_order / self.order, self.parent_order)
    }

    /// The subgroup's elements, ordered by exponent.
    pub fn elements(&self) -> Vec<GroupElement> {
        let step = self.parent_order / self.order;
        (0..self.order)
            .map(|i| GroupElement::new(i * step, self.parent_order))
            .collect()
    }

    pub fn element_set(&self) -> BTreeSet<GroupElement> {
        self.elements().into_iter().collect()
    }

    pub fn contains(&self, e: &GroupElement) -> bool {
        let step = self.parent_order / self.order;
        e.modulus() == self.parent_order && e.exponent() % step == 0
    }
}

/// A coset `representative * H` of a subgroup H within its parent group.
///
/// Two cosets are equal exactly when their element sets coincide, which for
/// cyclic groups reduces to comparing the representative exponent mod the
/// exponent step of the subgroup.
#[derive(Debug, Clone, Copy)]
pub struct Coset {
    representative: GroupElement,
    subgroup: Subgroup,
}

impl Coset {
    pub fn new(representative: GroupElement, subgroup: Subgroup) -> Self {
        debug_assert_eq!(
            representative.modulus(),
            subgroup.parent_order(),
            "coset representative must live in the subgroup's parent group"
        );
        Coset {
            representative,
            subgroup,
        }
    }

    pub fn representative(&self) -> GroupElement {
        self.representative
    }

    pub fn subgroup(&self) -> Subgroup {
        self.subgroup
    }

    /// The coset's elements: representative * h for every h in the subgroup.
    pub fn elements(&self) -> BTreeSet<GroupElement> {
        self.subgroup
            .elements()
            .iter()
            .map(|h| self.representative.mul(h))
            .collect()
    }

    /// Smallest exponent occurring in the coset; the canonical label.
    fn canonical_exponent(&self) -> u64 {
        self.representative.exponent() % self.subgroup.index()
    }
}

impl PartialEq for Coset {
    fn eq(&self, other: &Self) -> bool {
        self.subgroup == other.subgroup && self.canonical_exponent() == other.canonical_exponent()
    }
}

impl Eq for Coset {}

impl fmt::Display for Coset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*H{}", self.representative, self.subgroup.order())
    }
}

/// Enumerate the cosets of `sub` in `group`, using the transversal
/// g^0, g^1, ..., g^(index-1).
///
/// Returns exactly `group.order() / sub.order()` distinct cosets whose
/// element sets partition the group; the trivial coset (the subgroup
/// itself) comes first, and the list is ordered by representative exponent.
pub fn enumerate_cosets(group: &CyclicGroup, sub: &Subgroup) -> Result<Vec<Coset>> {
    if sub.parent_order() != group.order() {
        return Err(GroupError::InvalidInput(format!(
            "subgroup of a group of order {} is not a subgroup of a group of order {}",
            sub.parent_order(),
            group.order()
        )));
    }
    Ok((0..sub.index())
        .map(|i| Coset::new(group.element(i), *sub))
        .collect())
}

/// Convenience wrapper: the full subgroup lattice of C_n, keyed by order.
pub fn subgroups_of_cyclic(n: u64) -> Result<BTreeMap<u64, Subgroup>> {
    CyclicGroup::new(n)?.all_subgroups()
}
