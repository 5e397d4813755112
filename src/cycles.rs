//! Cycle decompositions consumed by external diagram builders.
//!
//! A "maximal cycle" decomposition greedily strips a group down to cycles:
//! take a highest-order remaining element, emit the cycle it generates,
//! remove the covered elements from the worklist, repeat. Every pass
//! removes at least one element, so the loop terminates. Emitted cycles
//! may share elements (each contains the identity, for one); the guarantee
//! is that every element appears in at least one cycle. The decomposition
//! is a heuristic and is not proven to be minimal. Graph layout and
//! plotting of the resulting cycle lists happen outside this crate.

use std::collections::BTreeSet;

use crate::arith::lcm;
use crate::group::{CyclicGroup, GroupElement};
use crate::{GroupError, Result};

/// The cycle generated by a single element: e^0, e^1, ..., e^(order-1).
pub fn element_cycle(e: &GroupElement) -> Vec<GroupElement> {
    (0..e.order()).map(|i| e.pow(i)).collect()
}

/// Order of a pair in a product group: the lcm of the component orders.
pub fn pair_order(pair: &(GroupElement, GroupElement)) -> u64 {
    lcm(pair.0.order(), pair.1.order())
}

/// The cycle generated by a pair under the componentwise operation.
pub fn pair_cycle(pair: &(GroupElement, GroupElement)) -> Vec<(GroupElement, GroupElement)> {
    (0..pair_order(pair))
        .map(|i| (pair.0.pow(i), pair.1.pow(i)))
        .collect()
}

/// Maximal-cycle decomposition of a cyclic group.
///
/// Every element appears in at least one returned cycle; ties between
/// elements of equal order break by exponent, so the output is
/// deterministic.
pub fn maximal_cycles(group: &CyclicGroup) -> Result<Vec<Vec<GroupElement>>> {
    let mut remaining = group.elements();
    remaining.sort_by_key(|e| (e.order(), e.exponent()));

    let mut cycles = Vec::new();
    while let Some(top) = remaining.pop() {
        let order = top.order();
        if !top.pow(order).is_identity() {
            return Err(GroupError::InvariantViolation(format!(
                "element {} of computed order {} does not power to the identity",
                top, order
            )));
        }

        let cycle = element_cycle(&top);
        let covered: BTreeSet<GroupElement> = cycle.iter().copied().collect();
        remaining.retain(|e| !covered.contains(e));
        cycles.push(cycle);
    }
    Ok(cycles)
}

/// Maximal-cycle decomposition of the full element set of C_n x C_m.
pub fn maximal_cycles_of_product(
    n: u64,
    m: u64,
) -> Result<Vec<Vec<(GroupElement, GroupElement)>>> {
    let group_g = CyclicGroup::new(n)?;
    let group_h = CyclicGroup::new(m)?;

    let mut remaining: Vec<(GroupElement, GroupElement)> = group_g
        .elements()
        .into_iter()
        .flat_map(|g| group_h.elements().into_iter().map(move |h| (g, h)))
        .collect();
    remaining.sort_by_key(|p| (pair_order(p), p.0.exponent(), p.1.exponent()));

    let mut cycles = Vec::new();
    while let Some(top) = remaining.pop() {
        let order = pair_order(&top);
        let powered = (top.0.pow(order), top.1.pow(order));
        if !(powered.0.is_identity() && powered.1.is_identity()) {
            return Err(GroupError::InvariantViolation(format!(
                "pair ({}, {}) of computed order {} does not power to the identity",
                top.0, top.1, order
            )));
        }

        let cycle = pair_cycle(&top);
        let covered: BTreeSet<(GroupElement, GroupElement)> = cycle.iter().copied().collect();
        remaining.retain(|p| !covered.contains(p));
        cycles.push(cycle);
    }
    Ok(cycles)
}
