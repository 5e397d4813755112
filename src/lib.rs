//! Subgroup lattices of finite cyclic groups and their direct products.
//!
//! Three computations are exposed:
//! 1. The full subgroup lattice of a cyclic group C_n (one subgroup per
//!    divisor of n), with explicit coset enumeration.
//! 2. Every subgroup of a direct product C_n x C_m, enumerated through
//!    Goursat's correspondence between subgroups of the product and
//!    isomorphisms of subquotients of the factors.
//! 3. The characteristic factors (invariant-factor decomposition) of the
//!    multiplicative group (Z/nZ)*, via Shanks' tabulation method.
//!
//! Inputs are small illustrative integers; everything runs in `u64` with
//! `u128` intermediates where products can overflow.

pub mod arith;
pub mod char_factor;
pub mod cycles;
pub mod goursat;
pub mod group;

pub use char_factor::characteristic_factors;
pub use goursat::{subgroups_of_product, GoursatTuple, QuotientGroup, TupleSubgroup};
pub use group::{
    enumerate_cosets, subgroups_of_cyclic, Coset, CyclicGroup, GroupElement, Subgroup,
};

/// Errors produced by the lattice computations.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    /// A positive order or modulus was required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested subgroup order does not divide the parent group's order.
    #[error("order {requested} does not divide parent group order {parent}")]
    DivisorError { requested: u64, parent: u64 },

    /// An internal consistency check failed. This indicates an algorithmic
    /// bug rather than bad input, and the computation is aborted; callers
    /// must not retry or recover partial results.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, GroupError>;
