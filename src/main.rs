use serde::Serialize;

use subgroup_lattice::cycles::maximal_cycles_of_product;
use subgroup_lattice::goursat::{goursat_tuples, predicted_subgroup_count, GoursatTuple};
use subgroup_lattice::{
    characteristic_factors, enumerate_cosets, subgroups_of_cyclic, subgroups_of_product,
    CyclicGroup,
};

fn main() {
    env_logger::init();

    println!("=== Subgroup Lattices of Cyclic Groups and Their Products ===\n");

    section_1_cyclic_lattices();
    section_2_characteristic_factors();
    section_3_goursat_enumeration();
    section_4_cosets();
    section_5_maximal_cycles();
}

// -------------------------------------------------------------------------
// Section 1 — Subgroup lattices of cyclic groups
// -------------------------------------------------------------------------

fn section_1_cyclic_lattices() {
    println!("--- Section 1: Subgroup Lattices of C_n ---\n");

    for n in [6u64, 12, 30] {
        let lattice = subgroups_of_cyclic(n).expect("positive order");
        println!("  C{} has {} subgroups:", n, lattice.len());
        for (order, sub) in &lattice {
            let exponents: Vec<u64> = sub.elements().iter().map(|e| e.exponent()).collect();
            println!(
                "    order {:>3}: generated by {}, exponents {:?}",
                order,
                sub.generator(),
                exponents
            );
        }
        println!();
    }
}

// -------------------------------------------------------------------------
// Section 2 — Characteristic factors of (Z/nZ)*
// -------------------------------------------------------------------------

fn section_2_characteristic_factors() {
    println!("--- Section 2: Characteristic Factors of (Z/nZ)* ---\n");

    println!("  {:>4}  invariant factors", "n");
    for n in 1u64..=36 {
        let factors = characteristic_factors(n).expect("positive modulus");
        let rendered = if factors.is_empty() {
            "trivial".to_string()
        } else {
            factors
                .iter()
                .map(|d| format!("C{}", d))
                .collect::<Vec<_>>()
                .join(" x ")
        };
        println!("  {:>4}  {}", n, rendered);
    }
    println!();
}

// -------------------------------------------------------------------------
// Section 3 — Goursat enumeration of subgroups of C_n x C_m
// -------------------------------------------------------------------------

#[derive(Serialize)]
struct EnumerationReport {
    n: u64,
    m: u64,
    tuples: Vec<GoursatTuple>,
    predicted_subgroups: u64,
    enumerated_subgroups: usize,
    subgroup_sizes: Vec<usize>,
}

fn section_3_goursat_enumeration() {
    println!("--- Section 3: Subgroups of C_n x C_m via Goursat's Lemma ---\n");

    for (n, m) in [(2u64, 2u64), (2, 4), (4, 6), (6, 6)] {
        let subgroups = subgroups_of_product(n, m).expect("positive orders");
        let predicted = predicted_subgroup_count(n, m).expect("positive orders");
        println!(
            "  C{} x C{}: {} subgroups (predicted {})",
            n,
            m,
            subgroups.len(),
            predicted
        );

        let mut sizes: Vec<usize> = subgroups.iter().map(|s| s.len()).collect();
        sizes.sort_unstable();
        println!("    sizes: {:?}", sizes);
    }
    println!();

    // Full report for one product, as JSON
    let (n, m) = (4u64, 6u64);
    let subgroups = subgroups_of_product(n, m).expect("positive orders");
    let mut subgroup_sizes: Vec<usize> = subgroups.iter().map(|s| s.len()).collect();
    subgroup_sizes.sort_unstable();
    let report = EnumerationReport {
        n,
        m,
        tuples: goursat_tuples(n, m).expect("positive orders"),
        predicted_subgroups: predicted_subgroup_count(n, m).expect("positive orders"),
        enumerated_subgroups: subgroups.len(),
        subgroup_sizes,
    };
    println!(
        "{}\n",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}

// -------------------------------------------------------------------------
// Section 4 — Coset partitions
// -------------------------------------------------------------------------

fn section_4_cosets() {
    println!("--- Section 4: Coset Partitions ---\n");

    let group = CyclicGroup::new(12).expect("positive order");
    for k in [3u64, 4] {
        let sub = group.subgroup_of_order(k).expect("k divides 12");
        let cosets = enumerate_cosets(&group, &sub).expect("subgroup of C12");
        println!("  C12 / H{} ({} cosets):", k, cosets.len());
        for coset in &cosets {
            let exponents: Vec<u64> = coset.elements().iter().map(|e| e.exponent()).collect();
            println!("    {} -> exponents {:?}", coset, exponents);
        }
        println!();
    }
}

// -------------------------------------------------------------------------
// Section 5 — Maximal cycle decomposition
// -------------------------------------------------------------------------

fn section_5_maximal_cycles() {
    println!("--- Section 5: Maximal Cycles of C2 x C4 ---\n");

    let cycles = maximal_cycles_of_product(2, 4).expect("positive orders");
    for (i, cycle) in cycles.iter().enumerate() {
        let rendered: Vec<String> = cycle
            .iter()
            .map(|(g, h)| format!("({},{})", g, h))
            .collect();
        println!("  cycle {}: {}", i + 1, rendered.join(" -> "));
    }
    println!();
}
