//Predicates on bundles and packing results, checked in debug_assert!() blocks

use std::collections::HashMap;
use std::sync::Arc;

use log::error;

use crate::clearance::fits_inside;
use crate::entities::{Bundle, PackingResult, Pipe};
use crate::util::{ClearanceConfig, FPA};

/// Every input pipe ends up in exactly one bundle of exactly one truck
pub fn pipes_conserved(pipes: &[Arc<Pipe>], result: &PackingResult) -> bool {
    let mut counts: HashMap<&str, isize> = HashMap::new();
    for p in pipes {
        *counts.entry(p.code.as_str()).or_default() += 1;
    }
    for truck in &result.trucks {
        for bundle in &truck.bundles {
            for p in bundle.all_pipes() {
                *counts.entry(p.code.as_str()).or_default() -= 1;
            }
        }
    }
    match counts.iter().find(|(_, c)| **c != 0) {
        Some((code, c)) => {
            error!("pipe {code} count mismatch between input and packing result: {c}");
            false
        }
        None => true,
    }
}

/// No truck exceeds its payload, unless it carries a single bundle that is too heavy on its own
pub fn trucks_within_payload(result: &PackingResult) -> bool {
    result.trucks.iter().all(|t| {
        FPA(t.total_weight()) <= FPA(t.profile.max_payload_kg) || t.bundles.len() == 1
    })
}

/// Structural invariants of a bundle: one child per level, every child clears its parent's bore
pub fn bundle_is_valid(bundle: &Bundle, config: &ClearanceConfig) -> bool {
    bundle.children.len() <= 1
        && bundle.children.iter().all(|c| {
            c.level == bundle.level + 1
                && fits_inside(&bundle.host, &c.host, config)
                && bundle_is_valid(c, config)
        })
}

/// Truck numbers run from 1 to N
pub fn trucks_numbered(result: &PackingResult) -> bool {
    result
        .trucks
        .iter()
        .enumerate()
        .all(|(i, t)| t.truck_number == i + 1)
}
