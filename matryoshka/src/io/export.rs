use crate::entities::{Bundle, PackingResult, TruckLoad};
use crate::io::ext_repr::{ExtBundle, ExtPackingResult, ExtTruckLoad};

pub fn export_bundle(bundle: &Bundle, pipe_length_m: f64) -> ExtBundle {
    ExtBundle {
        outer_pipe: bundle.host.code.clone(),
        outer_diameter_mm: bundle.outer_diameter(),
        nested: bundle
            .children
            .iter()
            .map(|c| export_bundle(c, pipe_length_m))
            .collect(),
        nesting_levels: bundle.depth(),
        total_pipes: bundle.total_pipes(),
        bundle_weight_kg: round_to(bundle.weight(pipe_length_m), 2),
        requires_heavy_extraction: bundle.requires_heavy_extraction(pipe_length_m),
    }
}

pub fn export_truck(truck: &TruckLoad) -> ExtTruckLoad {
    ExtTruckLoad {
        truck_number: truck.truck_number,
        total_weight_kg: round_to(truck.total_weight(), 2),
        utilization_pct: round_to(truck.utilization(), 1),
        remaining_capacity_kg: round_to(truck.remaining_capacity(), 2),
        bundle_count: truck.bundles.len(),
        bundles: truck
            .bundles
            .iter()
            .map(|b| export_bundle(b, truck.pipe_length_m))
            .collect(),
    }
}

pub fn export(result: &PackingResult) -> ExtPackingResult {
    ExtPackingResult {
        trucks_needed: result.trucks_needed(),
        total_weight_kg: round_to(result.total_weight(), 2),
        average_utilization_pct: round_to(result.average_utilization(), 1),
        strategy: result.strategy,
        trucks: result.trucks.iter().map(export_truck).collect(),
        warnings: result.warnings.clone(),
    }
}

/// Rounds to `decimals` decimal places for reporting
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
