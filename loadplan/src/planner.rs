use std::collections::BTreeSet;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thousands::Separable;

use matryoshka::compliance::{
    WeightLimits, analyze_distribution, center_of_gravity, check_weight_limits,
    load_items_for_truck, validate_transport,
};
use matryoshka::entities::{Bundle, Order, PackingResult, TruckLoad};
use matryoshka::geometry::estimate_mixed_stack;
use matryoshka::geometry::stacking::validate_stacking_layers;
use matryoshka::io::export::{export_truck, round_to};
use matryoshka::io::ext_repr::{ExtBundle, ExtTruckLoad};
use matryoshka::packing::{PackingContext, pack};
use matryoshka::util::PackingStrategy;

use crate::EPOCH;
use crate::config::LPConfig;

/// Turns orders into loading plans: nesting and packing by the engine,
/// followed by per-truck compliance checks and plan-level reporting.
pub struct LoadPlanner {
    pub config: LPConfig,
}

impl LoadPlanner {
    pub fn new(config: LPConfig) -> Self {
        Self { config }
    }

    pub fn context(&self, order: &Order) -> PackingContext {
        PackingContext::new(
            order.truck.clone(),
            order.pipe_length_m,
            self.config.nesting,
            self.config.packing,
        )
    }

    /// Nests and packs all pipes of the order
    pub fn solve(&self, order: &Order) -> PackingResult {
        let start = Instant::now();
        info!(
            "[PLAN] order {}: {} pipes over {} lines, {} kg",
            order.name,
            order.pipes.len(),
            order.n_lines,
            (order.total_weight().round() as u64).separate_with_commas()
        );
        let result = pack(&order.pipes, &self.context(order));
        info!(
            "[PLAN] packed into {} trucks in {:.3}ms ({:.3}s since start)",
            result.trucks_needed(),
            start.elapsed().as_secs_f64() * 1000.0,
            EPOCH.elapsed().as_secs_f64()
        );
        result
    }

    /// Assembles the loading plan for a packing result of `order`
    pub fn report(&self, order: &Order, result: &PackingResult) -> LoadingPlan {
        let threshold = self.config.heavy_extraction_threshold_kg;
        let trucks = result
            .trucks
            .iter()
            .map(|t| TruckPlan {
                load: self.export_truck(t),
                compliance: self.truck_compliance(t),
            })
            .collect_vec();

        let total_weight = order.total_weight();
        let weight_limits = check_weight_limits(
            total_weight,
            order.truck.max_payload_kg,
            order.truck.max_axle_weight_kg,
        );

        let mut warnings = vec![];
        for truck in &result.trucks {
            for bundle in &truck.bundles {
                let weight = bundle.weight(truck.pipe_length_m);
                if weight > threshold {
                    warnings.push(format!(
                        "Truck {}: Bundle with {} weighs {weight:.0}kg - requires heavy equipment",
                        truck.truck_number, bundle.host.code
                    ));
                }
            }
        }
        if !weight_limits.is_valid {
            warnings.push(format!(
                "Order exceeds single truck capacity by {:.0}kg",
                weight_limits.overweight_kg
            ));
        }
        warnings.extend(result.warnings.iter().cloned());
        for truck in &trucks {
            warnings.extend(
                truck
                    .compliance
                    .violations
                    .iter()
                    .map(|v| format!("Truck {}: {v}", truck.load.truck_number)),
            );
        }
        for truck in &result.trucks {
            warnings.extend(
                stacking_advisories(truck, self.config.packing.stack_gap_mm)
                    .into_iter()
                    .map(|w| format!("Truck {}: {w}", truck.truck_number)),
            );
        }
        debug!("[PLAN] {} warnings raised", warnings.len());

        LoadingPlan {
            order_name: order.name.clone(),
            pipe_length_m: order.pipe_length_m,
            summary: PlanSummary {
                total_pipes: order.pipes.len(),
                total_weight_kg: round_to(total_weight, 2),
                trucks_needed: result.trucks_needed(),
            },
            nesting_stats: self.nesting_stats(order, result),
            trucks,
            weight_limits: weight_limits.into(),
            strategy: result.strategy,
            warnings,
        }
    }

    fn export_truck(&self, truck: &TruckLoad) -> ExtTruckLoad {
        let mut ext = export_truck(truck);
        for (ext_bundle, bundle) in ext.bundles.iter_mut().zip(&truck.bundles) {
            mark_heavy_extraction(
                ext_bundle,
                bundle,
                truck.pipe_length_m,
                self.config.heavy_extraction_threshold_kg,
            );
        }
        ext
    }

    fn truck_compliance(&self, truck: &TruckLoad) -> TruckCompliance {
        let axle_config = &self.config.axle;
        let items = load_items_for_truck(truck, self.config.positioning, axle_config);
        let cog = center_of_gravity(&items, axle_config);
        let total_weight = truck.total_weight();
        let analysis = analyze_distribution(total_weight, cog.cog_x_m, axle_config);
        let transport = validate_transport(total_weight, cog.cog_x_m, &truck.profile, axle_config);

        let mut warnings = transport.warnings;
        warnings.extend(analysis.warnings);
        warnings.extend(analysis.suggestion);

        TruckCompliance {
            cog_x_m: round_to(cog.cog_x_m, 3),
            cog_from_kingpin_m: round_to(cog.cog_from_kingpin_m, 3),
            is_cog_optimal: cog.is_optimal,
            cog_recommendation: cog.recommendation,
            kingpin_load_kg: round_to(transport.kingpin_load_kg, 1),
            axle_group_load_kg: round_to(transport.axle_group_load_kg, 1),
            per_axle_load_kg: round_to(analysis.distribution.per_axle_load_kg, 1),
            kingpin_valid: transport.kingpin_valid,
            axle_valid: transport.axle_valid,
            is_compliant: transport.is_compliant && analysis.distribution.is_valid,
            violations: transport.violations,
            warnings,
        }
    }

    fn nesting_stats(&self, order: &Order, result: &PackingResult) -> NestingStats {
        let bundles = result.trucks.iter().flat_map(|t| &t.bundles).collect_vec();
        let enabled = self.config.nesting.enabled;
        let estimated_space_reduction_pct = match enabled {
            true => {
                let ratio = result.trucks_needed() as f64 / order.n_lines.max(1) as f64;
                round_to((1.0 - ratio) * 100.0, 1)
            }
            false => 0.0,
        };
        NestingStats {
            nesting_enabled: enabled,
            bundles_with_nesting: bundles.iter().filter(|b| b.is_nested()).count(),
            max_levels_used: bundles.iter().map(|b| b.depth()).max().unwrap_or(0),
            estimated_space_reduction_pct,
        }
    }
}

fn mark_heavy_extraction(ext: &mut ExtBundle, bundle: &Bundle, pipe_length_m: f64, threshold: f64) {
    ext.requires_heavy_extraction = bundle.weight(pipe_length_m) > threshold;
    for (ext_child, child) in ext.nested.iter_mut().zip(&bundle.children) {
        mark_heavy_extraction(ext_child, child, pipe_length_m, threshold);
    }
}

/// Advisories for outer pipes stacked higher than their wall class allows
fn stacking_advisories(truck: &TruckLoad, stack_gap_mm: f64) -> Vec<String> {
    let diameters = truck.bundles.iter().map(|b| b.outer_diameter()).collect_vec();
    let rows = estimate_mixed_stack(&diameters, truck.profile.internal_width_mm, stack_gap_mm).rows();

    //one advisory per pipe type
    let hosts: BTreeSet<(u32, OrderedFloat<f64>)> = truck
        .bundles
        .iter()
        .map(|b| (b.host.sdr, OrderedFloat(b.outer_diameter())))
        .collect();
    hosts
        .into_iter()
        .filter_map(|(sdr, OrderedFloat(d))| validate_stacking_layers(d, rows, sdr))
        .collect()
}

/// Order-level totals
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanSummary {
    pub total_pipes: usize,
    pub total_weight_kg: f64,
    pub trucks_needed: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NestingStats {
    pub nesting_enabled: bool,
    /// Bundles with at least one pipe nested inside the host
    pub bundles_with_nesting: usize,
    /// Deepest telescoping chain over all bundles
    pub max_levels_used: usize,
    /// Trucks saved relative to shipping every order line separately
    pub estimated_space_reduction_pct: f64,
}

/// Center of gravity and axle loads of one truck
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TruckCompliance {
    pub cog_x_m: f64,
    pub cog_from_kingpin_m: f64,
    pub is_cog_optimal: bool,
    pub cog_recommendation: String,
    pub kingpin_load_kg: f64,
    pub axle_group_load_kg: f64,
    pub per_axle_load_kg: f64,
    pub kingpin_valid: bool,
    pub axle_valid: bool,
    pub is_compliant: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TruckPlan {
    #[serde(flatten)]
    pub load: ExtTruckLoad,
    pub compliance: TruckCompliance,
}

/// Serializable form of [`WeightLimits`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanWeightLimits {
    pub is_valid: bool,
    pub total_weight_kg: f64,
    pub max_payload_kg: f64,
    pub max_axle_weight_kg: f64,
    pub utilization_pct: f64,
    pub remaining_kg: f64,
    pub overweight_kg: f64,
}

impl From<WeightLimits> for PlanWeightLimits {
    fn from(w: WeightLimits) -> Self {
        Self {
            is_valid: w.is_valid,
            total_weight_kg: round_to(w.total_weight_kg, 2),
            max_payload_kg: w.max_payload_kg,
            max_axle_weight_kg: w.max_axle_weight_kg,
            utilization_pct: round_to(w.utilization_pct, 1),
            remaining_kg: round_to(w.remaining_kg, 2),
            overweight_kg: round_to(w.overweight_kg, 2),
        }
    }
}

/// Complete loading plan of an order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoadingPlan {
    pub order_name: String,
    pub pipe_length_m: f64,
    pub summary: PlanSummary,
    pub trucks: Vec<TruckPlan>,
    pub nesting_stats: NestingStats,
    pub weight_limits: PlanWeightLimits,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub strategy: Option<PackingStrategy>,
    pub warnings: Vec<String>,
}
