mod first_fit;
mod rebalance;
mod truck_first;

use std::sync::Arc;
use std::time::Instant;

use log::info;
use thousands::Separable;

use crate::entities::{Bundle, PackingResult, Pipe, TruckLoad, TruckProfile};
use crate::nesting::build_bundles;
use crate::util::assertions;
use crate::util::{NestingConfig, PackingConfig, PackingStrategy};

#[doc(inline)]
pub use first_fit::first_fit_decreasing;
#[doc(inline)]
pub use rebalance::{balance_pairs, empty_last_truck, renumber};
#[doc(inline)]
pub use truck_first::truck_count_first;

/// Everything a packing run needs besides the pipes themselves
#[derive(Clone, Debug)]
pub struct PackingContext {
    pub profile: TruckProfile,
    pub pipe_length_m: f64,
    pub nesting: NestingConfig,
    pub config: PackingConfig,
}

impl PackingContext {
    pub fn new(
        profile: TruckProfile,
        pipe_length_m: f64,
        nesting: NestingConfig,
        config: PackingConfig,
    ) -> Self {
        Self {
            profile,
            pipe_length_m,
            nesting,
            config,
        }
    }

    pub fn new_truck(&self, truck_number: usize) -> TruckLoad {
        TruckLoad::new(truck_number, self.profile.clone(), self.pipe_length_m)
    }
}

/// Nests `pipes` into bundles and assigns them to as few trucks as possible.
///
/// The truck-count-first search is tried first (unless disabled in the config).
/// If it finds no feasible assignment, all pipes are nested in one pass and packed
/// with decreasing-weight first fit followed by rebalancing.
pub fn pack(pipes: &[Arc<Pipe>], ctx: &PackingContext) -> PackingResult {
    if pipes.is_empty() {
        return PackingResult::empty();
    }
    let start = Instant::now();
    let total_weight = pipes.iter().map(|p| p.weight(ctx.pipe_length_m)).sum::<f64>();
    info!(
        "[PACK] packing {} pipes ({} kg) on {} trucks ({} kg payload)",
        pipes.len(),
        (total_weight.round() as u64).separate_with_commas(),
        ctx.profile.name,
        (ctx.profile.max_payload_kg.round() as u64).separate_with_commas()
    );

    let tcf_trucks = match ctx.config.strategy {
        PackingStrategy::TruckCountFirst => truck_count_first(pipes, ctx),
        PackingStrategy::FirstFitDecreasing => None,
    };

    let result = match tcf_trucks {
        Some(trucks) => PackingResult::new(trucks, Some(PackingStrategy::TruckCountFirst), vec![]),
        None => {
            if ctx.config.strategy == PackingStrategy::TruckCountFirst {
                info!("[PACK] truck-count-first search found no feasible assignment, falling back to first fit");
            }
            let bundles = build_bundles(pipes, &ctx.nesting).bundles;
            pack_bundles(bundles, ctx)
        }
    };

    info!(
        "[PACK] {} trucks needed ({:?}), average utilization {:.1}%, finished in {:.3}ms",
        result.trucks_needed(),
        result.strategy,
        result.average_utilization(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    debug_assert!(assertions::pipes_conserved(pipes, &result));
    debug_assert!(assertions::trucks_within_payload(&result));
    debug_assert!(assertions::trucks_numbered(&result));
    result
}

/// Packs already nested bundles with decreasing-weight first fit, then rebalances the trucks.
pub fn pack_bundles(bundles: Vec<Bundle>, ctx: &PackingContext) -> PackingResult {
    if bundles.is_empty() {
        return PackingResult::empty();
    }
    let warnings = oversized_bundle_warnings(&bundles, ctx);

    let mut trucks = first_fit_decreasing(bundles, ctx);
    empty_last_truck(&mut trucks, ctx);
    balance_pairs(&mut trucks, ctx);
    renumber(&mut trucks);

    PackingResult::new(trucks, Some(PackingStrategy::FirstFitDecreasing), warnings)
}

/// Bundles which would not even fit an empty truck. They still get a truck of their own.
fn oversized_bundle_warnings(bundles: &[Bundle], ctx: &PackingContext) -> Vec<String> {
    let empty = ctx.new_truck(0);
    bundles
        .iter()
        .filter(|b| !empty.can_fit(b, ctx.config.stack_gap_mm))
        .map(|b| {
            format!(
                "Bundle {} ({:.0}kg, DN{}) does not fit an empty {} truck",
                b.chain_label(),
                b.weight(ctx.pipe_length_m),
                b.outer_diameter(),
                ctx.profile.name
            )
        })
        .collect()
}
