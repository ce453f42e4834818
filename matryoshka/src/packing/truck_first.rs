use std::sync::Arc;

use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;

use crate::entities::{Pipe, TruckLoad};
use crate::nesting::build_bundles;
use crate::packing::{PackingContext, renumber};
use crate::util::FPA;

/// Searches for the lowest truck count that admits a feasible load.
///
/// Starting at the weight lower bound `ceil(total / payload)`, pipes are distributed over `n`
/// trucks largest first, each truck is nested independently and its bundles are admitted one by one.
/// Returns `None` when no count up to the lower bound plus the configured number of extra
/// attempts works out.
pub fn truck_count_first(pipes: &[Arc<Pipe>], ctx: &PackingContext) -> Option<Vec<TruckLoad>> {
    let payload = ctx.profile.max_payload_kg;
    if pipes.is_empty() || payload <= 0.0 {
        return None;
    }
    let length = ctx.pipe_length_m;
    let total_weight = pipes.iter().map(|p| p.weight(length)).sum::<f64>();
    let min_trucks = ((total_weight / payload).ceil() as usize).max(1);

    let sorted = pipes
        .iter()
        .sorted_by_key(|p| {
            std::cmp::Reverse((OrderedFloat(p.outer_diameter), OrderedFloat(p.weight_per_meter)))
        })
        .collect_vec();

    for n_trucks in min_trucks..=min_trucks + ctx.config.extra_truck_attempts {
        match attempt(&sorted, n_trucks, ctx) {
            Some(trucks) => {
                info!("[TCF] feasible assignment found with {n_trucks} trucks (lower bound {min_trucks})");
                return Some(trucks);
            }
            None => debug!("[TCF] no feasible assignment with {n_trucks} trucks"),
        }
    }
    None
}

fn attempt(sorted: &[&Arc<Pipe>], n_trucks: usize, ctx: &PackingContext) -> Option<Vec<TruckLoad>> {
    let payload = ctx.profile.max_payload_kg;
    let length = ctx.pipe_length_m;

    //distribute raw pipes by weight only
    let mut assigned: Vec<Vec<Arc<Pipe>>> = vec![vec![]; n_trucks];
    let mut weights = vec![0.0; n_trucks];
    for &pipe in sorted {
        let w = pipe.weight(length);
        let idx = (0..n_trucks).find(|&i| FPA(weights[i] + w) <= FPA(payload))?;
        weights[idx] += w;
        assigned[idx].push(pipe.clone());
    }

    //nest every truck on its own and verify the bundles actually fit
    let mut trucks = vec![];
    for (i, truck_pipes) in assigned.iter().enumerate() {
        let mut truck = ctx.new_truck(i + 1);
        for bundle in build_bundles(truck_pipes, &ctx.nesting).bundles {
            if !truck.can_fit(&bundle, ctx.config.stack_gap_mm) {
                debug!(
                    "[TCF] truck {} of {n_trucks} cannot take {}",
                    i + 1,
                    bundle.chain_label()
                );
                return None;
            }
            truck.add_bundle(bundle);
        }
        trucks.push(truck);
    }
    renumber(&mut trucks);
    Some(trucks)
}
