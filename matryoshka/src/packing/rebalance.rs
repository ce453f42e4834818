use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::TruckLoad;
use crate::packing::PackingContext;

/// Tries to empty the last truck by moving its bundles into earlier trucks.
/// Repeats for the new last truck as long as it succeeds, up to the configured number of iterations.
/// Moves are kept even when the last truck cannot be emptied entirely.
pub fn empty_last_truck(trucks: &mut Vec<TruckLoad>, ctx: &PackingContext) {
    let gap = ctx.config.stack_gap_mm;
    for _ in 0..ctx.config.rebalance_iterations {
        if trucks.len() < 2 {
            return;
        }
        let (last, earlier) = match trucks.split_last_mut() {
            Some((last, earlier)) => (last, earlier),
            None => return,
        };

        let mut i = 0;
        while i < last.bundles.len() {
            match earlier.iter().position(|t| t.can_fit(&last.bundles[i], gap)) {
                Some(target) => {
                    let bundle = last.remove_bundle(i);
                    debug!(
                        "[FFD] moved {} from truck {} to truck {}",
                        bundle.chain_label(),
                        last.truck_number,
                        earlier[target].truck_number
                    );
                    earlier[target].add_bundle(bundle);
                }
                None => i += 1,
            }
        }

        match last.is_empty() {
            true => {
                let removed = trucks.pop();
                debug!(
                    "[FFD] emptied and removed truck {:?}",
                    removed.map(|t| t.truck_number)
                );
            }
            false => return,
        }
    }
}

/// Evens out the load between trucks.
///
/// For every pair of trucks whose utilization differs by at least the trigger, the lightest bundle
/// of the heavier truck is moved to the lighter one if it fits there and the pair's weight gap
/// shrinks by at least the configured fraction. Stops after a sweep without moves.
pub fn balance_pairs(trucks: &mut [TruckLoad], ctx: &PackingContext) {
    let gap = ctx.config.stack_gap_mm;
    let length = ctx.pipe_length_m;

    for _ in 0..ctx.config.balance_iterations {
        let mut moved = false;
        for (i, j) in (0..trucks.len()).tuple_combinations() {
            let (heavy, light) = match trucks[i].total_weight() >= trucks[j].total_weight() {
                true => (i, j),
                false => (j, i),
            };
            if trucks[heavy].utilization() - trucks[light].utilization()
                < ctx.config.balance_trigger_pct
            {
                continue;
            }

            let Some((b_idx, b_weight)) = trucks[heavy]
                .bundles
                .iter()
                .enumerate()
                .map(|(idx, b)| (idx, b.weight(length)))
                .min_by_key(|(_, w)| OrderedFloat(*w))
            else {
                continue;
            };

            let gap_before = trucks[heavy].total_weight() - trucks[light].total_weight();
            let gap_after = (gap_before - 2.0 * b_weight).abs();
            if gap_after > gap_before * (1.0 - ctx.config.balance_min_improvement) {
                continue;
            }
            if !trucks[light].can_fit(&trucks[heavy].bundles[b_idx], gap) {
                continue;
            }

            let bundle = trucks[heavy].remove_bundle(b_idx);
            debug!(
                "[FFD] balancing: moved {} ({:.0} kg) from truck {} to truck {}",
                bundle.chain_label(),
                b_weight,
                trucks[heavy].truck_number,
                trucks[light].truck_number
            );
            trucks[light].add_bundle(bundle);
            moved = true;
        }
        if !moved {
            return;
        }
    }
}

/// Drops empty trucks and numbers the remaining ones 1..N in order
pub fn renumber(trucks: &mut Vec<TruckLoad>) {
    trucks.retain(|t| !t.is_empty());
    for (i, truck) in trucks.iter_mut().enumerate() {
        truck.truck_number = i + 1;
    }
}
