use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::{Bundle, TruckLoad};
use crate::packing::PackingContext;

/// Places the heaviest bundles first, each in the first truck that can take it.
/// A new truck is opened when none can, it accepts the bundle unconditionally.
pub fn first_fit_decreasing(bundles: Vec<Bundle>, ctx: &PackingContext) -> Vec<TruckLoad> {
    let gap = ctx.config.stack_gap_mm;
    let mut trucks: Vec<TruckLoad> = vec![];

    let sorted = bundles
        .into_iter()
        .sorted_by_cached_key(|b| std::cmp::Reverse(OrderedFloat(b.weight(ctx.pipe_length_m))));

    for bundle in sorted {
        match trucks.iter_mut().find(|t| t.can_fit(&bundle, gap)) {
            Some(truck) => truck.add_bundle(bundle),
            None => {
                let mut truck = ctx.new_truck(trucks.len() + 1);
                debug!(
                    "[FFD] opening truck {} for {} ({:.0} kg)",
                    truck.truck_number,
                    bundle.chain_label(),
                    bundle.weight(ctx.pipe_length_m)
                );
                truck.add_bundle(bundle);
                trucks.push(truck);
            }
        }
    }
    trucks
}
