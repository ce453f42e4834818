use std::sync::Arc;

use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::clearance::find_compatible;
use crate::entities::{Bundle, Pipe};
use crate::util::assertions;
use crate::util::{MAX_NESTING_LEVELS, NestingConfig};

/// Bundles produced by one nesting pass, with statistics
#[derive(Clone, Debug)]
pub struct NestingResult {
    pub bundles: Vec<Bundle>,
    /// Pipes that ended up in no bundle. Empty in normal operation, every pipe can host itself.
    pub unpacked: Vec<Arc<Pipe>>,
    pub pipes_processed: usize,
    /// Pipes placed inside another pipe
    pub pipes_nested: usize,
    /// `pipes_nested / pipes_processed`
    pub reduction_ratio: f64,
}

/// Telescopes `pipes` into bundles.
///
/// Pipes are taken largest first as bundle hosts. Each host receives at most one guest
/// per level: the largest remaining pipe that clears its bore, recursively, until `max_levels`
/// is reached or no remaining pipe fits.
pub fn build_bundles(pipes: &[Arc<Pipe>], config: &NestingConfig) -> NestingResult {
    let max_levels = match config.max_levels > MAX_NESTING_LEVELS {
        true => {
            warn!(
                "[NEST] max_levels {} exceeds the ceiling of {MAX_NESTING_LEVELS}, clamping",
                config.max_levels
            );
            MAX_NESTING_LEVELS
        }
        false => config.max_levels,
    };

    let mut remaining = pipes
        .iter()
        .cloned()
        .sorted_by_key(|p| std::cmp::Reverse(OrderedFloat(p.outer_diameter)))
        .collect_vec();

    let mut bundles = vec![];
    while !remaining.is_empty() {
        let host_pipe = remaining.remove(0);
        let mut host = Bundle::new(host_pipe, 0);
        if config.enabled {
            nest_recursive(&mut host, &mut remaining, 1, max_levels, config);
        }
        bundles.push(host);
    }

    debug_assert!(
        bundles
            .iter()
            .all(|b| assertions::bundle_is_valid(b, &config.clearance))
    );

    let pipes_processed = pipes.len();
    let pipes_nested = bundles.iter().map(|b| b.total_pipes()).sum::<usize>() - bundles.len();
    let reduction_ratio = match pipes_processed {
        0 => 0.0,
        n => pipes_nested as f64 / n as f64,
    };

    debug!(
        "[NEST] {} pipes into {} bundles ({} nested, reduction ratio {:.3})",
        pipes_processed,
        bundles.len(),
        pipes_nested,
        reduction_ratio
    );

    NestingResult {
        bundles,
        unpacked: vec![],
        pipes_processed,
        pipes_nested,
        reduction_ratio,
    }
}

fn nest_recursive(
    host: &mut Bundle,
    remaining: &mut Vec<Arc<Pipe>>,
    level: usize,
    max_levels: usize,
    config: &NestingConfig,
) {
    if level >= max_levels || remaining.is_empty() {
        return;
    }

    let Some(guest) = select_guest(&host.host, &remaining[..], config) else {
        return;
    };

    //remove the first pipe of the same catalog type from the pool
    if let Some(idx) = remaining.iter().position(|p| p.code == guest.code) {
        remaining.remove(idx);
    }

    let mut nested = Bundle::new(guest, level);
    nest_recursive(&mut nested, remaining, level + 1, max_levels, config);
    host.children.push(nested);
}

/// Picks the largest compatible pipe. When preferring lighter pipes, candidates are ranked by
/// weight first (ties in diameter go to the lightest) and those too heavy for the host are skipped.
fn select_guest(
    host: &Pipe,
    remaining: &[Arc<Pipe>],
    config: &NestingConfig,
) -> Option<Arc<Pipe>> {
    let mut compatible = find_compatible(host, remaining, &config.clearance);
    if config.prefer_lighter {
        compatible.sort_by_key(|p| OrderedFloat(p.weight_per_meter));
    }

    let max_guest_weight = host.weight_per_meter * config.max_weight_ratio;
    let mut best: Option<&Arc<Pipe>> = None;
    for candidate in compatible {
        if config.prefer_lighter && candidate.weight_per_meter > max_guest_weight {
            continue;
        }
        match best {
            Some(b) if candidate.outer_diameter <= b.outer_diameter => {}
            _ => best = Some(candidate),
        }
    }
    best.cloned()
}
