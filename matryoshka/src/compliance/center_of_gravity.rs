use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::TruckLoad;
use crate::util::AxleConfig;

/// A weight resting at a longitudinal position, measured in meters from the trailer front
#[derive(Clone, Debug, PartialEq)]
pub struct LoadItem {
    pub weight_kg: f64,
    pub x_position_m: f64,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CenterOfGravity {
    /// From the trailer front (m)
    pub cog_x_m: f64,
    pub cog_from_kingpin_m: f64,
    pub total_weight_kg: f64,
    pub is_optimal: bool,
    /// Signed distance to the middle of the optimal band (m)
    pub deviation_from_optimal_m: f64,
    pub recommendation: String,
}

/// Weighted mean position of `items`, judged against the optimal band of `config`
pub fn center_of_gravity(items: &[LoadItem], config: &AxleConfig) -> CenterOfGravity {
    let neutral = |recommendation: &str| CenterOfGravity {
        cog_x_m: 0.0,
        cog_from_kingpin_m: 0.0,
        total_weight_kg: 0.0,
        is_optimal: true,
        deviation_from_optimal_m: 0.0,
        recommendation: recommendation.to_string(),
    };
    if items.is_empty() {
        return neutral("No load");
    }
    let total_weight = items.iter().map(|i| i.weight_kg).sum::<f64>();
    if total_weight == 0.0 {
        return neutral("Zero weight load");
    }

    let cog_x = items.iter().map(|i| i.weight_kg * i.x_position_m).sum::<f64>() / total_weight;
    let (min, max) = (config.optimal_cog_min_m, config.optimal_cog_max_m);
    let is_optimal = (min..=max).contains(&cog_x);
    let recommendation = if is_optimal {
        "Center of gravity is in optimal range".to_string()
    } else if cog_x < min {
        format!("Load is too far forward ({cog_x:.1}m). Move heavy items back toward axles.")
    } else {
        format!("Load is too far back ({cog_x:.1}m). Move heavy items forward toward kingpin.")
    };

    CenterOfGravity {
        cog_x_m: cog_x,
        cog_from_kingpin_m: cog_x - config.kingpin_position_m,
        total_weight_kg: total_weight,
        is_optimal,
        deviation_from_optimal_m: cog_x - (min + max) / 2.0,
        recommendation,
    }
}

/// How bundles are positioned along the trailer when building [`LoadItem`]s
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum LoadPositioning {
    /// Pipes run along the trailer from `front_offset_m` behind the front wall,
    /// so every bundle is centered at `front_offset_m + pipe_length / 2`
    Lengthwise { front_offset_m: f64 },
    /// Heaviest bundle at the middle of the optimal band, the others alternating front and back
    Balanced,
}

impl Default for LoadPositioning {
    fn default() -> Self {
        LoadPositioning::Lengthwise {
            front_offset_m: 0.8,
        }
    }
}

/// Positions for `weights` (same order) aimed at a center of gravity of `target_m`.
///
/// The heaviest weight goes to the target, the next ones alternate in front of and behind it,
/// one slot further each time. Slots divide the trailer minus 1 m margins at both ends.
pub fn arrange_load(weights: &[f64], config: &AxleConfig, target_m: Option<f64>) -> Vec<f64> {
    if weights.is_empty() {
        return vec![];
    }
    let target = target_m.unwrap_or((config.optimal_cog_min_m + config.optimal_cog_max_m) / 2.0);
    let length = config.trailer_length_m;
    let slot = (length - 2.0) / weights.len() as f64;

    let mut positions = vec![0.0; weights.len()];
    let order = (0..weights.len()).sorted_by_key(|&i| std::cmp::Reverse(OrderedFloat(weights[i])));
    for (rank, idx) in order.enumerate() {
        let pos = match rank {
            0 => target,
            r if r % 2 == 1 => target - ((r + 1) / 2) as f64 * slot,
            r => target + (r / 2) as f64 * slot,
        };
        positions[idx] = pos.max(1.0).min(length - 1.0);
    }
    positions
}

/// One [`LoadItem`] per bundle of `truck`
pub fn load_items_for_truck(
    truck: &TruckLoad,
    positioning: LoadPositioning,
    config: &AxleConfig,
) -> Vec<LoadItem> {
    let weights = truck
        .bundles
        .iter()
        .map(|b| b.weight(truck.pipe_length_m))
        .collect_vec();
    let positions = match positioning {
        LoadPositioning::Lengthwise { front_offset_m } => {
            vec![front_offset_m + truck.pipe_length_m / 2.0; weights.len()]
        }
        LoadPositioning::Balanced => arrange_load(&weights, config, None),
    };
    truck
        .bundles
        .iter()
        .zip(weights)
        .zip(positions)
        .map(|((b, weight_kg), x_position_m)| LoadItem {
            weight_kg,
            x_position_m,
            description: Some(b.chain_label()),
        })
        .collect()
}
