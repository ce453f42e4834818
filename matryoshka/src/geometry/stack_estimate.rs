use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::SQRT3_OVER_2;

/// Estimated cross-section of a stack of mixed-diameter bundles
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StackEstimate {
    /// Largest diameter in every row, bottom row first
    pub row_max_diameters: Vec<f64>,
    pub height: f64,
}

impl StackEstimate {
    pub fn rows(&self) -> usize {
        self.row_max_diameters.len()
    }
}

/// Estimates how bundles of different diameters stack across `container_width`.
///
/// Diameters are laid out largest first, left to right, with `gap` between neighbours.
/// A new row starts when the next diameter no longer fits. Rows are stacked with hexagonal
/// spacing based on the average of the largest diameters of two consecutive rows.
pub fn estimate_mixed_stack(diameters: &[f64], container_width: f64, gap: f64) -> StackEstimate {
    let mut rows = vec![];
    let mut row_width = 0.0;
    let mut row_max = 0.0_f64;

    for &d in diameters
        .iter()
        .sorted_by_key(|d| std::cmp::Reverse(OrderedFloat(**d)))
    {
        if row_width + d > container_width {
            if row_max > 0.0 {
                rows.push(row_max);
            }
            row_width = 0.0;
            row_max = 0.0;
        }
        row_width += d + gap;
        row_max = row_max.max(d);
    }
    if row_max > 0.0 {
        rows.push(row_max);
    }

    let height = match rows.first() {
        None => 0.0,
        Some(first) => {
            first
                + rows
                    .iter()
                    .tuple_windows()
                    .map(|(lower, upper)| (lower + upper) / 2.0 * SQRT3_OVER_2)
                    .sum::<f64>()
        }
    };

    StackEstimate {
        row_max_diameters: rows,
        height,
    }
}

/// See [`estimate_mixed_stack`]
pub fn estimate_mixed_stack_height(diameters: &[f64], container_width: f64, gap: f64) -> f64 {
    estimate_mixed_stack(diameters, container_width, gap).height
}
