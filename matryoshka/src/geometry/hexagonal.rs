use std::f64::consts::PI;

use crate::geometry::SQRT3_OVER_2;
use crate::geometry::primitives::Point;

/// Vertical distance between the centers of two consecutive rows (mm)
pub fn row_height(diameter: f64) -> f64 {
    diameter * SQRT3_OVER_2
}

/// Total height of a stack of `rows` rows of pipes with `diameter` (mm)
pub fn stack_height(diameter: f64, rows: usize) -> f64 {
    match rows {
        0 => 0.0,
        n => diameter + (n - 1) as f64 * row_height(diameter),
    }
}

/// Maximum number of rows that fit in `available_height`
pub fn max_rows(diameter: f64, available_height: f64) -> usize {
    if diameter <= 0.0 || available_height < diameter {
        return 0;
    }
    1 + ((available_height - diameter) / row_height(diameter)).floor() as usize
}

/// Number of pipes that fit next to each other in a row.
/// Offset rows are shifted by half a diameter and lose a full diameter of usable width.
pub fn pipes_per_row(diameter: f64, available_width: f64, offset: bool) -> usize {
    if diameter <= 0.0 {
        return 0;
    }
    let usable = match offset {
        true => available_width - diameter,
        false => available_width,
    };
    (usable / diameter).floor().max(0.0) as usize
}

#[derive(Clone, Debug, PartialEq)]
pub struct HexPosition {
    pub center: Point,
    pub row: usize,
    pub column: usize,
    pub offset_row: bool,
}

/// Uniform hexagonal stack in a rectangular cross-section
#[derive(Clone, Debug, PartialEq)]
pub struct HexPacking {
    pub diameter: f64,
    pub positions: Vec<HexPosition>,
    pub rows: usize,
    pub max_per_row: usize,
    pub stack_width: f64,
    pub stack_height: f64,
    /// Circle area over the area of the occupied bounding box
    pub efficiency: f64,
}

impl HexPacking {
    pub fn total_pipes(&self) -> usize {
        self.positions.len()
    }
}

/// Stacks pipes of a single `diameter` row by row, starting at the bottom left corner.
/// If `start_offset` is set, the first row is the shifted one.
pub fn hexagonal_packing(diameter: f64, width: f64, height: f64, start_offset: bool) -> HexPacking {
    let mut packing = HexPacking {
        diameter,
        positions: vec![],
        rows: 0,
        max_per_row: 0,
        stack_width: 0.0,
        stack_height: 0.0,
        efficiency: 0.0,
    };
    if diameter <= 0.0 {
        return packing;
    }

    let radius = diameter / 2.0;
    let mut y = radius;
    let mut row = 0;
    while y + radius <= height {
        let offset_row = (row % 2 == 1) != start_offset;
        let n = pipes_per_row(diameter, width, offset_row);
        if n == 0 {
            break;
        }
        let x_start = match offset_row {
            true => diameter,
            false => radius,
        };
        packing.positions.extend((0..n).map(|column| HexPosition {
            center: Point(x_start + column as f64 * diameter, y),
            row,
            column,
            offset_row,
        }));
        packing.max_per_row = packing.max_per_row.max(n);
        row += 1;
        y += row_height(diameter);
    }
    packing.rows = row;

    if !packing.positions.is_empty() {
        packing.stack_width = packing
            .positions
            .iter()
            .map(|p| p.center.0 + radius)
            .fold(0.0, f64::max);
        packing.stack_height = packing
            .positions
            .iter()
            .map(|p| p.center.1 + radius)
            .fold(0.0, f64::max);
        let circle_area = packing.positions.len() as f64 * PI * radius * radius;
        packing.efficiency = circle_area / (packing.stack_width * packing.stack_height);
    }
    packing
}
