use crate::geometry::hexagonal;

/// Bottom pipes carrying more than this (kg per pipe) are flagged
pub const BOTTOM_PIPE_LOAD_LIMIT_KG: f64 = 500.0;

/// Maximum number of layers pipes of a wall class can carry without ovalising.
/// Thicker walls (lower SDR) carry more, large diameters less.
pub fn max_safe_layers(sdr: u32, diameter: f64) -> usize {
    let by_sdr: usize = match sdr {
        11 => 8,
        17 => 6,
        21 => 5,
        26 => 4,
        _ => 4,
    };
    if diameter >= 500.0 {
        by_sdr.min(3)
    } else if diameter >= 315.0 {
        by_sdr - 1
    } else {
        by_sdr
    }
}

/// `Some(warning)` if `layers` exceeds the safe limit for the pipe type
pub fn validate_stacking_layers(diameter: f64, layers: usize, sdr: u32) -> Option<String> {
    let max_allowed = max_safe_layers(sdr, diameter);
    match layers > max_allowed {
        true => Some(format!(
            "SDR{sdr} pipes with DN{diameter} should not exceed {max_allowed} stacking layers (requested {layers})"
        )),
        false => None,
    }
}

/// Stability assessment of a uniform hexagonal stack across a truck
#[derive(Clone, Debug, PartialEq)]
pub struct StackStability {
    pub pipes_per_row: usize,
    pub total_pipes: usize,
    pub total_weight: f64,
    /// Weight resting on the bottom row (kg)
    pub bottom_row_load: f64,
    pub height: f64,
    pub is_stable: bool,
    pub warnings: Vec<String>,
}

pub fn analyze_stack_stability(
    diameter: f64,
    weight_per_meter: f64,
    pipe_length_m: f64,
    rows: usize,
    sdr: u32,
    container_width: f64,
) -> StackStability {
    let per_row = hexagonal::pipes_per_row(diameter, container_width, false);
    //offset rows hold one pipe less
    let total_pipes = (0..rows)
        .map(|r| match r % 2 {
            0 => per_row,
            _ => per_row.saturating_sub(1),
        })
        .sum::<usize>();
    let pipe_weight = weight_per_meter * pipe_length_m;
    let total_weight = total_pipes as f64 * pipe_weight;
    let bottom_row_load = total_weight - pipe_weight * per_row as f64;

    let mut warnings = vec![];
    let max_layers = max_safe_layers(sdr, diameter);
    if diameter >= 500.0 {
        warnings.push(format!(
            "Large diameter (DN{}) limits safe stacking height",
            diameter as u32
        ));
    }
    let is_stable = rows <= max_layers;
    if !is_stable {
        warnings.push(format!(
            "Stacking {rows} rows exceeds recommended {max_layers} rows for SDR{sdr}"
        ));
    }
    if per_row > 0 {
        let bottom_pipe_load = bottom_row_load / per_row as f64;
        if bottom_pipe_load > BOTTOM_PIPE_LOAD_LIMIT_KG {
            warnings.push(format!(
                "High load on bottom pipes: {bottom_pipe_load:.0} kg/pipe"
            ));
        }
    }

    StackStability {
        pipes_per_row: per_row,
        total_pipes,
        total_weight,
        bottom_row_load,
        height: hexagonal::stack_height(diameter, rows),
        is_stable,
        warnings,
    }
}
