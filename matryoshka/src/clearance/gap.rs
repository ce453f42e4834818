use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Pipe;
use crate::util::ClearanceConfig;

/// Outcome of checking whether a guest pipe can be inserted into a host bore.
#[derive(Clone, Debug, PartialEq)]
pub struct ClearanceResult {
    /// Space left between the (effective) bore and the guest pipe (mm)
    pub available_gap: f64,
    /// Minimum gap demanded for the host's diameter (mm)
    pub required_gap: f64,
    pub is_valid: bool,
    /// Bore after ovality derating (mm)
    pub effective_bore: f64,
    pub message: String,
}

/// Minimum gap between a host bore and a guest pipe, using the default clearance constants
pub fn minimum_gap(outer_diameter_mm: f64) -> f64 {
    minimum_gap_with(outer_diameter_mm, &ClearanceConfig::default())
}

pub fn minimum_gap_with(outer_diameter_mm: f64, config: &ClearanceConfig) -> f64 {
    config.base_clearance_mm + config.diameter_factor * outer_diameter_mm
}

/// Bore of a pipe after deformation under its own weight.
/// The loss is proportional to the pipe's outer diameter.
pub fn effective_bore(inner_diameter_mm: f64, outer_diameter_mm: f64, ovality_factor: f64) -> f64 {
    inner_diameter_mm - outer_diameter_mm * ovality_factor
}

/// Validates a guest pipe against a host bore with the default clearance constants
pub fn validate(
    host_bore_mm: f64,
    host_outer_mm: f64,
    guest_outer_mm: f64,
    apply_ovality: bool,
) -> ClearanceResult {
    let config = ClearanceConfig {
        apply_ovality,
        ..ClearanceConfig::default()
    };
    validate_with(host_bore_mm, host_outer_mm, guest_outer_mm, &config)
}

pub fn validate_with(
    host_bore_mm: f64,
    host_outer_mm: f64,
    guest_outer_mm: f64,
    config: &ClearanceConfig,
) -> ClearanceResult {
    let e_bore = effective_bore(host_bore_mm, host_outer_mm, config.ovality_factor);
    let required_gap = minimum_gap_with(host_outer_mm, config);

    if host_bore_mm <= 0.0 || host_outer_mm <= 0.0 {
        return ClearanceResult {
            available_gap: 0.0,
            required_gap,
            is_valid: false,
            effective_bore: e_bore,
            message: format!(
                "Invalid: degenerate host geometry (bore {host_bore_mm:.1}mm, outer {host_outer_mm:.1}mm)"
            ),
        };
    }

    let bore = match config.apply_ovality {
        true => e_bore,
        false => host_bore_mm,
    };
    let available_gap = bore - guest_outer_mm;
    let is_valid = available_gap >= required_gap;

    let message = match is_valid {
        true => format!("Valid: {available_gap:.1}mm gap >= {required_gap:.1}mm required"),
        false => format!(
            "Invalid: {available_gap:.1}mm gap < {required_gap:.1}mm required (deficit: {:.1}mm)",
            required_gap - available_gap
        ),
    };

    ClearanceResult {
        available_gap,
        required_gap,
        is_valid,
        effective_bore: e_bore,
        message,
    }
}

/// Checks whether `guest` fits inside the bore of `host`
pub fn fits_inside(host: &Pipe, guest: &Pipe, config: &ClearanceConfig) -> bool {
    guest.outer_diameter < host.outer_diameter
        && validate_with(
            host.inner_diameter,
            host.outer_diameter,
            guest.outer_diameter,
            config,
        )
        .is_valid
}

/// All candidates that fit inside `host`, largest outer diameter first.
/// Candidates with equal diameters keep their relative order.
pub fn find_compatible<'a, P>(host: &Pipe, candidates: &'a [P], config: &ClearanceConfig) -> Vec<&'a P>
where
    P: AsRef<Pipe>,
{
    candidates
        .iter()
        .filter(|c| fits_inside(host, c.as_ref(), config))
        .sorted_by_key(|c| std::cmp::Reverse(OrderedFloat(c.as_ref().outer_diameter)))
        .collect_vec()
}
