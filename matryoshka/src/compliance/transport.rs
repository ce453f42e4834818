use crate::compliance::axle_loads;
use crate::entities::TruckProfile;
use crate::util::AxleConfig;

/// Payload utilization above this percentage is reported
pub const SAFETY_MARGIN_PCT: f64 = 95.0;

/// Cargo weight against the truck's payload
#[derive(Clone, Debug, PartialEq)]
pub struct WeightLimits {
    pub is_valid: bool,
    pub total_weight_kg: f64,
    pub max_payload_kg: f64,
    pub max_axle_weight_kg: f64,
    pub utilization_pct: f64,
    pub remaining_kg: f64,
    pub overweight_kg: f64,
}

pub fn check_weight_limits(
    total_weight_kg: f64,
    max_payload_kg: f64,
    max_axle_weight_kg: f64,
) -> WeightLimits {
    WeightLimits {
        is_valid: total_weight_kg <= max_payload_kg,
        total_weight_kg,
        max_payload_kg,
        max_axle_weight_kg,
        utilization_pct: match max_payload_kg > 0.0 {
            true => total_weight_kg / max_payload_kg * 100.0,
            false => 0.0,
        },
        remaining_kg: (max_payload_kg - total_weight_kg).max(0.0),
        overweight_kg: (total_weight_kg - max_payload_kg).max(0.0),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransportCompliance {
    pub is_compliant: bool,
    pub weight: WeightLimits,
    pub kingpin_load_kg: f64,
    pub axle_group_load_kg: f64,
    pub kingpin_valid: bool,
    pub axle_valid: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks a truck's cargo against the payload limit and the axle limits
pub fn validate_transport(
    cargo_weight_kg: f64,
    cog_x_m: f64,
    profile: &TruckProfile,
    config: &AxleConfig,
) -> TransportCompliance {
    let weight = check_weight_limits(
        cargo_weight_kg,
        profile.max_payload_kg,
        profile.max_axle_weight_kg,
    );
    let axles = axle_loads(cargo_weight_kg, cog_x_m, config);

    let mut violations = vec![];
    if !weight.is_valid {
        violations.push(format!(
            "Overweight: {:.0} kg over limit",
            weight.overweight_kg
        ));
    }
    if config.axle_group_position() <= config.kingpin_position_m {
        //no lever between kingpin and axle group
        violations.extend(axles.messages.iter().cloned());
    } else if !axles.kingpin_valid {
        violations.push(format!(
            "Kingpin overload: {:.0} kg > {:.0} kg limit",
            axles.kingpin_load_kg, config.max_kingpin_load_kg
        ));
    }
    if !axles.axle_valid {
        violations.push(format!(
            "Axle group overload: {:.0} kg > {:.0} kg limit",
            axles.axle_group_load_kg,
            config.max_axle_group_load_kg()
        ));
    }

    let mut warnings = vec![];
    let (min, max) = (config.optimal_cog_min_m, config.optimal_cog_max_m);
    if cog_x_m < min {
        warnings.push(format!(
            "Center of gravity too far forward ({cog_x_m:.1}m). Optimal range: {min}-{max}m"
        ));
    } else if cog_x_m > max {
        warnings.push(format!(
            "Center of gravity too far back ({cog_x_m:.1}m). Optimal range: {min}-{max}m"
        ));
    }
    if weight.utilization_pct > SAFETY_MARGIN_PCT {
        warnings.push(format!(
            "High weight utilization ({:.1}%). Consider safety margin.",
            weight.utilization_pct
        ));
    }

    TransportCompliance {
        is_compliant: weight.is_valid && axles.total_valid,
        weight,
        kingpin_load_kg: axles.kingpin_load_kg,
        axle_group_load_kg: axles.axle_group_load_kg,
        kingpin_valid: axles.kingpin_valid,
        axle_valid: axles.axle_valid,
        violations,
        warnings,
    }
}
