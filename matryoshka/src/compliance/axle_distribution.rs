use crate::util::AxleConfig;

/// Kingpin versus trailer axle group loads for a given center of gravity
#[derive(Clone, Debug, PartialEq)]
pub struct AxleLoads {
    pub kingpin_load_kg: f64,
    pub axle_group_load_kg: f64,
    pub kingpin_valid: bool,
    pub axle_valid: bool,
    pub total_valid: bool,
    pub messages: Vec<String>,
}

/// Splits `total_weight_kg` resting at `cog_x_m` over the kingpin and the axle group by moment balance:
/// `axle_load * (axle - kingpin) = total * (cog - kingpin)`.
pub fn axle_loads(total_weight_kg: f64, cog_x_m: f64, config: &AxleConfig) -> AxleLoads {
    let lever = config.axle_group_position() - config.kingpin_position_m;
    if lever <= 0.0 {
        return AxleLoads {
            kingpin_load_kg: total_weight_kg,
            axle_group_load_kg: 0.0,
            kingpin_valid: false,
            axle_valid: true,
            total_valid: false,
            messages: vec!["Invalid axle configuration".to_string()],
        };
    }

    let axle_load = total_weight_kg * (cog_x_m - config.kingpin_position_m) / lever;
    let kingpin_load = total_weight_kg - axle_load;
    let max_axle_group = config.max_axle_group_load_kg();

    let kingpin_valid = kingpin_load <= config.max_kingpin_load_kg;
    let axle_valid = axle_load <= max_axle_group;

    let mut messages = vec![];
    if !kingpin_valid {
        messages.push(format!(
            "Kingpin overload by {:.0} kg. Move load back toward axles.",
            kingpin_load - config.max_kingpin_load_kg
        ));
    }
    if !axle_valid {
        messages.push(format!(
            "Axle group overload by {:.0} kg. Move load forward toward kingpin.",
            axle_load - max_axle_group
        ));
    }
    if kingpin_valid && axle_valid {
        messages.push("Load distribution is within legal limits".to_string());
    }

    AxleLoads {
        kingpin_load_kg: kingpin_load,
        axle_group_load_kg: axle_load,
        kingpin_valid,
        axle_valid,
        total_valid: kingpin_valid && axle_valid,
        messages,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxleDistribution {
    pub kingpin_load_kg: f64,
    pub axle_group_load_kg: f64,
    /// Axle group load shared equally by the trailer axles
    pub per_axle_load_kg: f64,
    pub kingpin_utilization_pct: f64,
    pub axle_utilization_pct: f64,
    pub is_valid: bool,
    pub violation_message: Option<String>,
}

/// [`axle_loads`] extended with per-axle loads and utilization of the limits
pub fn axle_distribution(total_weight_kg: f64, cog_x_m: f64, config: &AxleConfig) -> AxleDistribution {
    let lever = config.axle_group_position() - config.kingpin_position_m;
    if lever <= 0.0 {
        return AxleDistribution {
            kingpin_load_kg: total_weight_kg,
            axle_group_load_kg: 0.0,
            per_axle_load_kg: 0.0,
            kingpin_utilization_pct: 100.0,
            axle_utilization_pct: 0.0,
            is_valid: false,
            violation_message: Some("Invalid axle configuration".to_string()),
        };
    }
    let loads = axle_loads(total_weight_kg, cog_x_m, config);
    let per_axle = match config.num_trailer_axles {
        0 => 0.0,
        n => loads.axle_group_load_kg / n as f64,
    };
    let max_axle_group = config.max_axle_group_load_kg();
    let pct = |load: f64, max: f64| match max > 0.0 {
        true => load / max * 100.0,
        false => 0.0,
    };

    let mut violations = vec![];
    if !loads.kingpin_valid {
        violations.push(format!(
            "Kingpin overload by {:.0} kg",
            loads.kingpin_load_kg - config.max_kingpin_load_kg
        ));
    }
    if !loads.axle_valid {
        violations.push(format!(
            "Axle group overload by {:.0} kg",
            loads.axle_group_load_kg - max_axle_group
        ));
    }
    if per_axle > config.max_per_axle_load_kg {
        violations.push(format!(
            "Per-axle overload by {:.0} kg",
            per_axle - config.max_per_axle_load_kg
        ));
    }

    AxleDistribution {
        kingpin_load_kg: loads.kingpin_load_kg,
        axle_group_load_kg: loads.axle_group_load_kg,
        per_axle_load_kg: per_axle,
        kingpin_utilization_pct: pct(loads.kingpin_load_kg, config.max_kingpin_load_kg),
        axle_utilization_pct: pct(loads.axle_group_load_kg, max_axle_group),
        is_valid: violations.is_empty(),
        violation_message: match violations.is_empty() {
            true => None,
            false => Some(violations.join("; ")),
        },
    }
}

/// Utilization above this percentage of a limit is reported
pub const HIGH_UTILIZATION_PCT: f64 = 90.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionAnalysis {
    pub distribution: AxleDistribution,
    pub cog_x_m: f64,
    pub cog_from_kingpin_m: f64,
    pub is_cog_optimal: bool,
    pub suggestion: Option<String>,
    pub warnings: Vec<String>,
}

pub fn analyze_distribution(
    total_weight_kg: f64,
    cog_x_m: f64,
    config: &AxleConfig,
) -> DistributionAnalysis {
    let distribution = axle_distribution(total_weight_kg, cog_x_m, config);
    let (min, max) = (config.optimal_cog_min_m, config.optimal_cog_max_m);
    let is_cog_optimal = (min..=max).contains(&cog_x_m);

    let suggestion = if is_cog_optimal {
        None
    } else if cog_x_m < min {
        Some(format!(
            "Move heavy items back by {:.1}m to reach optimal CoG range ({min}-{max}m)",
            min - cog_x_m
        ))
    } else {
        Some(format!(
            "Move heavy items forward by {:.1}m to reach optimal CoG range ({min}-{max}m)",
            cog_x_m - max
        ))
    };

    let mut warnings = vec![];
    if distribution.kingpin_utilization_pct > HIGH_UTILIZATION_PCT {
        warnings.push(format!(
            "High kingpin load ({:.0}% of limit)",
            distribution.kingpin_utilization_pct
        ));
    }
    if distribution.axle_utilization_pct > HIGH_UTILIZATION_PCT {
        warnings.push(format!(
            "High axle load ({:.0}% of limit)",
            distribution.axle_utilization_pct
        ));
    }
    if let Some(violation) = &distribution.violation_message {
        warnings.push(format!("VIOLATION: {violation}"));
    }

    DistributionAnalysis {
        distribution,
        cog_x_m,
        cog_from_kingpin_m: cog_x_m - config.kingpin_position_m,
        is_cog_optimal,
        suggestion,
        warnings,
    }
}

/// Range of centers of gravity (m from the trailer front) for which a load of `total_weight_kg`
/// respects both the kingpin and the axle group limit.
/// Heavier loads get a narrower range.
pub fn optimal_cog_range(total_weight_kg: f64, config: &AxleConfig) -> (f64, f64) {
    if total_weight_kg <= 0.0 {
        return (config.optimal_cog_min_m, config.optimal_cog_max_m);
    }
    let lever = config.axle_group_position() - config.kingpin_position_m;
    let min_cog = config.kingpin_position_m
        + (total_weight_kg - config.max_kingpin_load_kg) * lever / total_weight_kg;
    let max_cog =
        config.kingpin_position_m + config.max_axle_group_load_kg() * lever / total_weight_kg;
    (min_cog.max(0.5), max_cog.min(config.trailer_length_m - 0.5))
}
