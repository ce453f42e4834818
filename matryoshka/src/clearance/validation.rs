use crate::clearance::{ClearanceResult, validate_with};
use crate::entities::Pipe;
use crate::util::ClearanceConfig;

/// A guest may weigh at most this many times its host (per meter).
pub const MAX_NESTED_WEIGHT_RATIO: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct WeightCheck {
    pub is_valid: bool,
    pub outer_weight_per_m: f64,
    pub inner_weight_per_m: f64,
    /// Inner over outer weight per meter, infinite for a weightless outer pipe
    pub weight_ratio: f64,
}

/// Full verdict on one pipe nested inside another
#[derive(Clone, Debug, PartialEq)]
pub struct NestingValidation {
    pub is_valid: bool,
    pub clearance: ClearanceResult,
    pub weight: WeightCheck,
    pub warnings: Vec<String>,
}

/// Validates `inner` nested inside `outer`: clearance, weight ratio and wall class compatibility
pub fn validate_nesting(outer: &Pipe, inner: &Pipe, config: &ClearanceConfig) -> NestingValidation {
    let clearance = validate_with(
        outer.inner_diameter,
        outer.outer_diameter,
        inner.outer_diameter,
        config,
    );

    let weight_ratio = match outer.weight_per_meter > 0.0 {
        true => inner.weight_per_meter / outer.weight_per_meter,
        false => f64::INFINITY,
    };
    let weight = WeightCheck {
        is_valid: weight_ratio <= MAX_NESTED_WEIGHT_RATIO,
        outer_weight_per_m: outer.weight_per_meter,
        inner_weight_per_m: inner.weight_per_meter,
        weight_ratio,
    };

    let mut warnings = vec![];
    if !weight.is_valid {
        warnings.push(format!(
            "Inner pipe ({:.1} kg/m) is more than 2x heavier than outer pipe ({:.1} kg/m)",
            inner.weight_per_meter, outer.weight_per_meter
        ));
    }
    //a higher SDR means a thinner, less rigid wall
    if outer.sdr > inner.sdr && inner.weight_per_meter > outer.weight_per_meter {
        warnings.push(format!(
            "Caution: Heavier pipe (SDR{}) inside lighter pipe (SDR{}) may cause outer pipe deformation",
            inner.sdr, outer.sdr
        ));
    }

    NestingValidation {
        is_valid: clearance.is_valid && weight.is_valid,
        clearance,
        weight,
        warnings,
    }
}

/// Verdict on a complete telescoping chain
#[derive(Clone, Debug, PartialEq)]
pub struct ChainValidation {
    pub is_valid: bool,
    /// One entry per adjacent pair, outermost pair first
    pub levels: Vec<NestingValidation>,
    pub warnings: Vec<String>,
}

/// Validates a chain of pipes ordered from outermost to innermost
pub fn validate_chain<P: AsRef<Pipe>>(
    chain: &[P],
    max_levels: usize,
    config: &ClearanceConfig,
) -> ChainValidation {
    if chain.len() < 2 {
        return ChainValidation {
            is_valid: true,
            levels: vec![],
            warnings: vec![],
        };
    }
    if chain.len() > max_levels {
        return ChainValidation {
            is_valid: false,
            levels: vec![],
            warnings: vec![format!("Exceeds max nesting levels ({max_levels})")],
        };
    }

    let mut warnings = vec![];
    let mut levels = vec![];
    for (i, pair) in chain.windows(2).enumerate() {
        let (outer, inner) = (pair[0].as_ref(), pair[1].as_ref());
        let result = validate_nesting(outer, inner, config);
        if !result.is_valid {
            warnings.push(format!(
                "Level {}: {} -> {} invalid",
                i + 1,
                outer.code,
                inner.code
            ));
        }
        warnings.extend(result.warnings.iter().cloned());
        levels.push(result);
    }

    ChainValidation {
        is_valid: levels.iter().all(|l| l.is_valid),
        levels,
        warnings,
    }
}
