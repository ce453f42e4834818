use serde::{Deserialize, Serialize};

/// Absolute ceiling on the depth of a telescoping chain, regardless of configuration.
pub const MAX_NESTING_LEVELS: usize = 10;

/// Nesting depth of a loading plan when none is configured.
pub const PLAN_NESTING_LEVELS: usize = 4;

///Configuration of the gap clearance calculator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ClearanceConfig {
    ///Fixed part of the minimum gap between a host bore and a guest pipe (mm)
    pub base_clearance_mm: f64,
    ///Part of the minimum gap proportional to the host's outer diameter
    pub diameter_factor: f64,
    ///Fraction of the host's outer diameter lost to ovality (deformation under its own weight)
    pub ovality_factor: f64,
    ///Whether the bore is derated by the ovality factor before comparing gaps
    pub apply_ovality: bool,
}

impl Default for ClearanceConfig {
    fn default() -> Self {
        Self {
            base_clearance_mm: 15.0,
            diameter_factor: 0.015,
            ovality_factor: 0.04,
            apply_ovality: true,
        }
    }
}

///Configuration of the nesting engine.
///The default allows chains up to [`MAX_NESTING_LEVELS`] deep, see [`NestingConfig::for_loading_plan`]
///for the shallower depth used when planning loads.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NestingConfig {
    ///If disabled, every pipe becomes a bundle of its own
    pub enabled: bool,
    ///Maximum number of nesting levels below a host (clamped to [`MAX_NESTING_LEVELS`])
    pub max_levels: usize,
    ///Prefer guests that are not much heavier (per meter) than their host
    pub prefer_lighter: bool,
    ///Maximum guest-to-host weight per meter ratio when `prefer_lighter` is enabled
    pub max_weight_ratio: f64,
    #[serde(default)]
    pub clearance: ClearanceConfig,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_levels: MAX_NESTING_LEVELS,
            prefer_lighter: true,
            max_weight_ratio: 1.5,
            clearance: ClearanceConfig::default(),
        }
    }
}

impl NestingConfig {
    /// Default configuration limited to [`PLAN_NESTING_LEVELS`]
    pub fn for_loading_plan() -> Self {
        Self {
            max_levels: PLAN_NESTING_LEVELS,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PackingStrategy {
    /// Search for the lowest truck count first, fall back to [`PackingStrategy::FirstFitDecreasing`]
    #[default]
    TruckCountFirst,
    /// Decreasing-weight first fit followed by rebalancing
    FirstFitDecreasing,
}

///Configuration of the bin packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackingConfig {
    pub strategy: PackingStrategy,
    ///Horizontal gap between neighbouring bundles when estimating stack height (mm)
    pub stack_gap_mm: f64,
    ///Maximum number of attempts to empty the last truck
    pub rebalance_iterations: usize,
    ///Maximum number of pairwise balancing sweeps
    pub balance_iterations: usize,
    ///Minimum utilization difference (percentage points) between two trucks before balancing them
    pub balance_trigger_pct: f64,
    ///Minimum relative reduction of a pair's weight gap for a balancing move to be accepted
    pub balance_min_improvement: f64,
    ///Number of truck counts above the weight lower bound tried by the truck-count-first search
    pub extra_truck_attempts: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            strategy: PackingStrategy::default(),
            stack_gap_mm: 20.0,
            rebalance_iterations: 10,
            balance_iterations: 20,
            balance_trigger_pct: 15.0,
            balance_min_improvement: 0.10,
            extra_truck_attempts: 4,
        }
    }
}

///Configuration of the semi-trailer axle model.
///Positions are in meters measured from the front of the trailer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AxleConfig {
    pub kingpin_position_m: f64,
    pub trailer_length_m: f64,
    ///Center of the trailer axle group. Defaults to 1.5 m from the rear of the trailer.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub axle_group_position_m: Option<f64>,
    pub num_trailer_axles: usize,
    pub max_kingpin_load_kg: f64,
    pub max_per_axle_load_kg: f64,
    pub optimal_cog_min_m: f64,
    pub optimal_cog_max_m: f64,
}

impl AxleConfig {
    pub fn axle_group_position(&self) -> f64 {
        self.axle_group_position_m
            .unwrap_or(self.trailer_length_m - 1.5)
    }

    pub fn max_axle_group_load_kg(&self) -> f64 {
        self.max_per_axle_load_kg * self.num_trailer_axles as f64
    }
}

impl Default for AxleConfig {
    fn default() -> Self {
        Self {
            kingpin_position_m: 1.5,
            trailer_length_m: 13.6,
            axle_group_position_m: None,
            num_trailer_axles: 3,
            max_kingpin_load_kg: 11_500.0,
            max_per_axle_load_kg: 8_000.0,
            optimal_cog_min_m: 5.5,
            optimal_cog_max_m: 7.5,
        }
    }
}
