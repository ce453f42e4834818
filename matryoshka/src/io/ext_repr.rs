use serde::{Deserialize, Serialize};

use crate::util::PackingStrategy;

/// External representation of a [`Pipe`](crate::entities::Pipe) order line.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPipe {
    /// Catalog code, unique per pipe type
    pub code: String,
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    /// Wall thickness, derived from the diameters if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wall_mm: Option<f64>,
    /// Standard Dimension Ratio
    pub sdr: u32,
    pub pressure_class: String,
    pub weight_per_meter: f64,
    /// Number of pipes of this type in the order
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

/// External representation of a [`TruckProfile`](crate::entities::TruckProfile).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTruckProfile {
    pub name: String,
    pub max_payload_kg: f64,
    pub internal_length_mm: f64,
    pub internal_width_mm: f64,
    pub internal_height_mm: f64,
    #[serde(default = "default_max_axle_weight")]
    pub max_axle_weight_kg: f64,
}

fn default_max_axle_weight() -> f64 {
    11_500.0
}

impl Default for ExtTruckProfile {
    fn default() -> Self {
        Self {
            name: "Standard 24t".to_string(),
            max_payload_kg: 24_000.0,
            internal_length_mm: 13_600.0,
            internal_width_mm: 2_480.0,
            internal_height_mm: 2_700.0,
            max_axle_weight_kg: default_max_axle_weight(),
        }
    }
}

/// External representation of an [`Order`](crate::entities::Order).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOrder {
    pub name: String,
    /// Length of every pipe in the order (m)
    #[serde(default = "default_pipe_length")]
    pub pipe_length_m: f64,
    pub pipes: Vec<ExtPipe>,
    /// Truck type to load, a standard 24t truck if not specified
    #[serde(default)]
    pub truck: ExtTruckProfile,
}

fn default_pipe_length() -> f64 {
    12.0
}

/// External representation of a [`Bundle`](crate::entities::Bundle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBundle {
    /// Code of the host pipe
    pub outer_pipe: String,
    pub outer_diameter_mm: f64,
    /// Bundles nested inside the host
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub nested: Vec<ExtBundle>,
    pub nesting_levels: usize,
    pub total_pipes: usize,
    pub bundle_weight_kg: f64,
    pub requires_heavy_extraction: bool,
}

/// External representation of a [`TruckLoad`](crate::entities::TruckLoad).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTruckLoad {
    pub truck_number: usize,
    pub total_weight_kg: f64,
    pub utilization_pct: f64,
    pub remaining_capacity_kg: f64,
    pub bundle_count: usize,
    pub bundles: Vec<ExtBundle>,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackingResult {
    pub trucks_needed: usize,
    pub total_weight_kg: f64,
    pub average_utilization_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub strategy: Option<PackingStrategy>,
    pub trucks: Vec<ExtTruckLoad>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}
