use serde::{Deserialize, Serialize};

use matryoshka::compliance::LoadPositioning;
use matryoshka::entities::HEAVY_EXTRACTION_THRESHOLD_KG;
use matryoshka::util::{AxleConfig, NestingConfig, PackingConfig};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the load planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LPConfig {
    /// Configuration of the nesting engine, including the clearance rules
    #[serde(default = "NestingConfig::for_loading_plan")]
    pub nesting: NestingConfig,
    /// Configuration of the truck packing strategies
    #[serde(default)]
    pub packing: PackingConfig,
    /// Trailer geometry and legal axle limits
    #[serde(default)]
    pub axle: AxleConfig,
    /// How bundles are positioned along the trailer for the center of gravity
    #[serde(default)]
    pub positioning: LoadPositioning,
    /// Bundles heavier than this (kg) are reported as requiring heavy extraction equipment
    #[serde(default = "default_heavy_extraction_threshold")]
    pub heavy_extraction_threshold_kg: f64,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_heavy_extraction_threshold() -> f64 {
    HEAVY_EXTRACTION_THRESHOLD_KG
}

impl Default for LPConfig {
    fn default() -> Self {
        Self {
            nesting: NestingConfig::for_loading_plan(),
            packing: PackingConfig::default(),
            axle: AxleConfig::default(),
            positioning: LoadPositioning::default(),
            heavy_extraction_threshold_kg: HEAVY_EXTRACTION_THRESHOLD_KG,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
