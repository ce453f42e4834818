/// Circle packing of pipe cross-sections, used for visualization only
pub mod circle_packing;

/// Uniform hexagonal (staggered) stacking formulas
pub mod hexagonal;

/// Geometric primitives
pub mod primitives;

/// Safe stacking limits per wall class
pub mod stacking;

mod stack_estimate;

#[doc(inline)]
pub use stack_estimate::StackEstimate;
#[doc(inline)]
pub use stack_estimate::estimate_mixed_stack;
#[doc(inline)]
pub use stack_estimate::estimate_mixed_stack_height;

/// sin(60°), the vertical distance between two rows of touching circles relative to their diameter
pub const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;
