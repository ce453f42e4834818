/// Invariants of bundles and packing results, verified in debug builds
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::AxleConfig;
#[doc(inline)]
pub use config::ClearanceConfig;
#[doc(inline)]
pub use config::NestingConfig;
#[doc(inline)]
pub use config::PackingConfig;
#[doc(inline)]
pub use config::PackingStrategy;
#[doc(inline)]
pub use config::MAX_NESTING_LEVELS;
#[doc(inline)]
pub use config::PLAN_NESTING_LEVELS;
#[doc(inline)]
pub use fpa::FPA;
