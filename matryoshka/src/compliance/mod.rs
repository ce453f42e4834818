mod axle_distribution;
mod center_of_gravity;
mod transport;

#[doc(inline)]
pub use axle_distribution::*;
#[doc(inline)]
pub use center_of_gravity::*;
#[doc(inline)]
pub use transport::*;
