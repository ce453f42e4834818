mod gap;
mod validation;

#[doc(inline)]
pub use gap::*;
#[doc(inline)]
pub use validation::*;
