mod bundle;
mod order;
mod packing_result;
mod pipe;
mod truck;

#[doc(inline)]
pub use bundle::Bundle;
#[doc(inline)]
pub use order::Order;
#[doc(inline)]
pub use order::STANDARD_PIPE_LENGTHS_M;
#[doc(inline)]
pub use packing_result::PackingResult;
#[doc(inline)]
pub use pipe::Pipe;
#[doc(inline)]
pub use truck::TruckLoad;
#[doc(inline)]
pub use truck::TruckProfile;
#[doc(inline)]
pub use truck::TruckStatus;
#[doc(inline)]
pub use bundle::HEAVY_EXTRACTION_THRESHOLD_KG;
