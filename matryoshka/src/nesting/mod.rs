mod matryoshka;

#[doc(inline)]
pub use matryoshka::*;
