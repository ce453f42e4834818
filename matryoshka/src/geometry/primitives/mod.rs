mod circle;
mod point;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use point::Point;
