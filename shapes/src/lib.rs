//! Plane shapes with area and perimeter.
//!
//! [`Rectangle`], [`Circle`] and [`Triangle`] all implement [`Shape`], so
//! they can be mixed in a `Vec<Box<dyn Shape>>`.

pub mod circle;
pub mod rectangle;
pub mod shape;
pub mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use triangle::Triangle;
