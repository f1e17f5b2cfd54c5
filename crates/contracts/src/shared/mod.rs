pub mod color;
pub mod error;
pub mod palette;
pub mod theme_shape;
