mod color;
mod midpoint;

pub use color::{hsv_to_rgb, Hsv};
pub use midpoint::midpoint;
