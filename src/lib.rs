pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod math;
pub mod subdivision;
pub mod types;

pub use error::SubdivisionError;
pub use math::{hsv_to_rgb, midpoint, Hsv};
pub use subdivision::{triangle_count, SubdivisionGenerator, SubdivisionPolicy};
pub use types::{ColorRGB, Point2D, Triangle, TriangleColors, VertexBuffer, VertexRecord};
