//! Color fingerprints used to compare target cells with candidate photos

/// Region averaging and RGB distance
pub mod sampler;

pub use sampler::{Color, average_color, average_color_of};
