//! Animated visualisation of a running fit
pub mod animator;
pub mod frame;
pub mod transform;

#[cfg(test)]
mod transform_test;

pub use animator::{DEFAULT_FRAME_DELAY_MS, GifAnimator};
pub use frame::render_frame;
pub use transform::MapTransform;
