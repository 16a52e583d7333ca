//! Map page fitting
//!
//! Covers an ordered route of planar coordinates with as few fixed-size,
//! axis-aligned map pages as a k-means style heuristic finds, choosing
//! portrait or landscape per page and returning pages in route order.
pub mod cluster;
pub mod error;
pub mod io;
pub mod render;

#[cfg(test)]
mod io_test;

pub use error::{PageFitError, Result};
