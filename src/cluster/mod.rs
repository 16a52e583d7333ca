//! Package cluster fits an ordered route onto fixed-size map pages
pub mod fitter;
pub mod listener;
pub mod page;
pub mod page_spec;
pub mod point;
pub mod rect;


pub use fitter::Fitter;
pub use listener::FitListener;
pub use page::Page;
pub use page_spec::{Orientation, PageSpec};
pub use point::{Coordinate, CoordinateList};
pub use rect::{Rect, bounds};
