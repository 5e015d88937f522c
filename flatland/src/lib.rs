//! Flatland: a 2D shape library for Rust
pub(crate) mod compare;

mod bubble;
mod consts;
mod error;
mod frame;
mod group;
mod polygon;
mod rectangle;
mod shape;

pub use bubble::*;
pub use error::*;
pub use frame::*;
pub use group::*;
pub use polygon::*;
pub use rectangle::*;
pub use shape::*;
