//! Interval products: axis-aligned boxes in n-dimensional real space.
//!
//! [`IntervalProd`] is the general n-dimensional box. The fixed-dimension
//! variants [`Interval`], [`Rectangle`] and [`Cube`] are the same value with
//! a checked number of axes. Corner enumeration and uniform sampling go
//! through the [`GridConstruction`] capability.

mod coords;
mod error;
mod fixed;
mod interval_prod;
mod sampling;


pub use coords::{Insertable, IntoCoords, IntoCounts, IntoIndices};
pub use error::DomainError;
pub use fixed::{make_cube, make_interval, make_rectangle, Cube, Fixed, Interval, Rectangle};
pub use interval_prod::IntervalProd;
pub use sampling::{GridConstruction, PointArray, TraversalOrder};
