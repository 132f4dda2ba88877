//! interval-domain - axis-aligned boxes as sampling domains
//!
//! The algebra of interval products (n-dimensional boxes): validated
//! construction, generalized measure, tolerant containment, distance, and the
//! dimension-changing transforms `collapse`, `squeeze` and `insert`. Boxes
//! hand off to grid construction to enumerate their corners and to produce
//! uniform samplings for discretization.

pub mod domain;
pub mod grid;
pub mod set;

pub use domain::{
    make_cube, make_interval, make_rectangle, Cube, DomainError, Interval, IntervalProd,
    Rectangle, TraversalOrder,
};
pub use grid::{RegularGrid, StandardGrids, TensorGrid};
pub use set::{HasExtent, RealNumbers, Set};
