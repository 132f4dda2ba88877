//! Explicit point grids built from per-axis coordinates.
//!
//! [`TensorGrid`] is the Cartesian product of arbitrary per-axis coordinate
//! vectors; [`RegularGrid`] is the equispaced special case described by node
//! counts, a center and a stride. [`StandardGrids`] plugs both into
//! [`GridConstruction`], which is how interval products materialize their
//! corners and samplings.

mod regular;
mod tensor;

pub use regular::RegularGrid;
pub use tensor::TensorGrid;

use crate::domain::GridConstruction;

/// The default [`GridConstruction`]: builds [`TensorGrid`]s and [`RegularGrid`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGrids;

impl GridConstruction for StandardGrids {
    type TensorGrid = TensorGrid;
    type RegularGrid = RegularGrid;

    fn make_tensor_grid(&self, per_axis_values: Vec<Vec<f64>>) -> TensorGrid {
        TensorGrid::from_vecs(per_axis_values)
    }

    fn make_regular_grid(
        &self,
        num_nodes: Vec<usize>,
        center: Vec<f64>,
        stride: Vec<f64>,
    ) -> RegularGrid {
        RegularGrid::new(num_nodes, center, stride)
    }
}
