//! Equispaced grids.

use std::any::Any;

use ndarray::{Array1, Array2};

use super::tensor::TensorGrid;
use crate::domain::{PointArray, TraversalOrder};
use crate::set::{HasExtent, Set};

/// Tensor grid with `num_nodes[i]` equispaced nodes on axis `i`, centered on
/// `center[i]` and `stride[i]` apart.
///
/// Node `k` of axis `i` sits at `center[i] + (k - (num_nodes[i] - 1) / 2) * stride[i]`.
/// An axis with a single node holds exactly `center[i]`; its stride is
/// recorded as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGrid {
    num_nodes: Vec<usize>,
    center: Vec<f64>,
    stride: Vec<f64>,
    grid: TensorGrid,
}

impl RegularGrid {
    /// Creates the grid.
    ///
    /// # Panics
    ///
    /// Panics if `num_nodes`, `center` and `stride` differ in length.
    pub fn new(num_nodes: Vec<usize>, center: Vec<f64>, stride: Vec<f64>) -> Self {
        assert!(
            num_nodes.len() == center.len() && center.len() == stride.len(),
            "RegularGrid num_nodes, center and stride must have equal lengths"
        );

        let stride: Vec<f64> = num_nodes
            .iter()
            .zip(stride)
            .map(|(&n, s)| if n == 1 { 0.0 } else { s })
            .collect();

        let coord_vectors = num_nodes
            .iter()
            .zip(center.iter().zip(&stride))
            .map(|(&n, (&c, &s))| {
                let half = (n as f64 - 1.0) / 2.0;
                Array1::from_iter((0..n).map(|k| c + (k as f64 - half) * s))
            })
            .collect();

        Self {
            num_nodes,
            center,
            stride,
            grid: TensorGrid::new(coord_vectors),
        }
    }

    pub fn num_nodes(&self) -> &[usize] {
        &self.num_nodes
    }

    pub fn center(&self) -> &[f64] {
        &self.center
    }

    pub fn stride(&self) -> &[f64] {
        &self.stride
    }

    /// Node coordinates per axis.
    pub fn coord_vectors(&self) -> &[Array1<f64>] {
        self.grid.coord_vectors()
    }

    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn as_tensor_grid(&self) -> &TensorGrid {
        &self.grid
    }

    pub fn points(&self, order: TraversalOrder) -> Array2<f64> {
        self.grid.points(order)
    }
}

impl PointArray for RegularGrid {
    fn points(&self, order: TraversalOrder) -> Array2<f64> {
        RegularGrid::points(self, order)
    }
}

impl Set for RegularGrid {
    type Element = [f64];

    /// Regular grids compare equal to any grid with the same nodes.
    fn set_equals(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<RegularGrid>() {
            Some(other) => other.grid == self.grid,
            None => self.grid.set_equals(other),
        }
    }

    fn contains_element(&self, point: &[f64]) -> bool {
        self.grid.contains_element(point)
    }

    fn as_extent(&self) -> Option<&dyn HasExtent> {
        Some(self)
    }
}

impl HasExtent for RegularGrid {
    fn min(&self) -> Vec<f64> {
        self.grid.min()
    }

    fn max(&self) -> Vec<f64> {
        self.grid.max()
    }
}
