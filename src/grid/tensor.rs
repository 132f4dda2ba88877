//! Cartesian products of per-axis coordinate vectors.

use std::any::Any;

use ndarray::{Array1, Array2};

use super::regular::RegularGrid;
use crate::domain::{PointArray, TraversalOrder};
use crate::set::{HasExtent, Set};

/// Grid whose points are all combinations of the per-axis coordinates.
///
/// A grid with no axes has exactly one point, the empty tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorGrid {
    coord_vectors: Vec<Array1<f64>>,
}

impl TensorGrid {
    pub fn new(coord_vectors: Vec<Array1<f64>>) -> Self {
        Self { coord_vectors }
    }

    pub fn from_vecs(per_axis_values: Vec<Vec<f64>>) -> Self {
        Self::new(per_axis_values.into_iter().map(Array1::from).collect())
    }

    pub fn coord_vectors(&self) -> &[Array1<f64>] {
        &self.coord_vectors
    }

    pub fn dim(&self) -> usize {
        self.coord_vectors.len()
    }

    /// Number of coordinates per axis.
    pub fn shape(&self) -> Vec<usize> {
        self.coord_vectors.iter().map(|v| v.len()).collect()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.coord_vectors.iter().map(|v| v.len()).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All grid points stacked into a `(len, dim)` array.
    ///
    /// [`TraversalOrder::RowMajor`] varies the last axis fastest,
    /// [`TraversalOrder::ColumnMajor`] the first.
    pub fn points(&self, order: TraversalOrder) -> Array2<f64> {
        let shape = self.shape();
        let mut points = Array2::zeros((self.len(), self.dim()));

        for (row, mut point) in points.rows_mut().into_iter().enumerate() {
            let mut rest = row;
            let mut fill = |axis: usize| {
                let n = shape[axis];
                point[axis] = self.coord_vectors[axis][rest % n];
                rest /= n;
            };
            match order {
                TraversalOrder::RowMajor => (0..shape.len()).rev().for_each(&mut fill),
                TraversalOrder::ColumnMajor => (0..shape.len()).for_each(&mut fill),
            }
        }
        points
    }
}

impl PointArray for TensorGrid {
    fn points(&self, order: TraversalOrder) -> Array2<f64> {
        TensorGrid::points(self, order)
    }
}

impl Set for TensorGrid {
    type Element = [f64];

    /// Tensor grids compare equal to any grid with the same nodes.
    fn set_equals(&self, other: &dyn Any) -> bool {
        match other.downcast_ref::<RegularGrid>() {
            Some(other) => other.as_tensor_grid() == self,
            None => other.downcast_ref::<TensorGrid>() == Some(self),
        }
    }

    /// Exact membership: every coordinate must be one of the axis nodes.
    fn contains_element(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && self
                .coord_vectors
                .iter()
                .zip(point)
                .all(|(nodes, p)| nodes.iter().any(|x| x == p))
    }

    fn as_extent(&self) -> Option<&dyn HasExtent> {
        Some(self)
    }
}

impl HasExtent for TensorGrid {
    fn min(&self) -> Vec<f64> {
        self.coord_vectors
            .iter()
            .map(|v| v.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    fn max(&self) -> Vec<f64> {
        self.coord_vectors
            .iter()
            .map(|v| v.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_row_major_points() {
        let grid = TensorGrid::from_vecs(vec![vec![0.0, 1.0], vec![5.0, 6.0, 7.0]]);
        assert_eq!(grid.shape(), vec![2, 3]);
        assert_eq!(grid.len(), 6);
        assert_eq!(
            grid.points(TraversalOrder::RowMajor),
            array![
                [0.0, 5.0],
                [0.0, 6.0],
                [0.0, 7.0],
                [1.0, 5.0],
                [1.0, 6.0],
                [1.0, 7.0]
            ]
        );
    }

    #[test]
    fn test_column_major_points() {
        let grid = TensorGrid::from_vecs(vec![vec![0.0, 1.0], vec![5.0, 6.0, 7.0]]);
        assert_eq!(
            grid.points(TraversalOrder::ColumnMajor),
            array![
                [0.0, 5.0],
                [1.0, 5.0],
                [0.0, 6.0],
                [1.0, 6.0],
                [0.0, 7.0],
                [1.0, 7.0]
            ]
        );
    }

    #[test]
    fn test_zero_dimensional_grid_has_one_point() {
        let grid = TensorGrid::new(Vec::new());
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.points(TraversalOrder::RowMajor).dim(), (1, 0));
    }

    #[test]
    fn test_membership_is_exact() {
        let grid = TensorGrid::from_vecs(vec![vec![0.0, 1.0], vec![5.0, 6.0, 7.0]]);
        assert!(grid.contains_element(&[1.0, 6.0]));
        assert!(!grid.contains_element(&[0.5, 6.0]));
        assert!(!grid.contains_element(&[1.0]));
        assert!(grid.set_equals(&grid.clone()));
        assert!(grid.as_extent().is_some());
    }

    #[test]
    fn test_extent() {
        let grid = TensorGrid::from_vecs(vec![vec![3.0, -1.0], vec![2.0]]);
        assert_eq!(grid.min(), vec![-1.0, 2.0]);
        assert_eq!(grid.max(), vec![3.0, 2.0]);
    }
}
