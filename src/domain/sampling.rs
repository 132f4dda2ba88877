//! Grid construction capability consumed by [`IntervalProd`].
//!
//! The box only knows its per-axis bounds; turning those into explicit point
//! arrays is delegated to an implementation of [`GridConstruction`]. The
//! default one is [`crate::grid::StandardGrids`].
//!
//! [`IntervalProd`]: super::IntervalProd

use std::fmt::Display;
use std::str::FromStr;

use ndarray::Array2;

use super::error::DomainError;

/// Axis traversal order for stacking grid points into rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalOrder {
    /// Last axis varies fastest (`"C"`).
    #[default]
    RowMajor,
    /// First axis varies fastest (`"F"`).
    ColumnMajor,
}

impl FromStr for TraversalOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::RowMajor),
            "F" => Ok(Self::ColumnMajor),
            other => Err(DomainError::InvalidOption {
                what: "traversal order ('C' or 'F')",
                option: other.to_string(),
            }),
        }
    }
}

impl Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowMajor => write!(f, "C"),
            Self::ColumnMajor => write!(f, "F"),
        }
    }
}

/// A grid that can be stacked into an explicit point array.
pub trait PointArray {
    /// All grid points, one per row, traversed in `order`.
    fn points(&self, order: TraversalOrder) -> Array2<f64>;
}

/// Builds grids from per-axis data.
pub trait GridConstruction {
    type TensorGrid: PointArray;
    type RegularGrid;

    /// Cartesian product of the given per-axis coordinate sets.
    fn make_tensor_grid(&self, per_axis_values: Vec<Vec<f64>>) -> Self::TensorGrid;

    /// Equispaced grid with `num_nodes[i]` nodes centered on `center[i]`,
    /// spaced `stride[i]` apart.
    fn make_regular_grid(
        &self,
        num_nodes: Vec<usize>,
        center: Vec<f64>,
        stride: Vec<f64>,
    ) -> Self::RegularGrid;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_traversal_order() {
        assert_eq!("C".parse::<TraversalOrder>(), Ok(TraversalOrder::RowMajor));
        assert_eq!("F".parse::<TraversalOrder>(), Ok(TraversalOrder::ColumnMajor));
        assert!(matches!(
            "A".parse::<TraversalOrder>(),
            Err(DomainError::InvalidOption { .. })
        ));
    }

    #[test]
    fn traversal_order_round_trips_through_display() {
        for order in [TraversalOrder::RowMajor, TraversalOrder::ColumnMajor] {
            assert_eq!(order.to_string().parse::<TraversalOrder>(), Ok(order));
        }
        assert_eq!(TraversalOrder::default(), TraversalOrder::RowMajor);
    }
}
