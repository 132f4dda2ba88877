//! Argument conversions for per-axis inputs.
//!
//! Bounds, points, axis indices and node counts can be given either as a single scalar
//! (interpreted as one axis) or as any sequence with one entry per axis.

use ndarray::{Array1, ArrayView1};

use super::error::DomainError;
use super::fixed::Fixed;
use super::interval_prod::IntervalProd;

/// Per-axis real coordinates, e.g. a point or a vector of bounds.
pub trait IntoCoords {
    fn into_coords(self) -> Vec<f64>;
}

/// Per-axis node counts for sampling.
pub trait IntoCounts {
    fn into_counts(self) -> Vec<usize>;
}

/// One or more axis indices.
pub trait IntoIndices {
    fn into_indices(self) -> Vec<usize>;
}

/// Anything that can be spliced into an [`IntervalProd`] with
/// [`IntervalProd::insert`].
///
/// Boxes are inserted as they are; coordinates `a` are inserted as the
/// degenerate box `[a, a]`.
pub trait Insertable {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError>;
}

macro_rules! impl_per_axis {
    ($trait:ident, $method:ident, $scalar:ty) => {
        impl $trait for $scalar {
            fn $method(self) -> Vec<$scalar> {
                vec![self]
            }
        }

        impl $trait for Vec<$scalar> {
            fn $method(self) -> Vec<$scalar> {
                self
            }
        }

        impl $trait for &Vec<$scalar> {
            fn $method(self) -> Vec<$scalar> {
                self.clone()
            }
        }

        impl $trait for &[$scalar] {
            fn $method(self) -> Vec<$scalar> {
                self.to_vec()
            }
        }

        impl<const N: usize> $trait for [$scalar; N] {
            fn $method(self) -> Vec<$scalar> {
                self.to_vec()
            }
        }

        impl<const N: usize> $trait for &[$scalar; N] {
            fn $method(self) -> Vec<$scalar> {
                self.to_vec()
            }
        }
    };
}

impl_per_axis!(IntoCoords, into_coords, f64);
impl_per_axis!(IntoCounts, into_counts, usize);
impl_per_axis!(IntoIndices, into_indices, usize);

impl IntoCoords for Array1<f64> {
    fn into_coords(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoCoords for &Array1<f64> {
    fn into_coords(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoCoords for ArrayView1<'_, f64> {
    fn into_coords(self) -> Vec<f64> {
        self.to_vec()
    }
}

macro_rules! impl_insertable_coords {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Insertable for $ty {
                fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
                    IntervalProd::from_point(self)
                }
            }
        )*
    };
}

impl_insertable_coords!(f64, Vec<f64>, &Vec<f64>, &[f64], Array1<f64>, &Array1<f64>);

impl<const N: usize> Insertable for [f64; N] {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        IntervalProd::from_point(self)
    }
}

impl<const N: usize> Insertable for &[f64; N] {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        IntervalProd::from_point(self)
    }
}

impl Insertable for IntervalProd {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        Ok(self)
    }
}

impl Insertable for &IntervalProd {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        Ok(self.clone())
    }
}

impl<const N: usize> Insertable for Fixed<N> {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        Ok(self.into_inner())
    }
}

impl<const N: usize> Insertable for &Fixed<N> {
    fn into_interval_prod(self) -> Result<IntervalProd, DomainError> {
        Ok(self.as_interval_prod().clone())
    }
}
