//! Interval products with a fixed number of axes.
//!
//! [`Fixed<N>`] wraps an [`IntervalProd`] whose dimension has been checked to
//! be `N`. Read access is transparent via `Deref<Target = IntervalProd>`.
//! Only `N` in `1..=3` can be constructed; other arities fail to compile.
//!
//! | Alias         | `N` | Extra accessor |
//! |---------------|-----|----------------|
//! | [`Interval`]  | 1   | `length()`     |
//! | [`Rectangle`] | 2   | `area()`       |
//! | [`Cube`]      | 3   |                |

use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::ops::Deref;

use super::coords::IntoCoords;
use super::error::DomainError;
use super::interval_prod::IntervalProd;
use crate::set::{HasExtent, Set};

/// An [`IntervalProd`] with exactly `N` axes.
#[derive(Clone, PartialEq)]
pub struct Fixed<const N: usize>(IntervalProd);

/// A closed interval `[begin, end]` of real numbers.
pub type Interval = Fixed<1>;
/// An axis-aligned rectangle.
pub type Rectangle = Fixed<2>;
/// An axis-aligned cuboid.
pub type Cube = Fixed<3>;

impl<const N: usize> Fixed<N> {
    const SUPPORTED_ARITY: () = assert!(
        N >= 1 && N <= 3,
        "Fixed<N> is only available for 1, 2 or 3 axes"
    );

    /// Creates the box and checks that it has `N` axes.
    ///
    /// # Errors
    ///
    /// Any construction error of [`IntervalProd::new`], or
    /// [`DomainError::DimensionMismatch`] if the box does not have `N` axes.
    pub fn new(begin: impl IntoCoords, end: impl IntoCoords) -> Result<Self, DomainError> {
        Self::try_from(IntervalProd::new(begin, end)?)
    }

    pub fn as_interval_prod(&self) -> &IntervalProd {
        &self.0
    }

    pub fn into_inner(self) -> IntervalProd {
        self.0
    }
}

impl<const N: usize> TryFrom<IntervalProd> for Fixed<N> {
    type Error = DomainError;

    fn try_from(value: IntervalProd) -> Result<Self, Self::Error> {
        let () = Self::SUPPORTED_ARITY;
        if value.dim() != N {
            return Err(DomainError::DimensionMismatch {
                what: "'begin' and 'end'",
                expected: N,
                found: value.dim(),
            });
        }
        Ok(Self(value))
    }
}

impl<const N: usize> From<Fixed<N>> for IntervalProd {
    fn from(value: Fixed<N>) -> Self {
        value.0
    }
}

impl<const N: usize> Deref for Fixed<N> {
    type Target = IntervalProd;

    fn deref(&self) -> &IntervalProd {
        &self.0
    }
}

impl<const N: usize> PartialEq<IntervalProd> for Fixed<N> {
    fn eq(&self, other: &IntervalProd) -> bool {
        self.0 == *other
    }
}

impl Fixed<1> {
    /// Length of the interval.
    pub fn length(&self) -> f64 {
        self.end()[0] - self.begin()[0]
    }
}

impl Fixed<2> {
    /// Area of the rectangle; zero if it is degenerate in either axis.
    pub fn area(&self) -> f64 {
        self.volume()
    }
}

/// Creates an [`Interval`]; scalars are accepted for both bounds.
pub fn make_interval(
    begin: impl IntoCoords,
    end: impl IntoCoords,
) -> Result<Interval, DomainError> {
    Interval::new(begin, end)
}

/// Creates a [`Rectangle`].
pub fn make_rectangle(
    begin: impl IntoCoords,
    end: impl IntoCoords,
) -> Result<Rectangle, DomainError> {
    Rectangle::new(begin, end)
}

/// Creates a [`Cube`].
pub fn make_cube(begin: impl IntoCoords, end: impl IntoCoords) -> Result<Cube, DomainError> {
    Cube::new(begin, end)
}

impl<const N: usize> Set for Fixed<N> {
    type Element = [f64];

    fn set_equals(&self, other: &dyn Any) -> bool {
        self.0.equals(other, 0.0)
    }

    fn contains_element(&self, element: &[f64]) -> bool {
        self.0.contains(element, 0.0)
    }

    fn as_extent(&self) -> Option<&dyn HasExtent> {
        Some(&self.0)
    }
}

impl<const N: usize> HasExtent for Fixed<N> {
    fn min(&self) -> Vec<f64> {
        self.0.begin().to_vec()
    }

    fn max(&self) -> Vec<f64> {
        self.0.end().to_vec()
    }
}

impl<const N: usize> Debug for Fixed<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (begin, end) = (self.begin(), self.end());
        match N {
            1 => write!(f, "Interval({:?}, {:?})", begin[0], end[0]),
            2 => write!(f, "Rectangle({begin:?}, {end:?})"),
            _ => write!(f, "Cube({begin:?}, {end:?})"),
        }
    }
}

impl<const N: usize> Display for Fixed<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Fixed<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Fixed<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = <IntervalProd as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(inner).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_scalars() {
        let interval = make_interval(-1.0, 2.0).unwrap();
        assert_eq!(interval.dim(), 1);
        assert_eq!(interval.length(), 3.0);
        assert_eq!(format!("{interval:?}"), "Interval(-1.0, 2.0)");
    }

    #[test]
    fn test_interval_rejects_wrong_dimension() {
        let err = make_interval([0.0, 0.0], [1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::DimensionMismatch {
                what: "'begin' and 'end'",
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_base_construction_errors_come_first() {
        let err = make_rectangle([0.0, 2.0], [1.0, 1.0]).unwrap_err();
        assert!(matches!(err, DomainError::OrderingViolation { .. }));
    }

    #[test]
    fn test_rectangle_area() {
        let rect = make_rectangle([0.0, 1.0], [2.0, 4.0]).unwrap();
        assert_eq!(rect.area(), 6.0);
        assert_eq!(format!("{rect:?}"), "Rectangle([0.0, 1.0], [2.0, 4.0])");

        let flat = make_rectangle([0.0, 1.0], [2.0, 1.0]).unwrap();
        assert_eq!(flat.area(), 0.0);
        assert_eq!(flat.measure(None), 2.0);
    }

    #[test]
    fn test_cube() {
        let cube = make_cube([0.0; 3], [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(cube.volume(), 6.0);
        assert_eq!(format!("{cube:?}"), "Cube([0.0, 0.0, 0.0], [1.0, 2.0, 3.0])");
        assert!(make_cube([0.0; 2], [1.0; 2]).is_err());
    }

    #[test]
    fn test_variant_equals_base_box() {
        let base = IntervalProd::new([0.0, 1.0], [2.0, 4.0]).unwrap();
        let rect = Rectangle::try_from(base.clone()).unwrap();
        assert!(base.equals(&rect, 0.0));
        assert!(rect.set_equals(&base));
        assert_eq!(rect, base);
        assert_eq!(IntervalProd::from(rect), base);
    }

    #[test]
    fn test_equality_is_symmetric_for_every_arity() {
        fn check<const N: usize>(base: IntervalProd) {
            let fixed = Fixed::<N>::try_from(base.clone()).unwrap();
            assert!(fixed.set_equals(&base));
            assert!(base.set_equals(&fixed));
            assert!(base.equals(&fixed, 0.0));
            assert!(fixed.equals(&base, 0.0));
        }
        check::<1>(IntervalProd::new(0.0, 1.0).unwrap());
        check::<2>(IntervalProd::new([0.0, 1.0], [2.0, 1.0]).unwrap());
        check::<3>(IntervalProd::new([0.0; 3], [1.0, 2.0, 3.0]).unwrap());
    }

    #[test]
    fn test_display_delegates_to_box() {
        let interval = make_interval(0.0, 0.5).unwrap();
        assert_eq!(interval.to_string(), "[0.0, 0.5]");
    }
}
