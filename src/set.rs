//! Set capabilities shared by domain types.
//!
//! A [`Set`] answers two questions: "is this the same set as that one?" and
//! "is this element a member?". Sets that know their bounding corners also
//! implement [`HasExtent`], which is what containment of one set in another
//! is tested against.

use std::any::Any;
use std::fmt::Debug;

/// A mathematical set of elements of type [`Set::Element`].
pub trait Set: Debug + Any {
    /// Type of the members of this set.
    type Element: ?Sized;

    /// Returns true if `other` describes exactly the same set.
    ///
    /// Sets of a different concrete type are never equal.
    fn set_equals(&self, other: &dyn Any) -> bool;

    /// Returns true if `element` is a member of this set.
    fn contains_element(&self, element: &Self::Element) -> bool;

    /// Returns the extent capability of this set, if it has one.
    ///
    /// Sets without finite corner points keep the default (`None`).
    fn as_extent(&self) -> Option<&dyn HasExtent> {
        None
    }
}

/// Capability of sets whose extreme points bound them.
///
/// `min()` and `max()` are the lower and upper corners of the smallest
/// axis-aligned box containing the set.
pub trait HasExtent {
    /// Lower corner, one entry per axis.
    fn min(&self) -> Vec<f64>;

    /// Upper corner, one entry per axis.
    fn max(&self) -> Vec<f64>;
}

/// The set of real numbers, represented as every non-NaN `f64`.
///
/// Infinities are admitted: they are the bounds of unbounded domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealNumbers;

impl RealNumbers {
    pub const fn new() -> Self {
        Self
    }

    /// Membership predicate for a single scalar.
    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan()
    }

    /// Returns true if every coordinate of `point` is a real number.
    pub fn contains_all(&self, point: &[f64]) -> bool {
        point.iter().all(|&x| self.contains(x))
    }
}

impl Set for RealNumbers {
    type Element = f64;

    fn set_equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<RealNumbers>().is_some()
    }

    fn contains_element(&self, element: &f64) -> bool {
        self.contains(*element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_numbers_membership() {
        let reals = RealNumbers::new();
        assert!(reals.contains(0.0));
        assert!(reals.contains(-3.5));
        assert!(reals.contains(f64::INFINITY));
        assert!(reals.contains(f64::NEG_INFINITY));
        assert!(!reals.contains(f64::NAN));
    }

    #[test]
    fn real_numbers_contains_all() {
        let reals = RealNumbers;
        assert!(reals.contains_all(&[]));
        assert!(reals.contains_all(&[1.0, 2.0]));
        assert!(!reals.contains_all(&[1.0, f64::NAN]));
    }

    #[test]
    fn real_numbers_equality_is_by_type() {
        let reals = RealNumbers;
        assert!(reals.set_equals(&RealNumbers));
        assert!(!reals.set_equals(&1.0_f64));
    }

    #[test]
    fn real_numbers_have_no_extent() {
        assert!(RealNumbers.as_extent().is_none());
    }
}
