//! N-dimensional axis-aligned boxes.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use log::{debug, trace};
use ndarray::Array2;

use super::coords::{Insertable, IntoCoords, IntoCounts, IntoIndices};
use super::error::DomainError;
use super::fixed::Fixed;
use super::sampling::{GridConstruction, PointArray, TraversalOrder};
use crate::grid::{RegularGrid, StandardGrids};
use crate::set::{HasExtent, RealNumbers, Set};

/// Cartesian product of `n` closed intervals `[begin[i], end[i]]`.
///
/// An axis with `begin[i] == end[i]` is *degenerate*: it contributes a single
/// admissible value and no extent. The partition into degenerate and
/// non-degenerate axes is computed once on construction.
///
/// Values are immutable. Every transform (`collapse`, `squeeze`, `insert`)
/// returns a new box with its own storage.
///
/// # Example
///
/// ```rust
/// use interval_domain::IntervalProd;
///
/// let rbox = IntervalProd::new([-1.0, 2.5, 0.0], [-0.5, 10.0, 0.0]).unwrap();
/// assert_eq!(rbox.dim(), 3);
/// assert_eq!(rbox.truedim(), 2);
/// assert_eq!(rbox.measure(None), 3.75);
/// assert_eq!(rbox.volume(), 0.0);
/// assert_eq!(rbox.measure(Some(1)), f64::INFINITY);
/// ```
#[derive(Clone)]
pub struct IntervalProd {
    begin: Vec<f64>,
    end: Vec<f64>,
    degenerate: Vec<usize>,
    nondegenerate: Vec<usize>,
}

/// Finds the [`IntervalProd`] behind a type-erased set, if it is one.
///
/// Covers every arity [`Fixed`] can be constructed with.
pub(crate) fn downcast_interval_prod(other: &dyn Any) -> Option<&IntervalProd> {
    other
        .downcast_ref::<IntervalProd>()
        .or_else(|| other.downcast_ref::<Fixed<1>>().map(Fixed::as_interval_prod))
        .or_else(|| other.downcast_ref::<Fixed<2>>().map(Fixed::as_interval_prod))
        .or_else(|| other.downcast_ref::<Fixed<3>>().map(Fixed::as_interval_prod))
}

/// Vector norm of order `ord`, with the usual conventions for `0` and `±inf`.
fn vector_norm(values: &[f64], ord: f64) -> f64 {
    if ord == f64::INFINITY {
        values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    } else if ord == f64::NEG_INFINITY {
        values.iter().fold(f64::INFINITY, |acc, x| acc.min(x.abs()))
    } else if ord == 0.0 {
        values.iter().filter(|x| **x != 0.0).count() as f64
    } else if ord == 1.0 {
        values.iter().map(|x| x.abs()).sum()
    } else if ord == 2.0 {
        values.iter().map(|x| x * x).sum::<f64>().sqrt()
    } else {
        values
            .iter()
            .map(|x| x.abs().powf(ord))
            .sum::<f64>()
            .powf(ord.recip())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────

impl IntervalProd {
    /// Creates the box `[begin[0], end[0]] x ... x [begin[n-1], end[n-1]]`.
    ///
    /// A scalar bound is treated as a single axis.
    ///
    /// # Errors
    ///
    /// - [`DomainError::DimensionMismatch`] if `begin` and `end` differ in length.
    /// - [`DomainError::OrderingViolation`] if `begin[i] > end[i]` (or either
    ///   is NaN) for some axis.
    pub fn new(begin: impl IntoCoords, end: impl IntoCoords) -> Result<Self, DomainError> {
        Self::from_vecs(begin.into_coords(), end.into_coords())
    }

    /// Creates the fully degenerate box `[a, a]` for the point `a`.
    pub fn from_point(values: impl IntoCoords) -> Result<Self, DomainError> {
        let values = values.into_coords();
        Self::from_vecs(values.clone(), values)
    }

    fn from_vecs(begin: Vec<f64>, end: Vec<f64>) -> Result<Self, DomainError> {
        if begin.len() != end.len() {
            debug!(
                "rejecting interval product: {} begin vs {} end entries",
                begin.len(),
                end.len()
            );
            return Err(DomainError::DimensionMismatch {
                what: "'end'",
                expected: begin.len(),
                found: end.len(),
            });
        }

        // NaN compares as unordered and is rejected along with begin > end.
        let wrong: Vec<usize> = (0..begin.len())
            .filter(|&i| {
                matches!(
                    begin[i].partial_cmp(&end[i]),
                    None | Some(Ordering::Greater)
                )
            })
            .collect();
        if !wrong.is_empty() {
            debug!("rejecting interval product: begin > end at axes {wrong:?}");
            return Err(DomainError::OrderingViolation {
                begin: wrong.iter().map(|&i| begin[i]).collect(),
                end: wrong.iter().map(|&i| end[i]).collect(),
                axes: wrong,
            });
        }

        Ok(Self::from_ordered(begin, end))
    }

    /// Builds a box from bounds already known to satisfy `begin <= end`.
    fn from_ordered(begin: Vec<f64>, end: Vec<f64>) -> Self {
        debug_assert_eq!(begin.len(), end.len());
        let (degenerate, nondegenerate): (Vec<usize>, Vec<usize>) =
            (0..begin.len()).partition(|&i| begin[i] == end[i]);
        trace!(
            "interval product of dim {} (truedim {})",
            begin.len(),
            nondegenerate.len()
        );
        Self {
            begin,
            end,
            degenerate,
            nondegenerate,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Derived properties
// ─────────────────────────────────────────────────────────────────────

impl IntervalProd {
    /// Lower bounds, one per axis.
    pub fn begin(&self) -> &[f64] {
        &self.begin
    }

    /// Upper bounds, one per axis.
    pub fn end(&self) -> &[f64] {
        &self.end
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.begin.len()
    }

    /// Number of non-degenerate axes.
    pub fn truedim(&self) -> usize {
        self.nondegenerate.len()
    }

    /// Indices of the axes where `begin == end`, ascending.
    pub fn degenerate_axes(&self) -> &[usize] {
        &self.degenerate
    }

    /// Indices of the axes where `begin < end`, ascending.
    pub fn nondegenerate_axes(&self) -> &[usize] {
        &self.nondegenerate
    }

    /// Same as [`dim`](Self::dim).
    pub fn len(&self) -> usize {
        self.dim()
    }

    /// True for the 0-dimensional box.
    pub fn is_empty(&self) -> bool {
        self.begin.is_empty()
    }

    /// Interval length per axis.
    ///
    /// Degenerate axes have length `0.0`, also when their value is infinite.
    pub fn size(&self) -> Vec<f64> {
        self.begin
            .iter()
            .zip(&self.end)
            .map(|(&b, &e)| if b == e { 0.0 } else { e - b })
            .collect()
    }

    /// The `dim`-dimensional measure, i.e. `measure(Some(dim))`.
    ///
    /// Zero as soon as any axis is degenerate.
    pub fn volume(&self) -> f64 {
        self.measure(Some(self.dim()))
    }

    /// Center of the box.
    ///
    /// Degenerate axes report their single value, so infinite degenerate
    /// bounds do not turn into NaN.
    pub fn midpoint(&self) -> Vec<f64> {
        self.begin
            .iter()
            .zip(&self.end)
            .map(|(&b, &e)| if b == e { b } else { (b + e) / 2.0 })
            .collect()
    }

    /// Canonical member of the box: its midpoint.
    pub fn element(&self) -> Vec<f64> {
        self.midpoint()
    }

    /// Generalized (Hausdorff-style) `dim`-dimensional measure.
    ///
    /// - A single point (`truedim == 0`) measures `0.0` in every dimension.
    /// - `None` measures at `truedim`.
    /// - Below `truedim` the measure is infinite, above it is zero.
    /// - At `truedim` it is the product of the non-degenerate side lengths.
    pub fn measure(&self, dim: Option<usize>) -> f64 {
        let truedim = self.truedim();
        if truedim == 0 {
            return 0.0;
        }

        let dim = dim.unwrap_or(truedim);
        match dim.cmp(&truedim) {
            Ordering::Less => f64::INFINITY,
            Ordering::Greater => 0.0,
            Ordering::Equal => self
                .nondegenerate
                .iter()
                .map(|&i| self.end[i] - self.begin[i])
                .product(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Comparison and containment
// ─────────────────────────────────────────────────────────────────────

impl IntervalProd {
    /// Tests whether `other` is an interval product with the same bounds up
    /// to absolute tolerance `tol`.
    ///
    /// Anything that is not an interval product (or one of its fixed-dimension
    /// variants) compares unequal.
    pub fn equals(&self, other: &dyn Any, tol: f64) -> bool {
        downcast_interval_prod(other).is_some_and(|other| self.approx_equals(other, tol))
    }

    /// Tests whether both boxes have the same bounds up to absolute
    /// tolerance `tol`. `tol = 0.0` requires exact equality.
    pub fn approx_equals(&self, other: &IntervalProd, tol: f64) -> bool {
        let close = |a: &[f64], b: &[f64]| {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|(x, y)| x == y || (x - y).abs() <= tol)
        };
        close(&self.begin, &other.begin) && close(&self.end, &other.end)
    }

    /// Tests whether `point` lies in the box up to `tol` in the max-norm.
    ///
    /// Points of the wrong length or with non-real (NaN) coordinates are
    /// never contained. Boundaries are included.
    pub fn contains(&self, point: impl IntoCoords, tol: f64) -> bool {
        let point = point.into_coords();
        if point.len() != self.dim() || !RealNumbers.contains_all(&point) {
            return false;
        }
        self.dist_unchecked(&point, f64::INFINITY) <= tol
    }

    /// Tests whether `other` is contained, by checking its extreme corners.
    ///
    /// # Errors
    ///
    /// [`DomainError::CapabilityMissing`] if `other` has no extent.
    pub fn contains_set<S>(&self, other: &S, tol: f64) -> Result<bool, DomainError>
    where
        S: Set + ?Sized,
    {
        let Some(extent) = other.as_extent() else {
            debug!("containment test against {other:?} without extent");
            return Err(DomainError::CapabilityMissing {
                set: format!("{other:?}"),
            });
        };
        Ok(self.contains(extent.min(), tol) && self.contains(extent.max(), tol))
    }

    /// Distance in the `ord`-norm between `point` and the box.
    ///
    /// Only coordinates outside their interval contribute; each contributes
    /// its overshoot past the nearest bound.
    ///
    /// # Errors
    ///
    /// [`DomainError::DimensionMismatch`] if `point` has the wrong length.
    pub fn dist(&self, point: impl IntoCoords, ord: f64) -> Result<f64, DomainError> {
        let point = point.into_coords();
        if point.len() != self.dim() {
            debug!(
                "distance rejected: point of length {} for dim {}",
                point.len(),
                self.dim()
            );
            return Err(DomainError::DimensionMismatch {
                what: "'point'",
                expected: self.dim(),
                found: point.len(),
            });
        }
        Ok(self.dist_unchecked(&point, ord))
    }

    fn dist_unchecked(&self, point: &[f64], ord: f64) -> f64 {
        let overshoot: Vec<f64> = point
            .iter()
            .zip(self.begin.iter().zip(&self.end))
            .filter_map(|(&p, (&b, &e))| {
                if p > e {
                    Some(p - e)
                } else if p < b {
                    Some(p - b)
                } else {
                    None
                }
            })
            .collect();

        if overshoot.is_empty() {
            0.0
        } else {
            vector_norm(&overshoot, ord)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transforms
// ─────────────────────────────────────────────────────────────────────

impl IntervalProd {
    /// Returns a copy with the axes at `indices` collapsed to `values`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::LengthMismatch`] if the counts differ.
    /// - [`DomainError::IndexOutOfRange`] if an index is not below `dim`.
    /// - [`DomainError::ValueOutOfBounds`] if a value lies outside its interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use interval_domain::IntervalProd;
    ///
    /// let rbox = IntervalProd::new([-1.0, 0.0, 2.0], [-0.5, 1.0, 3.0]).unwrap();
    /// let collapsed = rbox.collapse([1, 2], [0.0, 2.5]).unwrap();
    /// assert_eq!(collapsed.begin(), &[-1.0, 0.0, 2.5]);
    /// assert_eq!(collapsed.end(), &[-0.5, 0.0, 2.5]);
    /// ```
    pub fn collapse(
        &self,
        indices: impl IntoIndices,
        values: impl IntoCoords,
    ) -> Result<Self, DomainError> {
        let indices = indices.into_indices();
        let values = values.into_coords();
        self.check_collapse(&indices, &values)
            .inspect_err(|err| debug!("collapse rejected: {err}"))?;

        let mut begin = self.begin.clone();
        let mut end = self.end.clone();
        for (&i, &v) in indices.iter().zip(&values) {
            begin[i] = v;
            end[i] = v;
        }
        Self::from_vecs(begin, end)
    }

    fn check_collapse(&self, indices: &[usize], values: &[f64]) -> Result<(), DomainError> {
        if indices.len() != values.len() {
            return Err(DomainError::LengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }

        if let Some(&index) = indices.iter().find(|&&i| i >= self.dim()) {
            return Err(DomainError::IndexOutOfRange {
                index,
                limit: self.dim(),
            });
        }

        let out_of_bounds = |bounds: &[f64], outside: fn(f64, f64) -> bool| {
            let (values, bounds): (Vec<f64>, Vec<f64>) = indices
                .iter()
                .zip(values)
                .filter(|&(&i, &v)| outside(v, bounds[i]))
                .map(|(&i, &v)| (v, bounds[i]))
                .unzip();
            (!values.is_empty()).then_some(DomainError::ValueOutOfBounds { values, bounds })
        };
        match out_of_bounds(self.begin.as_slice(), |v, b| v < b)
            .or_else(|| out_of_bounds(self.end.as_slice(), |v, e| v > e))
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns a copy without the degenerate axes.
    ///
    /// A box whose axes are all degenerate squeezes to the 0-dimensional box.
    pub fn squeeze(&self) -> Self {
        let begin = self.nondegenerate.iter().map(|&i| self.begin[i]).collect();
        let end = self.nondegenerate.iter().map(|&i| self.end[i]).collect();
        Self::from_ordered(begin, end)
    }

    /// Returns a box with the axes of `other` spliced in before axis `index`.
    ///
    /// `other` is another box or coordinates `a`, which are inserted as the
    /// degenerate box `[a, a]`.
    ///
    /// # Errors
    ///
    /// [`DomainError::IndexOutOfRange`] unless `index <= dim`, or any error
    /// from converting `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use interval_domain::IntervalProd;
    ///
    /// let rbox = IntervalProd::new([-1.0, 2.0], [-0.5, 3.0]).unwrap();
    /// let bigger = rbox.insert([-1.0, 0.0], 2).unwrap();
    /// assert_eq!(bigger.begin(), &[-1.0, 2.0, -1.0, 0.0]);
    /// assert!(rbox.insert(0.0, 1).unwrap().squeeze().equals(&rbox, 0.0));
    /// ```
    pub fn insert(&self, other: impl Insertable, index: usize) -> Result<Self, DomainError> {
        if index > self.dim() {
            debug!("insert rejected: index {index} for dim {}", self.dim());
            return Err(DomainError::IndexOutOfRange {
                index,
                limit: self.dim() + 1,
            });
        }
        let other = other.into_interval_prod()?;

        let splice = |ours: &[f64], theirs: &[f64]| {
            let mut out = Vec::with_capacity(ours.len() + theirs.len());
            out.extend_from_slice(&ours[..index]);
            out.extend_from_slice(theirs);
            out.extend_from_slice(&ours[index..]);
            out
        };
        Ok(Self::from_ordered(
            splice(&self.begin, &other.begin),
            splice(&self.end, &other.end),
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Grids
// ─────────────────────────────────────────────────────────────────────

impl IntervalProd {
    /// Corner points of the box, one per row, `2^truedim` rows in total.
    pub fn corners(&self, order: TraversalOrder) -> Array2<f64> {
        self.corners_with(&StandardGrids, order)
    }

    /// Like [`corners`](Self::corners), building the grid with `grids`.
    pub fn corners_with<G: GridConstruction>(
        &self,
        grids: &G,
        order: TraversalOrder,
    ) -> Array2<f64> {
        let per_axis = self
            .begin
            .iter()
            .zip(&self.end)
            .map(|(&b, &e)| if b == e { vec![b] } else { vec![b, e] })
            .collect();
        debug!(
            "enumerating corners of a box with dim {} and truedim {} ({order} order)",
            self.dim(),
            self.truedim()
        );
        grids.make_tensor_grid(per_axis).points(order)
    }

    /// Equispaced sampling of the box with `num_nodes[i]` nodes on axis `i`.
    ///
    /// With `as_midp` the nodes are the midpoints of a uniform partition
    /// (endpoints excluded); otherwise they include both endpoints.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnboundedDomain`] if any bound is infinite.
    /// - [`DomainError::ShapeMismatch`] if `num_nodes` does not have `dim` entries.
    /// - [`DomainError::NonPositiveCount`] if any count is zero.
    /// - [`DomainError::DegenerateOversample`] if a degenerate axis asks for
    ///   more than one node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use interval_domain::IntervalProd;
    ///
    /// let rbox = IntervalProd::new([-1.0, 2.0], [-0.5, 3.0]).unwrap();
    /// let grid = rbox.uniform_sampling([2, 5], false).unwrap();
    /// assert_eq!(grid.coord_vectors()[0].to_vec(), vec![-1.0, -0.5]);
    /// assert_eq!(grid.coord_vectors()[1].to_vec(), vec![2.0, 2.25, 2.5, 2.75, 3.0]);
    /// ```
    pub fn uniform_sampling(
        &self,
        num_nodes: impl IntoCounts,
        as_midp: bool,
    ) -> Result<RegularGrid, DomainError> {
        self.uniform_sampling_with(&StandardGrids, num_nodes, as_midp)
    }

    /// Like [`uniform_sampling`](Self::uniform_sampling), building the grid
    /// with `grids`.
    pub fn uniform_sampling_with<G: GridConstruction>(
        &self,
        grids: &G,
        num_nodes: impl IntoCounts,
        as_midp: bool,
    ) -> Result<G::RegularGrid, DomainError> {
        let num_nodes = num_nodes.into_counts();
        self.check_sampling(&num_nodes)
            .inspect_err(|err| debug!("uniform sampling rejected: {err}"))?;

        let stride = self
            .size()
            .iter()
            .zip(&num_nodes)
            .map(|(&size, &n)| {
                if as_midp {
                    size / n as f64
                } else {
                    size / (n - 1) as f64
                }
            })
            .collect();

        debug!("uniform sampling with nodes {num_nodes:?} (midpoints: {as_midp})");
        Ok(grids.make_regular_grid(num_nodes, self.midpoint(), stride))
    }

    fn check_sampling(&self, num_nodes: &[usize]) -> Result<(), DomainError> {
        if self
            .begin
            .iter()
            .chain(&self.end)
            .any(|x| x.is_infinite())
        {
            return Err(DomainError::UnboundedDomain);
        }

        if num_nodes.len() != self.dim() {
            return Err(DomainError::ShapeMismatch {
                expected: self.dim(),
                found: num_nodes.len(),
            });
        }

        if num_nodes.contains(&0) {
            return Err(DomainError::NonPositiveCount {
                counts: num_nodes.to_vec(),
            });
        }

        let oversampled: Vec<usize> = self
            .degenerate
            .iter()
            .copied()
            .filter(|&i| num_nodes[i] > 1)
            .collect();
        if !oversampled.is_empty() {
            return Err(DomainError::DegenerateOversample { axes: oversampled });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl PartialEq for IntervalProd {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl Set for IntervalProd {
    type Element = [f64];

    fn set_equals(&self, other: &dyn Any) -> bool {
        self.equals(other, 0.0)
    }

    fn contains_element(&self, element: &[f64]) -> bool {
        self.contains(element, 0.0)
    }

    fn as_extent(&self) -> Option<&dyn HasExtent> {
        Some(self)
    }
}

impl HasExtent for IntervalProd {
    fn min(&self) -> Vec<f64> {
        self.begin.clone()
    }

    fn max(&self) -> Vec<f64> {
        self.end.clone()
    }
}

impl Debug for IntervalProd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntervalProd({:?}, {:?})", self.begin, self.end)
    }
}

impl Display for IntervalProd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (b, e)) in self.begin.iter().zip(&self.end).enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{b:?}, {e:?}]")?;
        }
        Ok(())
    }
}

// =============================================================================
// IntervalProd Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IntervalProd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("IntervalProd", 2)?;
        s.serialize_field("begin", &self.begin)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalProd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            begin: Vec<f64>,
            end: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_vecs(raw.begin, raw.end).map_err(serde::de::Error::custom)
    }
}
