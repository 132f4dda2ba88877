use thiserror::Error;

/// Errors raised when constructing or transforming interval products.
///
/// All variants are caller errors: the call fails before any new value is
/// built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("length of {what} ({found}) does not match the expected dimension ({expected})")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("entries of 'begin' exceed those of 'end' at axes {axes:?} ({begin:?} > {end:?})")]
    OrderingViolation {
        axes: Vec<usize>,
        begin: Vec<f64>,
        end: Vec<f64>,
    },

    #[error("index {index} out of range (valid: 0..{limit})")]
    IndexOutOfRange { index: usize, limit: usize },

    #[error("lengths of 'indices' ({indices}) and 'values' ({values}) do not match")]
    LengthMismatch { indices: usize, values: usize },

    #[error("values {values:?} not within interval boundaries {bounds:?}")]
    ValueOutOfBounds { values: Vec<f64>, bounds: Vec<f64> },

    #[error("cannot test containment of {set} without 'min' and 'max'")]
    CapabilityMissing { set: String },

    #[error("invalid option '{option}' for {what}")]
    InvalidOption { what: &'static str, option: String },

    #[error("uniform sampling undefined for infinite domains")]
    UnboundedDomain,

    #[error("'num_nodes' has length {found}, expected {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("all entries of 'num_nodes' must be positive (got {counts:?})")]
    NonPositiveCount { counts: Vec<usize> },

    #[error("degenerate axes {axes:?} cannot be sampled with more than one node")]
    DegenerateOversample { axes: Vec<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_display() {
        let e = DomainError::DimensionMismatch {
            what: "'end'",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            e.to_string(),
            "length of 'end' (2) does not match the expected dimension (3)"
        );
    }

    #[test]
    fn ordering_violation_display() {
        let e = DomainError::OrderingViolation {
            axes: vec![1],
            begin: vec![2.0],
            end: vec![1.0],
        };
        assert_eq!(
            e.to_string(),
            "entries of 'begin' exceed those of 'end' at axes [1] ([2.0] > [1.0])"
        );
    }

    #[test]
    fn value_out_of_bounds_display() {
        let e = DomainError::ValueOutOfBounds {
            values: vec![3.5],
            bounds: vec![3.0],
        };
        assert_eq!(
            e.to_string(),
            "values [3.5] not within interval boundaries [3.0]"
        );
    }

    #[test]
    fn invalid_option_display() {
        let e = DomainError::InvalidOption {
            what: "traversal order",
            option: "K".to_string(),
        };
        assert!(e.to_string().contains("'K'"));
    }

    #[test]
    fn error_equality() {
        assert_eq!(DomainError::UnboundedDomain, DomainError::UnboundedDomain);
        assert_ne!(
            DomainError::UnboundedDomain,
            DomainError::ShapeMismatch {
                expected: 1,
                found: 2
            }
        );
    }
}
