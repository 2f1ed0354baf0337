//! Error type shared by every fallible operation of the crate.

/// Errors that can occur in matrix and complex number operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatError {
    /// The operands have incompatible shapes for the requested operation.
    ShapeMismatch {
        /// Shape `(nrows, ncols)` of the left operand.
        lhs: (usize, usize),
        /// Shape `(nrows, ncols)` of the right operand.
        rhs: (usize, usize),
    },
    /// The operation requires a square matrix.
    NotSquare {
        /// Number of rows of the offending matrix.
        nrows: usize,
        /// Number of columns of the offending matrix.
        ncols: usize,
    },
    /// The matrix has a zero determinant and cannot be inverted.
    Singular,
    /// The operation is not supported for the given input.
    Unsupported(&'static str),
    /// A row or column index is out of range.
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The number of rows or columns that can be indexed.
        len: usize,
    },
    /// The matrix dimensions are not valid for the requested operation.
    InvalidDimensions {
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },
    /// A complex number was divided by zero.
    DivisionByZero,
    /// The matrix cannot be written as `P·D·P⁻¹` with a diagonal `D`.
    NotDiagonalizable,
    /// The denominator of a matrix division has no inverse.
    DivisionNotPossible,
    /// A complex number or matrix could not be parsed.
    Parse {
        /// The text that failed to parse.
        input: String,
    },
}

impl core::fmt::Display for MatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "incompatible shapes: {}x{} and {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatError::NotSquare { nrows, ncols } => {
                write!(f, "expected a square matrix, found a {nrows}x{ncols} matrix")
            }
            MatError::Singular => f.write_str("the matrix is singular (its determinant is zero)"),
            MatError::Unsupported(what) => write!(f, "unsupported operation: {what}"),
            MatError::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of range (should be below {len})")
            }
            MatError::InvalidDimensions { nrows, ncols } => {
                write!(f, "invalid matrix dimensions: {nrows}x{ncols}")
            }
            MatError::DivisionByZero => f.write_str("division by zero"),
            MatError::NotDiagonalizable => f.write_str("the matrix cannot be diagonalized"),
            MatError::DivisionNotPossible => f.write_str(
                "the denominator has no inverse, division is not possible",
            ),
            MatError::Parse { input } => write!(f, "cannot parse `{input}`"),
        }
    }
}

impl std::error::Error for MatError {}

#[inline]
pub(crate) fn check_square(nrows: usize, ncols: usize) -> Result<(), MatError> {
    if nrows == ncols {
        Ok(())
    } else {
        Err(MatError::NotSquare { nrows, ncols })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn test_display() {
        let err = MatError::ShapeMismatch {
            lhs: (2, 3),
            rhs: (3, 3),
        };
        assert!(err.to_string() == "incompatible shapes: 2x3 and 3x3");

        let err = MatError::NotSquare { nrows: 2, ncols: 1 };
        assert!(err.to_string() == "expected a square matrix, found a 2x1 matrix");

        let err = MatError::Parse {
            input: "1 + ii".into(),
        };
        assert!(err.to_string() == "cannot parse `1 + ii`");
    }

    #[test]
    fn test_check_square() {
        assert!(check_square(3, 3) == Ok(()));
        assert!(check_square(3, 2) == Err(MatError::NotSquare { nrows: 3, ncols: 2 }));
    }
}
