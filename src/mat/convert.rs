use super::Mat;
use crate::{c64, AngleUnit, MatError};

fn grid_shape<R: AsRef<[f64]>>(grid: &[R]) -> Result<(usize, usize), MatError> {
    let nrows = grid.len();
    let ncols = grid.first().map(|row| row.as_ref().len()).unwrap_or(0);
    if nrows == 0 || ncols == 0 || grid.iter().any(|row| row.as_ref().len() != ncols) {
        return Err(MatError::InvalidDimensions { nrows, ncols });
    }
    Ok((nrows, ncols))
}

impl Mat {
    fn to_grid(&self, f: impl Fn(c64) -> f64) -> Vec<Vec<f64>> {
        (0..self.nrows())
            .map(|i| (0..self.ncols()).map(|j| f(self.read(i, j))).collect())
            .collect()
    }

    /// Returns the real parts of the elements, row by row.
    pub fn real_parts(&self) -> Vec<Vec<f64>> {
        self.to_grid(|z| z.re)
    }

    /// Returns the imaginary parts of the elements, row by row.
    pub fn imag_parts(&self) -> Vec<Vec<f64>> {
        self.to_grid(|z| z.im)
    }

    /// Builds a real matrix from a grid of `f64` given row by row.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if the grid is empty or ragged.
    pub fn from_real<R: AsRef<[f64]>>(re: &[R]) -> Result<Self, MatError> {
        let (nrows, ncols) = grid_shape(re)?;
        Ok(Self::from_fn(nrows, ncols, |i, j| {
            c64::new(re[i].as_ref()[j], 0.0)
        }))
    }

    /// Builds a purely imaginary matrix from a grid of `f64` given row by row.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if the grid is empty or ragged.
    pub fn from_imag<R: AsRef<[f64]>>(im: &[R]) -> Result<Self, MatError> {
        let (nrows, ncols) = grid_shape(im)?;
        Ok(Self::from_fn(nrows, ncols, |i, j| {
            c64::new(0.0, im[i].as_ref()[j])
        }))
    }

    /// Merges a grid of real parts and a grid of imaginary parts into a complex matrix.
    ///
    /// # Errors
    /// - [`MatError::InvalidDimensions`] if either grid is empty or ragged.
    /// - [`MatError::ShapeMismatch`] if the grids have different shapes.
    pub fn from_parts<R: AsRef<[f64]>, I: AsRef<[f64]>>(
        re: &[R],
        im: &[I],
    ) -> Result<Self, MatError> {
        let re_shape = grid_shape(re)?;
        let im_shape = grid_shape(im)?;
        if re_shape != im_shape {
            return Err(MatError::ShapeMismatch {
                lhs: re_shape,
                rhs: im_shape,
            });
        }

        let (nrows, ncols) = re_shape;
        Ok(Self::from_fn(nrows, ncols, |i, j| {
            c64::new(re[i].as_ref()[j], im[i].as_ref()[j])
        }))
    }

    /// Returns the `2×2` matrix `[[cos θ, sin θ], [−sin θ, cos θ]]`, with `θ = angle` expressed in
    /// `unit`.
    pub fn rotation(angle: f64, unit: AngleUnit) -> Self {
        let (sin, cos) = unit.to_radians(angle).sin_cos();
        crate::mat![[cos, sin], [-sin, cos]]
    }
}
