use crate::{c64, AngleUnit, Mat, MatError, TOLERANCE};
use core::fmt;
use core::str::FromStr;

/// Polar view of a complex number, displayed as `r∠θ`.
///
/// Created by [`c64::polar`]. The phase is displayed in the requested [`AngleUnit`], with a `°`
/// suffix for degrees. The precision flag applies to both the magnitude and the phase.
///
/// ```
/// use cmat::{c64, AngleUnit};
///
/// let z = c64::new(0.0, 2.0);
/// assert!(format!("{:.1}", z.polar(AngleUnit::Degrees)) == "2.0∠90.0°");
/// assert!(format!("{:.3}", z.polar(AngleUnit::Radians)) == "2.000∠1.571");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polar {
    pub(crate) value: c64,
    pub(crate) unit: AngleUnit,
}

impl Polar {
    /// Returns the magnitude of the complex number.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    /// Returns the phase of the complex number, expressed in the requested unit.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.unit.from_radians(self.value.arg())
    }
}

fn write_f64(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{x:.precision$}"),
        None => write!(f, "{x}"),
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_f64(f, self.magnitude())?;
        f.write_str("∠")?;
        write_f64(f, self.phase())?;
        if self.unit == AngleUnit::Degrees {
            f.write_str("°")?;
        }
        Ok(())
    }
}

impl fmt::Display for c64 {
    /// Writes `self` in cartesian form, `a + bi` or `a - bi`. The imaginary part is omitted when
    /// it is zero within [`TOLERANCE`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_f64(f, self.re)?;
        if self.im.abs() < TOLERANCE {
            return Ok(());
        }
        f.write_str(if self.im < 0.0 { " - " } else { " + " })?;
        write_f64(f, self.im.abs())?;
        f.write_str("i")
    }
}

fn parse_error(input: &str) -> MatError {
    MatError::Parse {
        input: input.to_owned(),
    }
}

/// Parses the coefficient of the imaginary unit in a term such as `2i`, `i2`, `-i` or `+3.5i`.
fn parse_imaginary(term: &str) -> Option<f64> {
    let (sign, body) = match term.as_bytes().first()? {
        b'+' => (1.0, &term[1..]),
        b'-' => (-1.0, &term[1..]),
        _ => (1.0, term),
    };
    let coefficient = body
        .strip_prefix('i')
        .or_else(|| body.strip_suffix('i'))?;
    if coefficient.is_empty() {
        return Some(sign);
    }
    if coefficient.starts_with(['+', '-']) {
        return None;
    }
    coefficient.parse::<f64>().ok().map(|x| sign * x)
}

impl FromStr for c64 {
    type Err = MatError;

    /// Parses a complex number written as `a`, `bi`, `ib`, `a + bi`, `a - bi`, `a + ib`, `i`,
    /// `-i`, and so on. Whitespace is ignored, and the imaginary unit may be written `i` or `I`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if s.is_empty() || s.matches('i').count() > 1 {
            return Err(parse_error(input));
        }

        if !s.contains('i') {
            let re = s.parse::<f64>().map_err(|_| parse_error(input))?;
            return Ok(c64::new(re, 0.0));
        }

        // a sign that is neither leading nor part of an exponent starts a new term
        let bytes = s.as_bytes();
        let splits: Vec<usize> = (1..bytes.len())
            .filter(|&k| matches!(bytes[k], b'+' | b'-') && bytes[k - 1] != b'e')
            .collect();

        let (re, im) = match *splits.as_slice() {
            [] => (0.0, parse_imaginary(&s)),
            [k] => {
                let (first, second) = s.split_at(k);
                let (real, imaginary) = if second.contains('i') {
                    (first, second)
                } else {
                    (second, first)
                };
                match real.parse::<f64>() {
                    Ok(re) => (re, parse_imaginary(imaginary)),
                    Err(_) => return Err(parse_error(input)),
                }
            }
            _ => return Err(parse_error(input)),
        };

        match im {
            Some(im) => Ok(c64::new(re, im)),
            None => Err(parse_error(input)),
        }
    }
}

impl fmt::Display for Mat {
    /// Writes `self` row by row, as `[a, b; c, d]`. The output can be parsed back with
    /// [`str::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.nrows() {
            if i > 0 {
                f.write_str("; ")?;
            }
            for j in 0..self.ncols() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.read(i, j), f)?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Mat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugRow<'a>(&'a Mat, usize);

        impl fmt::Debug for DebugRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries((0..self.0.ncols()).map(|j| self.0.read(self.1, j)))
                    .finish()
            }
        }

        writeln!(f, "[")?;
        for i in 0..self.nrows() {
            fmt::Debug::fmt(&DebugRow(self, i), f)?;
            f.write_str(",\n")?;
        }
        write!(f, "]")
    }
}

impl FromStr for Mat {
    type Err = MatError;

    /// Parses a matrix written row by row, with rows separated by `;` and elements separated
    /// by `,`, such as `[1, 2 + i; -i, 4]`. Brackets and parentheses are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s: String = input
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '(' | ')'))
            .collect();

        let rows = s
            .split(';')
            .map(|row| row.split(',').map(c64::from_str).collect())
            .collect::<Result<Vec<Vec<c64>>, MatError>>()?;

        Mat::from_rows(&rows).map_err(|_| parse_error(input))
    }
}
