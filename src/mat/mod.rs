//! Owned dense complex matrices.
//!
//! [`Mat`] stores its elements in column-major order and is always at least `1×1`. Elements are
//! addressed with zero-based indices through [`Mat::read`], [`Mat::write`] and the
//! `m[(row, col)]` indexing syntax, while [`Mat::element`] accepts the one-based row and column
//! numbers used in mathematical notation.
//!
//! Matrices are most conveniently built with the [`mat!`](crate::mat!) macro:
//! ```
//! use cmat::{c64, mat};
//!
//! let m = mat![[1.0, (0.0, 1.0)], [(0.0, -1.0), 2.0]];
//! assert!(m[(0, 1)] == c64::i());
//! assert!(m.element(2, 1)? == -c64::i());
//! # Ok::<(), cmat::MatError>(())
//! ```

mod convert;
mod mat_index;
mod matown;

pub use matown::Mat;
