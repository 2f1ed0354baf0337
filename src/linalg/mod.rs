//! Linear algebra module.
//!
//! Contains the algebraic operations on [`Mat`](crate::Mat): element-wise arithmetic and matrix
//! products, determinants and inverses, structural classification, the closed-form eigen
//! decomposition of `2×2` matrices, matrix powers and roots, and the reduction of integer
//! matrices to lowest terms.
//!
//! Every routine is implemented as an inherent method of `Mat`, so the submodules mostly serve
//! to group related methods and their tests. The submodules that define types of their own are
//! public.
//!
//! # Cost
//! Determinants are computed by cofactor expansion, which is exact for matrices with small
//! integer entries but takes factorial time. This is intended for the small matrices this crate
//! targets; a warning is logged on the `cmat_perf` target when a large expansion is started.

pub mod evd;
pub mod props;

mod det;
mod mat_ops;
mod pow;
mod reduce;
