//! # Core Models Module
//!
//! Value types describing a Gaussian basis set.
//!
//! ## Key Components
//!
//! - [`angular`] - Angular momentum letters and shell labels such as `S`, `D` or the shared `SP`
//! - [`contraction`] - One shell: exponents and contraction coefficients stored as a matrix
//! - [`basis`] - The ordered shells belonging to one atom
//! - [`basis_set`] - Atom label to basis mapping that preserves insertion order
//!
//! Every type validates on construction and on mutation, so a value that
//! exists is always printable in every dialect.

pub mod angular;
pub mod basis;
pub mod basis_set;
pub mod contraction;
