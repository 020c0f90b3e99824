//! # qbasis
//!
//! A data model and text codec for Gaussian-type basis sets as used by quantum
//! chemistry programs.
//!
//! ## Layout
//!
//! Everything lives under [`core`](crate::core):
//!
//! - **[`models`](crate::core::models)** holds the value types. A [`Contraction`] is one shell
//!   of primitive Gaussians, a [`Basis`] is the ordered shells of one atom and a
//!   [`BasisSet`] maps atom labels to bases in insertion order.
//!
//! - **[`io`](crate::core::io)** holds the dialects. Each [`Dialect`] knows how to print
//!   and parse the textual layout a program expects (Gaussian94 `.gbs` files
//!   and GAMESS `$DATA` groups), and [`BasisSetFile`] reads and writes whole
//!   documents on disk.
//!
//! ## Example
//!
//! ```
//! use qbasis::{Basis, BasisSet, Contraction};
//!
//! let mut set = BasisSet::default();
//! let s = Contraction::new("S", &[1.0, 2.0], &[0.5, 0.5])?;
//! set.set("H", Basis::new("H", vec![s]))?;
//!
//! let text = set.print("gamess")?;
//! assert_eq!(BasisSet::read(&text, "gamess")?, set);
//! # Ok::<(), qbasis::BasisError>(())
//! ```

pub mod core;

pub use crate::core::error::{BasisError, ParseErrorKind};
pub use crate::core::io::dialect::{BasisDialect, Dialect};
pub use crate::core::io::traits::BasisSetFile;
pub use crate::core::models::angular::{AngularMomentum, ShellLabel};
pub use crate::core::models::basis::Basis;
pub use crate::core::models::basis_set::{AngularType, BasisSet};
pub use crate::core::models::contraction::{ColumnLayout, Contraction, Primitive};
