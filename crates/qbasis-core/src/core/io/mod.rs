//! Provides reading and writing of basis sets in program-specific text layouts.
//!
//! Each supported layout is a [`dialect::Dialect`] backed by a
//! [`dialect::BasisDialect`] strategy. The strategies share one line-oriented
//! shell parser and differ only in headers, separators and row numbering.

pub mod dialect;
pub mod gamess;
pub mod gaussian94;
pub mod parser;
pub mod traits;
