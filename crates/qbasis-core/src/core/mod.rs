//! # Core Module
//!
//! The building blocks of the library: value types for shells, atoms and
//! basis sets, the dialect codecs that turn them into text and back, and the
//! shared error type.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Shell labels, contractions, per-atom bases and basis sets
//! - **File I/O** ([`io`]) - Dialect strategies, the shared line parser and file helpers
//! - **Reference Data** ([`utils`]) - Element symbol and name tables
//! - **Errors** ([`error`]) - The single error type returned by every fallible operation

pub mod error;
pub mod io;
pub mod models;
pub mod utils;
