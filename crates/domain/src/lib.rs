//! # Domain
//!
//! Pure models for the benchmark programs. Nothing here touches I/O.
//!
//! - [`model::frequency`]: frequency table and running maximum
//! - [`model::matrix`]: dense row-major matrix and product
//! - [`model::sudoku`]: sudoku grid and exact-cover solver
//! - [`pattern`]: compiled line pattern
//! - [`random`]: the 48-bit linear congruential generator used for input generation
//! - [`config`]: resolved per-program configuration

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;
pub mod pattern;
pub mod random;
