//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`records`]: delimiter-separated record input
//! - [`report`]: frequency report output
//! - [`lines`]: line-at-a-time output for the matcher and generator
//!
//! These ports keep the use cases independent of stdin/stdout.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod lines;
pub mod records;
pub mod report;
