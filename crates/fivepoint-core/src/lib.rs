//! Core math and geometry primitives for the `fivepoint` workspace.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Vec9`, ...),
//! - small epipolar-geometry helpers (`skew_symmetric`, `epipolar_residual`),
//! - deterministic synthetic two-view scenes for tests and examples.
//!
//! The solver itself lives in `fivepoint-solver`.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Deterministic synthetic two-view data generation.
pub mod synthetic;
/// Shared fixture types for workspace test suites.
pub mod test_utils;

pub use math::*;
