//! Utilities and common types for testing the solvers.
//!
//! This module is public to allow use across workspace test suites, but is
//! not intended for production use. It provides the fixture types used by
//! JSON-driven scenario tests.

use crate::math::{Mat3, Pt3, Real, Vec3};
use nalgebra::Rotation3;
use serde::Deserialize;

/// A synthetic two-view scene stored as test fixture data.
///
/// The relative motion is given as XYZ Euler angles and a translation; the
/// scene content is a list of world points visible in both views.
#[derive(Debug, Clone, Deserialize)]
pub struct TwoViewCase {
    /// Rotation of the right camera as XYZ Euler angles, radians.
    pub rotation_euler: [Real; 3],
    /// Translation of the right camera.
    pub translation: [Real; 3],
    /// World points, each `[x, y, z]` with positive depth in both views.
    pub world_points: Vec<[Real; 3]>,
}

impl TwoViewCase {
    /// Rotation matrix of the right camera.
    pub fn rotation(&self) -> Mat3 {
        let [r, p, y] = self.rotation_euler;
        *Rotation3::from_euler_angles(r, p, y).matrix()
    }

    /// Translation vector of the right camera.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.translation[0], self.translation[1], self.translation[2])
    }

    /// World points as [`Pt3`] values.
    pub fn world(&self) -> Vec<Pt3> {
        self.world_points
            .iter()
            .map(|p| Pt3::new(p[0], p[1], p[2]))
            .collect()
    }
}
