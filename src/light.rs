use crate::vector::{normalize, Vec3};

/// A directional light. `direction` is the way the light travels, from the
/// light into the scene, and is always unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    direction: Vec3,
    color: Vec3,
}

impl Light {
    /// Normalizes `direction`, which must be non-zero.
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction: normalize(&direction),
            color,
        }
    }

    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    pub fn color(&self) -> &Vec3 {
        &self.color
    }
}
