use foundation::math::{Mat4, Vec3, mat4_from_translation_euler};

/// Position plus XYZ-order Euler rotation (radians). No scale: every mesh in
/// the hero scene is authored at its final size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    pub fn translate(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        mat4_from_translation_euler(self.position, self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
