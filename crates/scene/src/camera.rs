use foundation::math::{Mat4, Vec3, mat4_mul, mat4_perspective_rh_z0, mat4_translation};

/// Perspective camera that only translates; it always looks down -Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub aspect: f64,
    pub fov_y_deg: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            aspect: 1.0,
            fov_y_deg: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraState {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let mut camera = Self::default();
        camera.set_viewport(width, height);
        camera
    }

    /// Recompute the aspect ratio; a zero height keeps a square aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = if height == 0 {
            1.0
        } else {
            (width as f64 / height as f64).max(1e-6)
        };
    }

    pub fn view(&self) -> Mat4 {
        mat4_translation(self.position * -1.0)
    }

    pub fn projection(&self) -> Mat4 {
        mat4_perspective_rh_z0(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        mat4_mul(self.projection(), self.view())
    }
}
