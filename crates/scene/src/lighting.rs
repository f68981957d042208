use foundation::math::Vec3;

use crate::components::Rgb;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

/// Parallel light arriving from `position` towards the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector from the surface towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.normalize()
    }
}

/// Sky/ground gradient keyed on the surface normal's Y component.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HemisphereLight {
    pub sky: Rgb,
    pub ground: Rgb,
    pub intensity: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub hemisphere: HemisphereLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::WHITE,
                intensity: 2.0,
            },
            sun: DirectionalLight {
                color: Rgb::WHITE,
                intensity: 1.2,
                position: Vec3::new(3.0, 10.0, 5.0),
            },
            hemisphere: HemisphereLight {
                sky: Rgb::from_hex(0x4488bb),
                ground: Rgb::from_hex(0xcc8844),
                intensity: 0.3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lighting;

    #[test]
    fn sun_direction_is_unit() {
        let lighting = Lighting::default();
        let d = lighting.sun.direction();
        assert!((d.length() - 1.0).abs() < 1e-12);
        assert!(d.y > d.x && d.y > d.z);
    }
}
