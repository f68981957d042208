use foundation::math::{Mat4, mat4_mul};

use crate::components::{Geometry, Material, Transform};

/// The three meshes of the hero globe, in draw order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GlobePart {
    Planet,
    Atmosphere,
    Ring,
}

impl GlobePart {
    pub const ALL: [GlobePart; 3] = [GlobePart::Planet, GlobePart::Atmosphere, GlobePart::Ring];

    pub fn as_str(self) -> &'static str {
        match self {
            GlobePart::Planet => "planet",
            GlobePart::Atmosphere => "atmosphere",
            GlobePart::Ring => "ring",
        }
    }

    /// Share of the group opacity each part shows; also its resting opacity.
    pub fn opacity_factor(self) -> f64 {
        match self {
            GlobePart::Planet => 1.0,
            GlobePart::Atmosphere => 0.2,
            GlobePart::Ring => 0.8,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneObject {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Composite globe, rotated and shown/hidden as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeGroup {
    pub transform: Transform,
    pub visible: bool,
    pub planet: SceneObject,
    pub atmosphere: SceneObject,
    pub ring: SceneObject,
}

impl GlobeGroup {
    pub fn part(&self, part: GlobePart) -> &SceneObject {
        match part {
            GlobePart::Planet => &self.planet,
            GlobePart::Atmosphere => &self.atmosphere,
            GlobePart::Ring => &self.ring,
        }
    }

    pub fn part_mut(&mut self, part: GlobePart) -> &mut SceneObject {
        match part {
            GlobePart::Planet => &mut self.planet,
            GlobePart::Atmosphere => &mut self.atmosphere,
            GlobePart::Ring => &mut self.ring,
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = (GlobePart, &SceneObject)> {
        GlobePart::ALL.into_iter().map(|p| (p, self.part(p)))
    }

    /// Incremental spin about the group's vertical axis.
    pub fn spin(&mut self, step_rad: f64) {
        self.transform.rotation.y += step_rad;
    }

    pub fn world_matrix(&self, part: GlobePart) -> Mat4 {
        mat4_mul(self.transform.matrix(), self.part(part).transform.matrix())
    }
}
