use crate::globe::GlobeGroup;
use crate::lighting::Lighting;

/// Root scene of one mount session: constant lighting plus at most one globe.
#[derive(Debug, Default)]
pub struct HeroScene {
    globe: Option<GlobeGroup>,
    pub lighting: Lighting,
}

impl HeroScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn globe(&self) -> Option<&GlobeGroup> {
        self.globe.as_ref()
    }

    pub fn globe_mut(&mut self) -> Option<&mut GlobeGroup> {
        self.globe.as_mut()
    }

    pub fn has_globe(&self) -> bool {
        self.globe.is_some()
    }

    /// Returns `false` and keeps the existing globe if one was already built.
    pub fn insert_globe(&mut self, globe: GlobeGroup) -> bool {
        if self.globe.is_some() {
            return false;
        }
        self.globe = Some(globe);
        true
    }

    /// Per-frame idle spin; nothing to do before the globe exists.
    pub fn rotate_globe(&mut self, step_rad: f64) {
        if let Some(globe) = self.globe.as_mut() {
            globe.spin(step_rad);
        }
    }
}
