//! Maps page scroll position onto camera and globe state.
//!
//! Progress runs over the first 70% of the scrollable range. Below
//! [`FADE_START`] the camera approaches and the globe turns with the page;
//! from there the globe fades out and is hidden past [`FADE_END`].

use std::f64::consts::TAU;

use foundation::math::{clamp01, lerp};

use crate::camera::CameraState;
use crate::globe::{GlobeGroup, GlobePart};

/// Fraction of the scrollable range that maps to progress 0..1.
pub const PROGRESS_SPAN: f64 = 0.7;
pub const FADE_START: f64 = 0.3;
pub const FADE_END: f64 = 0.7;

const CAMERA_REST_Z: f64 = 8.0;
const CAMERA_APPROACH_Z: f64 = 3.0;
const CAMERA_RISE_Y: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    pub fn progress(&self) -> f64 {
        progress(self.offset, self.document_height, self.viewport_height)
    }

    pub fn overlay_revealed(&self) -> bool {
        overlay_revealed(self.offset, self.viewport_height)
    }
}

/// Scroll progress in `[0, 1]`. Degenerate ranges and non-finite input give 0.
pub fn progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = (document_height - viewport_height) * PROGRESS_SPAN;
    if !offset.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    clamp01(offset / range)
}

/// The decorative overlay appears once the page has scrolled half a viewport.
pub fn overlay_revealed(offset: f64, viewport_height: f64) -> bool {
    offset.is_finite() && viewport_height.is_finite() && offset > viewport_height * 0.5
}

/// Group opacity for a progress value in the fade phase.
pub fn fade_opacity(p: f64) -> f64 {
    clamp01(lerp(1.0, 0.0, (p - FADE_START) / (FADE_END - FADE_START)))
}

/// Drive the scene from progress `p`. Returns `false` without touching
/// anything until both the globe and the camera exist.
pub fn apply_progress(
    p: f64,
    globe: Option<&mut GlobeGroup>,
    camera: Option<&mut CameraState>,
) -> bool {
    let (Some(globe), Some(camera)) = (globe, camera) else {
        return false;
    };
    let p = clamp01(p);

    if p < FADE_START {
        globe.visible = true;
        camera.position.z = CAMERA_REST_Z - CAMERA_APPROACH_Z * p;
        camera.position.y = CAMERA_RISE_Y * p;
        globe.transform.rotation.y = TAU * p;
        for part in GlobePart::ALL {
            globe
                .part_mut(part)
                .material
                .set_opacity(part.opacity_factor());
        }
    } else {
        let opacity = fade_opacity(p);
        for part in GlobePart::ALL {
            let material = &mut globe.part_mut(part).material;
            material.enable_transparency();
            material.set_opacity(opacity * part.opacity_factor());
        }
        globe.visible = p <= FADE_END;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{ScrollMetrics, apply_progress, overlay_revealed, progress};
    use crate::camera::CameraState;
    use crate::globe::{GlobeGroup, GlobePart};
    use crate::prefabs::build_globe;
    use assets::{Texture, TextureSet};
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    fn globe() -> GlobeGroup {
        let t = |name: &str| Texture::solid(name, 4, 4, [200, 200, 200, 255]);
        build_globe(&TextureSet {
            color: t("color"),
            bump: t("bump"),
            specular: t("specular"),
        })
    }

    fn opacities(g: &GlobeGroup) -> [f64; 3] {
        GlobePart::ALL.map(|p| g.part(p).material.opacity())
    }

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn progress_is_bounded_and_monotonic() {
        let (doc, vh) = (5000.0, 1000.0);
        let mut last = 0.0;
        for step in 0..=120 {
            let p = progress(step as f64 * 50.0, doc, vh);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(progress(2800.0, 5000.0, 1000.0), 1.0);
        assert_eq!(progress(4000.0, 5000.0, 1000.0), 1.0);
        assert!((progress(1400.0, 5000.0, 1000.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn degenerate_range_yields_zero() {
        assert_eq!(progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(progress(100.0, 600.0, 800.0), 0.0);
        assert_eq!(progress(f64::NAN, 5000.0, 800.0), 0.0);
        assert_eq!(progress(f64::INFINITY, 5000.0, 800.0), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }

    #[test]
    fn start_of_page_is_resting_pose() {
        let mut g = globe();
        let mut camera = CameraState::default();
        assert!(apply_progress(0.0, Some(&mut g), Some(&mut camera)));

        assert!(g.visible);
        assert_eq!(camera.position.z, 8.0);
        assert_eq!(camera.position.y, 0.0);
        assert_eq!(g.transform.rotation.y, 0.0);
    }

    #[test]
    fn approach_moves_camera_and_turns_globe() {
        let mut g = globe();
        let mut camera = CameraState::default();
        apply_progress(0.2, Some(&mut g), Some(&mut camera));

        assert!((camera.position.z - 7.4).abs() < EPS);
        assert!((camera.position.y - 0.4).abs() < EPS);
        assert!((g.transform.rotation.y - std::f64::consts::TAU * 0.2).abs() < EPS);
    }

    #[test]
    fn fade_start_keeps_full_opacity_factors() {
        let mut g = globe();
        let mut camera = CameraState::default();
        apply_progress(0.3, Some(&mut g), Some(&mut camera));

        assert_close(opacities(&g), [1.0, 0.2, 0.8]);
        assert!(GlobePart::ALL.iter().all(|p| g.part(*p).material.is_transparent()));
        assert!(g.visible);
    }

    #[test]
    fn mid_fade_halves_opacity() {
        let mut g = globe();
        let mut camera = CameraState::default();
        apply_progress(0.5, Some(&mut g), Some(&mut camera));

        assert_close(opacities(&g), [0.5, 0.1, 0.4]);
        assert!(g.visible);
    }

    #[test]
    fn past_fade_end_hides_globe() {
        let mut g = globe();
        let mut camera = CameraState::default();
        apply_progress(0.7, Some(&mut g), Some(&mut camera));
        assert!(g.visible);

        apply_progress(0.8, Some(&mut g), Some(&mut camera));
        assert!(!g.visible);
        assert_close(opacities(&g), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn transparency_survives_scrolling_back() {
        let mut g = globe();
        let mut camera = CameraState::default();
        apply_progress(0.9, Some(&mut g), Some(&mut camera));
        apply_progress(0.1, Some(&mut g), Some(&mut camera));

        assert!(g.visible);
        assert!(g.planet.material.is_transparent());
        assert_close(opacities(&g), [1.0, 0.2, 0.8]);
    }

    #[test]
    fn same_progress_is_idempotent() {
        for p in [0.0, 0.15, 0.3, 0.55, 0.95] {
            let mut g = globe();
            let mut camera = CameraState::default();
            apply_progress(p, Some(&mut g), Some(&mut camera));
            let (once_globe, once_camera) = (g.clone(), camera);
            apply_progress(p, Some(&mut g), Some(&mut camera));
            assert_eq!(g, once_globe);
            assert_eq!(camera, once_camera);
        }
    }

    #[test]
    fn missing_globe_or_camera_is_noop() {
        let mut camera = CameraState::default();
        assert!(!apply_progress(0.5, None, Some(&mut camera)));
        assert_eq!(camera, CameraState::default());

        let mut g = globe();
        let before = g.clone();
        assert!(!apply_progress(0.5, Some(&mut g), None));
        assert_eq!(g, before);
    }

    #[test]
    fn overlay_reveals_after_half_viewport() {
        assert!(!overlay_revealed(0.0, 900.0));
        assert!(!overlay_revealed(450.0, 900.0));
        assert!(overlay_revealed(451.0, 900.0));
        assert!(ScrollMetrics::new(1000.0, 4000.0, 900.0).overlay_revealed());
    }
}
