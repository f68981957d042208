use std::f64::consts::FRAC_PI_2;

use assets::TextureSet;
use foundation::math::Vec3;

use crate::components::{FaceSide, Geometry, Material, Rgb, SurfaceMaps, Transform};
use crate::globe::{GlobeGroup, GlobePart, SceneObject};

/// Horizontal offset that frames the globe left of the hero copy.
pub const GLOBE_OFFSET_X: f64 = -2.0;

pub const PLANET_RADIUS: f64 = 2.5;
pub const ATMOSPHERE_RADIUS: f64 = 2.55;
pub const RING_RADIUS: f64 = 2.7;
pub const RING_TUBE: f64 = 0.05;

/// Build the planet, atmosphere shell and ring for a loaded texture set.
///
/// Pixel data goes to the render backend; only the bump map's resolution is
/// recorded on the planet material.
pub fn build_globe(textures: &TextureSet) -> GlobeGroup {
    let bump = &textures.bump;
    let maps = SurfaceMaps {
        bump_scale: 0.025,
        bump_texel: [
            1.0 / bump.width.max(1) as f32,
            1.0 / bump.height.max(1) as f32,
        ],
    };

    let planet = SceneObject::new(
        Geometry::sphere(PLANET_RADIUS, 64, 64),
        Material::phong(Rgb::WHITE, Rgb::from_hex(0x333333), 10.0).with_maps(maps),
    );

    let atmosphere = SceneObject::new(
        Geometry::sphere(ATMOSPHERE_RADIUS, 64, 64),
        Material::phong(Rgb::from_hex(0x3399ff), Rgb::from_hex(0x111111), 30.0)
            .with_side(FaceSide::Back)
            .translucent(GlobePart::Atmosphere.opacity_factor()),
    );

    let ring = SceneObject::new(
        Geometry::torus(RING_RADIUS, RING_TUBE, 16, 100),
        Material::basic(Rgb::from_hex(0x3a5169)).translucent(GlobePart::Ring.opacity_factor()),
    )
    .with_transform(Transform::identity().rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)));

    GlobeGroup {
        transform: Transform::translate(Vec3::new(GLOBE_OFFSET_X, 0.0, 0.0)),
        visible: true,
        planet,
        atmosphere,
        ring,
    }
}

#[cfg(test)]
mod tests {
    use super::build_globe;
    use crate::components::{FaceSide, Geometry, Shading};
    use crate::globe::GlobePart;
    use assets::{Texture, TextureSet};
    use foundation::math::Vec3;

    fn textures() -> TextureSet {
        TextureSet {
            color: Texture::solid("color", 2, 1, [0, 90, 200, 255]),
            bump: Texture::solid("bump", 2, 1, [128, 128, 128, 255]),
            specular: Texture::solid("specular", 2, 1, [20, 20, 20, 255]),
        }
    }

    #[test]
    fn builds_three_parts_with_fixed_framing() {
        let globe = build_globe(&textures());

        assert!(globe.visible);
        assert_eq!(globe.transform.position, Vec3::new(-2.0, 0.0, 0.0));
        assert!(matches!(
            globe.planet.geometry,
            Geometry::Sphere { radius, .. } if radius == 2.5
        ));
        assert!(matches!(
            globe.atmosphere.geometry,
            Geometry::Sphere { radius, .. } if radius == 2.55
        ));
        assert!(matches!(globe.ring.geometry, Geometry::Torus { .. }));
    }

    #[test]
    fn materials_match_resting_state() {
        let globe = build_globe(&textures());

        let maps = globe.planet.material.maps.expect("planet maps");
        assert_eq!(maps.bump_scale, 0.025);
        assert_eq!(maps.bump_texel, [0.5, 1.0]);
        assert!(!globe.planet.material.is_transparent());
        assert_eq!(globe.planet.material.opacity(), 1.0);

        assert_eq!(globe.atmosphere.material.side, FaceSide::Back);
        assert_eq!(globe.atmosphere.material.opacity(), 0.2);
        assert!(globe.atmosphere.material.is_transparent());

        assert_eq!(globe.ring.material.shading, Shading::Basic);
        assert_eq!(globe.ring.material.opacity(), 0.8);
        for part in GlobePart::ALL {
            assert_eq!(
                globe.part(part).material.opacity(),
                part.opacity_factor(),
                "{}",
                part.as_str()
            );
        }
    }

    #[test]
    fn ring_lies_in_equatorial_plane() {
        let globe = build_globe(&textures());
        assert!((globe.ring.transform.rotation.x - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
