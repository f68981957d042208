use foundation::math::Mat4;
use scene::camera::CameraState;
use scene::components::{Geometry, Material};
use scene::globe::GlobePart;
use scene::lighting::Lighting;
use scene::world::HeroScene;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    DrawMesh {
        part: GlobePart,
        geometry: Geometry,
        /// Group transform composed with the part's own transform.
        model: Mat4,
        material: Material,
    },
}

impl RenderCommand {
    pub fn is_transparent(&self) -> bool {
        match self {
            RenderCommand::DrawMesh { material, .. } => material.is_transparent(),
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view_proj: Mat4,
    pub camera_position: [f32; 3],
    pub lighting: Lighting,
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    /// Flatten the scene into draw commands, opaque parts first.
    ///
    /// A missing or hidden globe yields an empty command list; fully faded
    /// parts are skipped.
    pub fn collect(scene: &HeroScene, camera: &CameraState) -> RenderFrame {
        let mut frame = RenderFrame {
            view_proj: camera.view_proj(),
            camera_position: camera.position.to_f32(),
            lighting: scene.lighting,
            commands: Vec::new(),
        };

        let Some(globe) = scene.globe().filter(|g| g.visible) else {
            return frame;
        };

        for (part, object) in globe.parts() {
            if object.material.is_transparent() && object.material.opacity() <= 0.0 {
                continue;
            }
            frame.commands.push(RenderCommand::DrawMesh {
                part,
                geometry: object.geometry,
                model: globe.world_matrix(part),
                material: object.material,
            });
        }
        // Stable: parts keep their declaration order within each pass.
        frame.commands.sort_by_key(RenderCommand::is_transparent);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, Renderer};
    use assets::{Texture, TextureSet};
    use pretty_assertions::assert_eq;
    use scene::camera::CameraState;
    use scene::globe::{GlobeGroup, GlobePart};
    use scene::prefabs::build_globe;
    use scene::scroll::apply_progress;
    use scene::world::HeroScene;

    fn globe() -> GlobeGroup {
        let t = |name: &str| Texture::solid(name, 2, 2, [255, 255, 255, 255]);
        build_globe(&TextureSet {
            color: t("color"),
            bump: t("bump"),
            specular: t("specular"),
        })
    }

    fn parts(commands: &[RenderCommand]) -> Vec<GlobePart> {
        commands
            .iter()
            .map(|c| match c {
                RenderCommand::DrawMesh { part, .. } => *part,
            })
            .collect()
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let frame = Renderer::collect(&HeroScene::new(), &CameraState::default());
        assert!(frame.commands.is_empty());
        assert_eq!(frame.camera_position, [0.0, 0.0, 8.0]);
    }

    #[test]
    fn opaque_planet_draws_before_translucent_parts() {
        let mut scene = HeroScene::new();
        scene.insert_globe(globe());
        let frame = Renderer::collect(&scene, &CameraState::default());
        assert_eq!(
            parts(&frame.commands),
            vec![GlobePart::Planet, GlobePart::Atmosphere, GlobePart::Ring]
        );
        assert!(!frame.commands[0].is_transparent());
    }

    #[test]
    fn hidden_globe_emits_no_commands() {
        let mut scene = HeroScene::new();
        let mut camera = CameraState::default();
        scene.insert_globe(globe());
        apply_progress(0.9, scene.globe_mut(), Some(&mut camera));

        let frame = Renderer::collect(&scene, &camera);
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn fully_faded_parts_are_skipped() {
        let mut scene = HeroScene::new();
        let mut faded = globe();
        faded.ring.material.set_opacity(0.0);
        scene.insert_globe(faded);

        let frame = Renderer::collect(&scene, &CameraState::default());
        assert_eq!(
            parts(&frame.commands),
            vec![GlobePart::Planet, GlobePart::Atmosphere]
        );
    }
}
