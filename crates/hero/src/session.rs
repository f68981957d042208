use scene::camera::CameraState;
use scene::world::HeroScene;

use crate::host::{FrameHandle, Signal, SurfaceSize, Ticket};
use crate::status::LoadState;

/// State owned by one live mount. Dropped as a whole on teardown.
#[derive(Debug)]
pub struct Session<B> {
    pub ticket: Ticket,
    pub backend: B,
    pub camera: CameraState,
    pub scene: HeroScene,
    pub load_state: LoadState,
    pub surface: SurfaceSize,
    pub pending_frame: Option<FrameHandle>,
    pub subscriptions: Vec<Signal>,
    pub progress: f64,
    pub overlay_revealed: bool,
}

impl<B> Session<B> {
    pub fn new(ticket: Ticket, backend: B, surface: SurfaceSize) -> Self {
        Self {
            ticket,
            backend,
            camera: CameraState::for_viewport(surface.width, surface.height),
            scene: HeroScene::new(),
            load_state: LoadState::Loading,
            surface,
            pending_frame: None,
            subscriptions: Vec::new(),
            progress: 0.0,
            overlay_revealed: false,
        }
    }
}
