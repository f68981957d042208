use assets::{TextureSet, TextureSources};
use gpu::RenderFrame;
use scene::scroll::ScrollMetrics;

use crate::config::HeroConfig;
use crate::error::HeroError;
use crate::status::HeroStatus;

/// Drawing surface size in CSS pixels plus the (capped) device pixel ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Backing-store size; never zero so surface configuration stays valid.
    pub fn physical(&self) -> (u32, u32) {
        let scale = |v: u32| ((v as f64 * self.pixel_ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Signal {
    Resize,
    Scroll,
}

/// Mount generation. Asynchronous completions carry the ticket they were
/// started with and are dropped if it no longer matches the live session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

/// Pending display-refresh callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait RenderBackend {
    fn resize(&mut self, size: SurfaceSize);
    fn install_textures(&mut self, textures: &TextureSet) -> Result<(), HeroError>;
    fn draw(&mut self, frame: &RenderFrame) -> Result<(), HeroError>;
    /// Release GPU resources and detach the drawing surface from the page.
    fn dispose(self);
}

/// Everything the mount controller needs from its environment.
///
/// `create_backend` and `load_textures` only start work; results come back
/// through `MountController::backend_ready` and
/// `MountController::textures_loaded` with the same ticket.
pub trait HeroHost {
    type Backend: RenderBackend;

    /// `None` when the container element is gone.
    fn surface_size(&self) -> Option<SurfaceSize>;
    fn scroll_metrics(&self) -> ScrollMetrics;

    fn create_backend(&mut self, ticket: Ticket, size: SurfaceSize, config: &HeroConfig);
    /// Maps larger than `max_dim` on either side arrive downscaled.
    fn load_textures(&mut self, ticket: Ticket, sources: &TextureSources, max_dim: u32);

    fn subscribe(&mut self, signal: Signal) -> Result<(), HeroError>;
    fn unsubscribe(&mut self, signal: Signal);

    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);

    fn report(&mut self, status: &HeroStatus);
    fn reveal_overlay(&mut self, revealed: bool);
}
