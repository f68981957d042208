use std::cell::RefCell;
use std::rc::{Rc, Weak};

use assets::{HttpFetcher, TextureSources, load_texture_set};
use hero::{
    FrameHandle, HeroConfig, HeroError, HeroHost, HeroStatus, MountController, RenderBackend,
    Signal, SurfaceSize, Ticket,
};
use scene::scroll::ScrollMetrics;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::overlay::StatusOverlay;
use crate::wgpu::WgpuBackend;

pub type SharedController = Rc<RefCell<MountController<WebHost>>>;
pub type WeakController = Weak<RefCell<MountController<WebHost>>>;

/// Run `f` against the controller if it is still alive and not borrowed.
/// Returns `false` when the call was skipped.
pub fn with_controller(
    weak: &WeakController,
    f: impl FnOnce(&mut MountController<WebHost>),
) -> bool {
    let Some(shared) = weak.upgrade() else {
        return false;
    };
    let Ok(mut controller) = shared.try_borrow_mut() else {
        return false;
    };
    f(&mut controller);
    true
}

fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Browser side of the hero globe: DOM container, window listeners,
/// `requestAnimationFrame`, and async wgpu/texture work.
pub struct WebHost {
    window: web_sys::Window,
    container: web_sys::HtmlElement,
    overlay: StatusOverlay,
    controller: WeakController,
    on_resize: Closure<dyn FnMut()>,
    on_scroll: Closure<dyn FnMut()>,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl WebHost {
    pub fn new(
        window: web_sys::Window,
        container: web_sys::HtmlElement,
        overlay: StatusOverlay,
        controller: WeakController,
    ) -> Self {
        let weak = controller.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            with_controller(&weak, |c| {
                c.resized();
            });
        }) as Box<dyn FnMut()>);

        let weak = controller.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            with_controller(&weak, |c| {
                c.scrolled();
            });
        }) as Box<dyn FnMut()>);

        let weak = controller.clone();
        let on_frame = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            with_controller(&weak, |c| {
                c.frame();
            });
        }) as Box<dyn FnMut(f64)>);

        Self {
            window,
            container,
            overlay,
            controller,
            on_resize,
            on_scroll,
            on_frame,
        }
    }

    pub fn container(&self) -> &web_sys::HtmlElement {
        &self.container
    }

    pub fn remove_overlay(&self) {
        self.overlay.remove();
    }

    fn listener(&self, signal: Signal) -> (&'static str, &js_sys::Function) {
        match signal {
            Signal::Resize => ("resize", self.on_resize.as_ref().unchecked_ref()),
            Signal::Scroll => ("scroll", self.on_scroll.as_ref().unchecked_ref()),
        }
    }
}

impl HeroHost for WebHost {
    type Backend = WgpuBackend;

    fn surface_size(&self) -> Option<SurfaceSize> {
        if !self.container.is_connected() {
            return None;
        }
        let width = self.container.client_width().max(0) as u32;
        let height = self.container.client_height().max(0) as u32;
        Some(SurfaceSize::new(width, height).with_pixel_ratio(self.window.device_pixel_ratio()))
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .window
            .document()
            .and_then(|d| d.body())
            .map_or(0.0, |body| body.scroll_height() as f64);
        ScrollMetrics::new(offset, document_height, viewport_height)
    }

    fn create_backend(&mut self, ticket: Ticket, size: SurfaceSize, config: &HeroConfig) {
        let container = self.container.clone();
        let weak = self.controller.clone();
        let clear = config.clear_color;
        spawn_local(async move {
            let result = WgpuBackend::create(&container, size, clear).await;
            if let Err(err) = &result {
                log_error(&format!("hero globe: {err}"));
            }
            let mut pending = Some(result);
            with_controller(&weak, |c| {
                if let Some(result) = pending.take() {
                    c.backend_ready(ticket, result);
                }
            });
            // Nobody took it: the globe was dropped while wgpu was starting.
            if let Some(Ok(backend)) = pending {
                backend.dispose();
            }
        });
    }

    fn load_textures(&mut self, ticket: Ticket, sources: &TextureSources, max_dim: u32) {
        let weak = self.controller.clone();
        let sources = sources.clone();
        spawn_local(async move {
            let result = load_texture_set(&HttpFetcher, &sources, max_dim).await;
            if let Err(err) = &result {
                log_error(&format!("hero globe: {err}"));
            }
            with_controller(&weak, |c| {
                c.textures_loaded(ticket, result);
            });
        });
    }

    fn subscribe(&mut self, signal: Signal) -> Result<(), HeroError> {
        let (event, callback) = self.listener(signal);
        self.window
            .add_event_listener_with_callback(event, callback)
            .map_err(|e| HeroError::init(format!("{event} listener: {e:?}")))
    }

    fn unsubscribe(&mut self, signal: Signal) {
        let (event, callback) = self.listener(signal);
        let _ = self.window.remove_event_listener_with_callback(event, callback);
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .ok()
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }

    fn report(&mut self, status: &HeroStatus) {
        self.overlay.show(status);
    }

    fn reveal_overlay(&mut self, revealed: bool) {
        self.overlay.set_revealed(revealed);
    }
}
