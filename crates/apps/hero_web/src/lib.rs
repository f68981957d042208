use console_error_panic_hook::set_once;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use hero::{HeroConfig, MountController};

mod host;
mod overlay;
mod wgpu;

use host::{SharedController, WebHost, with_controller};
use overlay::StatusOverlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

type VisibilityCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// One hero globe mounted into a page container.
///
/// Dropping the object (or calling `free()` from JS) unmounts it.
#[wasm_bindgen]
pub struct HeroGlobe {
    controller: SharedController,
    observer: Option<(web_sys::IntersectionObserver, VisibilityCallback)>,
}

#[wasm_bindgen]
impl HeroGlobe {
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<HeroGlobe, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window missing"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("document missing"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("container #{container_id} missing")))?
            .dyn_into::<web_sys::HtmlElement>()?;
        let overlay = StatusOverlay::new(&document, &container)?;

        let controller = Rc::new_cyclic(|weak| {
            let host = WebHost::new(window, container, overlay, weak.clone());
            RefCell::new(MountController::new(host, HeroConfig::default()))
        });
        Ok(HeroGlobe {
            controller,
            observer: None,
        })
    }

    /// Mount now. Returns `false` if the container is gone or the globe was
    /// already mounted.
    pub fn mount(&mut self) -> bool {
        self.disconnect_observer();
        self.controller
            .try_borrow_mut()
            .map(|mut c| c.attach())
            .unwrap_or(false)
    }

    /// Defer mounting until the container scrolls into view.
    pub fn mount_when_visible(&mut self) -> Result<(), JsValue> {
        if self.observer.is_some() {
            return Ok(());
        }
        let weak = Rc::downgrade(&self.controller);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .is_ok_and(|e| e.is_intersecting())
                });
                if visible {
                    observer.disconnect();
                    with_controller(&weak, |c| {
                        c.attach();
                    });
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;
        let container = self
            .controller
            .try_borrow()
            .map_err(|_| JsValue::from_str("hero globe is busy"))?
            .host()
            .container()
            .clone();
        observer.observe(&container);
        self.observer = Some((observer, callback));
        Ok(())
    }

    /// Tear everything down and remove the canvas and status box.
    pub fn unmount(&mut self) {
        self.disconnect_observer();
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            c.detach();
            c.host().remove_overlay();
        }
    }

    /// `placeholder`, `loading`, `ready` or `failed`.
    pub fn status(&self) -> String {
        self.controller
            .try_borrow()
            .map(|c| c.status().as_str().to_string())
            .unwrap_or_default()
    }

    pub fn error_message(&self) -> Option<String> {
        let c = self.controller.try_borrow().ok()?;
        c.status().failure().map(str::to_string)
    }

    pub fn scroll_progress(&self) -> f64 {
        self.controller
            .try_borrow()
            .map(|c| c.scroll_progress())
            .unwrap_or(0.0)
    }
}

impl HeroGlobe {
    fn disconnect_observer(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for HeroGlobe {
    fn drop(&mut self) {
        self.unmount();
    }
}
