use hero::HeroStatus;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const OVERLAY_STYLE: &str = "position:absolute;inset:0;display:none;flex-direction:column;align-items:center;justify-content:center;gap:0.75rem;pointer-events:none;font:14px sans-serif;color:#3a5169;";
const BUTTON_STYLE: &str = "pointer-events:auto;padding:0.4rem 1.2rem;border:1px solid #3a5169;border-radius:4px;background:#fff;cursor:pointer;";

/// Loading/error box layered over the canvas. Mirrors the status onto the
/// container's `data-hero-state` attribute for page CSS.
pub struct StatusOverlay {
    container: web_sys::HtmlElement,
    root: web_sys::HtmlElement,
    text: web_sys::HtmlElement,
    retry: web_sys::HtmlButtonElement,
    _on_retry: Closure<dyn FnMut()>,
}

impl StatusOverlay {
    pub fn new(
        document: &web_sys::Document,
        container: &web_sys::HtmlElement,
    ) -> Result<Self, JsValue> {
        let root = document
            .create_element("div")?
            .dyn_into::<web_sys::HtmlElement>()?;
        root.set_class_name("hero-globe-status");
        root.set_attribute("style", OVERLAY_STYLE)?;
        root.set_attribute("role", "status")?;

        let text = document
            .create_element("p")?
            .dyn_into::<web_sys::HtmlElement>()?;
        let retry = document
            .create_element("button")?
            .dyn_into::<web_sys::HtmlButtonElement>()?;
        retry.set_type("button");
        retry.set_text_content(Some("Retry"));
        retry.set_attribute("style", BUTTON_STYLE)?;

        let on_retry = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }) as Box<dyn FnMut()>);
        retry.add_event_listener_with_callback("click", on_retry.as_ref().unchecked_ref())?;

        root.append_child(&text)?;
        root.append_child(&retry)?;
        container.append_child(&root)?;

        let overlay = Self {
            container: container.clone(),
            root,
            text,
            retry,
            _on_retry: on_retry,
        };
        overlay.show(&HeroStatus::Placeholder);
        Ok(overlay)
    }

    pub fn show(&self, status: &HeroStatus) {
        let _ = self
            .container
            .set_attribute("data-hero-state", status.as_str());
        let style = self.root.style();
        let retry_style = self.retry.style();
        match status {
            HeroStatus::Placeholder | HeroStatus::Ready => {
                let _ = style.set_property("display", "none");
            }
            HeroStatus::Loading => {
                self.text.set_text_content(Some("Loading"));
                let _ = retry_style.set_property("display", "none");
                let _ = style.set_property("display", "flex");
            }
            HeroStatus::Failed(msg) => {
                self.text
                    .set_text_content(Some(&format!("Load failed: {msg}")));
                let _ = retry_style.set_property("display", "inline-block");
                let _ = style.set_property("display", "flex");
            }
        }
    }

    pub fn set_revealed(&self, revealed: bool) {
        let _ = self.container.set_attribute(
            "data-overlay-revealed",
            if revealed { "true" } else { "false" },
        );
    }

    pub fn remove(&self) {
        self.root.remove();
        let _ = self.container.remove_attribute("data-hero-state");
        let _ = self.container.remove_attribute("data-overlay-revealed");
    }
}
