use log::{info, warn};
use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::window;

static OBSERVER_SUPPORT: OnceCell<bool> = OnceCell::new();

/// One-time setup for scroll reveals. Safe to call from anywhere, any number of times.
/// Returns whether the browser can observe viewport intersections.
pub fn register() -> bool {
    *OBSERVER_SUPPORT.get_or_init(|| {
        let supported = window()
            .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);
        if supported {
            info!("Scroll reveal registered");
        } else {
            warn!("IntersectionObserver unavailable, content will be shown without reveal animations");
        }
        supported
    })
}
