use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// True once the trigger's top edge sits at or above `threshold` of the viewport height.
/// Triggers that were already scrolled past count as crossed.
pub fn crosses_threshold(trigger_top: f64, viewport_height: f64, threshold: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    trigger_top <= viewport_height * threshold
}

/// Shrinks the observer root from the bottom so intersection starts at `threshold`.
pub fn root_margin(threshold: f64) -> String {
    let cut = ((1.0 - threshold.clamp(0.0, 1.0)) * 100.0).round();
    format!("0px 0px -{}% 0px", cut)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Watches one element and reports its top edge against the viewport height
/// every time the browser notices an intersection change. The callback returns
/// whether it still wants updates; returning false disconnects the observer.
pub struct ViewportObserver {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe<F>(element: &Element, threshold: f64, mut on_change: F) -> Option<Self>
    where
        F: FnMut(f64, f64) -> bool + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let height = viewport_height();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !on_change(entry.bounding_client_rect().top(), height) {
                    observer.disconnect();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(threshold));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Could not create IntersectionObserver: {:?}", e);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_threshold_line() {
        assert!(!crosses_threshold(801.0, 1000.0, 0.8));
        assert!(crosses_threshold(800.0, 1000.0, 0.8));
        assert!(crosses_threshold(120.0, 1000.0, 0.8));
    }

    #[test]
    fn already_scrolled_past_counts() {
        assert!(crosses_threshold(-2400.0, 900.0, 0.85));
    }

    #[test]
    fn zero_viewport_never_fires() {
        assert!(!crosses_threshold(0.0, 0.0, 0.8));
    }

    #[test]
    fn root_margin_cuts_bottom() {
        assert_eq!(root_margin(0.8), "0px 0px -20% 0px");
        assert_eq!(root_margin(0.85), "0px 0px -15% 0px");
        assert_eq!(root_margin(1.0), "0px 0px -0% 0px");
    }
}
