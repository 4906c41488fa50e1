use std::cell::RefCell;

use log::{debug, warn};
use web_sys::window;

/// Where the overflow toggle is written.
pub trait BodyStyle {
    fn set_overflow(&self, value: &str);
}

pub struct DocumentBody;

impl BodyStyle for DocumentBody {
    fn set_overflow(&self, value: &str) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            warn!("No document body to apply scroll lock to");
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            warn!("Failed to set body overflow: {:?}", e);
        }
    }
}

/// Page scroll suppression. A plain flag rather than a counter: at most one
/// overlay holds it at a time, and one `unlock` always frees the page.
pub struct ScrollLock<B: BodyStyle> {
    body: B,
    locked: bool,
}

impl<B: BodyStyle> ScrollLock<B> {
    pub fn new(body: B) -> Self {
        Self { body, locked: false }
    }

    pub fn lock(&mut self) {
        if self.locked {
            return;
        }
        self.body.set_overflow("hidden");
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        if !self.locked {
            return;
        }
        self.body.set_overflow("unset");
        self.locked = false;
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

thread_local! {
    static PAGE_SCROLL: RefCell<ScrollLock<DocumentBody>> = RefCell::new(ScrollLock::new(DocumentBody));
}

pub fn lock() {
    PAGE_SCROLL.with(|lock| lock.borrow_mut().lock());
    debug!("Page scroll locked");
}

pub fn unlock() {
    PAGE_SCROLL.with(|lock| lock.borrow_mut().unlock());
    debug!("Page scroll unlocked");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingBody {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl BodyStyle for RecordingBody {
        fn set_overflow(&self, value: &str) {
            self.writes.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn lock_is_applied_once() {
        let body = RecordingBody::default();
        let mut lock = ScrollLock::new(body.clone());
        lock.lock();
        lock.lock();
        lock.lock();
        assert!(lock.is_locked());
        assert_eq!(*body.writes.borrow(), vec!["hidden".to_string()]);
    }

    #[test]
    fn single_unlock_releases_after_repeated_locks() {
        let body = RecordingBody::default();
        let mut lock = ScrollLock::new(body.clone());
        lock.lock();
        lock.lock();
        lock.unlock();
        assert!(!lock.is_locked());
        assert_eq!(*body.writes.borrow(), vec!["hidden".to_string(), "unset".to_string()]);
    }

    #[test]
    fn unlock_without_lock_is_silent() {
        let body = RecordingBody::default();
        let mut lock = ScrollLock::new(body.clone());
        lock.unlock();
        assert!(body.writes.borrow().is_empty());
    }
}
