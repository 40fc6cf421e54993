use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD;
use crate::error::UiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            past_threshold: offset > SCROLL_THRESHOLD,
        }
    }

    /// Extra nav class while scrolled.
    pub fn nav_class(&self) -> Option<&'static str> {
        self.past_threshold.then_some("scrolled")
    }
}

/// Something that emits vertical scroll offsets to registered handlers.
pub trait ScrollHost {
    type Registration;

    fn add_scroll_listener(
        &self,
        handler: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Registration, UiError>;

    fn remove_scroll_listener(&self, registration: &Self::Registration) -> Result<(), UiError>;
}

impl ScrollHost for Window {
    type Registration = Closure<dyn FnMut()>;

    fn add_scroll_listener(
        &self,
        mut handler: Box<dyn FnMut(f64)>,
    ) -> Result<Self::Registration, UiError> {
        let reader = self.clone();
        let callback = Closure::wrap(Box::new(move || {
            handler(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(UiError::listener)?;
        Ok(callback)
    }

    fn remove_scroll_listener(&self, registration: &Self::Registration) -> Result<(), UiError> {
        self.remove_event_listener_with_callback("scroll", registration.as_ref().unchecked_ref())
            .map_err(UiError::listener)
    }
}

/// A scroll listener that is removed again when dropped.
pub struct ScrollListener<H: ScrollHost = Window> {
    host: H,
    registration: H::Registration,
}

impl ScrollListener {
    /// Registers `on_scroll` on the window.
    pub fn register(on_scroll: Callback<f64>) -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        Self::register_on(window, on_scroll)
    }
}

impl<H: ScrollHost> ScrollListener<H> {
    pub fn register_on(host: H, on_scroll: Callback<f64>) -> Result<Self, UiError> {
        let registration =
            host.add_scroll_listener(Box::new(move |offset| on_scroll.emit(offset)))?;
        Ok(Self { host, registration })
    }
}

impl<H: ScrollHost> Drop for ScrollListener<H> {
    fn drop(&mut self) {
        if let Err(err) = self.host.remove_scroll_listener(&self.registration) {
            log::warn!("failed to remove scroll listener: {}", err);
        }
    }
}

/// Turns raw offsets into `on_change` calls, one per threshold crossing.
pub fn crossing_filter(on_change: Callback<ScrollState>) -> Callback<f64> {
    let last = Cell::new(ScrollState::default());
    Callback::from(move |offset: f64| {
        let next = ScrollState::from_offset(offset);
        if last.replace(next) != next {
            log::debug!("scroll threshold crossed: past={}", next.past_threshold);
            on_change.emit(next);
        }
    })
}

/// Tracks whether the page has scrolled past [`SCROLL_THRESHOLD`]. One
/// listener per mount, released on unmount.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = crossing_filter(Callback::from(move |next| state.set(next)));

                let listener = match ScrollListener::register(on_scroll) {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        log::warn!("nav stays unscrolled: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Registry {
        added: usize,
        removed: usize,
        handlers: BTreeMap<usize, Box<dyn FnMut(f64)>>,
    }

    #[derive(Clone, Default)]
    struct FakeWindow(Rc<RefCell<Registry>>);

    impl FakeWindow {
        fn scroll_to(&self, offset: f64) {
            for handler in self.0.borrow_mut().handlers.values_mut() {
                handler(offset);
            }
        }

        fn counts(&self) -> (usize, usize, usize) {
            let registry = self.0.borrow();
            (registry.added, registry.removed, registry.handlers.len())
        }
    }

    impl ScrollHost for FakeWindow {
        type Registration = usize;

        fn add_scroll_listener(&self, handler: Box<dyn FnMut(f64)>) -> Result<usize, UiError> {
            let mut registry = self.0.borrow_mut();
            let id = registry.added;
            registry.added += 1;
            registry.handlers.insert(id, handler);
            Ok(id)
        }

        fn remove_scroll_listener(&self, registration: &usize) -> Result<(), UiError> {
            let mut registry = self.0.borrow_mut();
            registry.removed += 1;
            registry.handlers.remove(registration);
            Ok(())
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<ScrollState>>>, Callback<ScrollState>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |state| sink.borrow_mut().push(state)))
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!ScrollState::from_offset(0.0).past_threshold);
        assert!(!ScrollState::from_offset(49.9).past_threshold);
        assert!(!ScrollState::from_offset(50.0).past_threshold);
        assert!(ScrollState::from_offset(50.5).past_threshold);
        assert!(ScrollState::from_offset(5000.0).past_threshold);
    }

    #[test]
    fn test_starts_unscrolled() {
        assert_eq!(ScrollState::default(), ScrollState::from_offset(0.0));
    }

    #[test]
    fn test_nav_class_follows_scroll() {
        let styles: Vec<Option<&str>> = [0.0, 120.0, 10.0]
            .iter()
            .map(|offset| ScrollState::from_offset(*offset).nav_class())
            .collect();
        assert_eq!(styles, vec![None, Some("scrolled"), None]);
    }

    #[test]
    fn test_one_listener_per_mount() {
        let window = FakeWindow::default();

        for mount in 1..=2 {
            let listener =
                ScrollListener::register_on(window.clone(), Callback::from(|_: f64| ())).unwrap();
            assert_eq!(window.counts(), (mount, mount - 1, 1));
            drop(listener);
            assert_eq!(window.counts(), (mount, mount, 0));
        }
    }

    #[test]
    fn test_scroll_after_unmount_is_not_delivered() {
        let window = FakeWindow::default();
        let (seen, on_change) = recorder();

        let listener =
            ScrollListener::register_on(window.clone(), crossing_filter(on_change)).unwrap();
        drop(listener);
        window.scroll_to(300.0);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_changes_only_on_crossing() {
        let window = FakeWindow::default();
        let (seen, on_change) = recorder();
        let _listener =
            ScrollListener::register_on(window.clone(), crossing_filter(on_change)).unwrap();

        window.scroll_to(120.0);
        assert_eq!(seen.borrow().len(), 1);

        for offset in [200.0, 51.0, 800.0] {
            window.scroll_to(offset);
        }
        window.scroll_to(50.0);
        window.scroll_to(0.0);

        let past: Vec<bool> = seen.borrow().iter().map(|state| state.past_threshold).collect();
        assert_eq!(past, vec![true, false]);
    }
}
