use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::config::VIEWPORT_THRESHOLD;
use crate::error::UiError;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub trait Disconnect {
    fn disconnect(&self);
}

impl Disconnect for IntersectionObserver {
    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// Watches a single element for viewport intersection.
///
/// The callback receives `true` whenever the element starts intersecting the
/// viewport and `false` when it leaves. Dropping the watch disconnects the
/// observer, so the element's owner controls the subscription's lifetime.
pub struct ViewportWatch<O: Disconnect = IntersectionObserver, K = EntriesCallback> {
    observer: O,
    _callback: K,
}

impl ViewportWatch {
    pub fn observe(element: &Element, on_change: Callback<bool>) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change.emit(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VIEWPORT_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(UiError::observer)?;
        observer.observe(element);

        Ok(Self::from_parts(observer, callback))
    }
}

impl<O: Disconnect, K> ViewportWatch<O, K> {
    /// `callback` is kept alive until the observer has been disconnected.
    pub fn from_parts(observer: O, callback: K) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }
}

impl<O: Disconnect, K> Drop for ViewportWatch<O, K> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct CountingObserver(Rc<Cell<u32>>);

    impl Disconnect for CountingObserver {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_disconnects_once_on_drop() {
        let observer = CountingObserver::default();
        let watch = ViewportWatch::from_parts(observer.clone(), ());
        assert_eq!(observer.0.get(), 0);

        drop(watch);
        assert_eq!(observer.0.get(), 1);
    }

    #[test]
    fn test_callback_outlives_disconnect() {
        struct Keepalive(Rc<Cell<bool>>, CountingObserver);

        impl Drop for Keepalive {
            fn drop(&mut self) {
                // Released only after the observer stopped delivering.
                self.0.set(self.1 .0.get() == 1);
            }
        }

        let observer = CountingObserver::default();
        let released_after = Rc::new(Cell::new(false));
        let watch = ViewportWatch::from_parts(
            observer.clone(),
            Keepalive(released_after.clone(), observer),
        );
        drop(watch);
        assert!(released_after.get());
    }
}
