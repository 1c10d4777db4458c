//! Registry mapping slider ids to programmatic value setters.
//!
//! Replaces the convention of stashing the widget on its container node:
//! sliders register an explicit `set_value` callback under a well-known id,
//! and collaborators (the randomizer, other scripts) look it up here instead
//! of walking the DOM.
//!
//! Thread-local to avoid synchronization overhead in WASM; all access happens
//! on the single main sequencing thread.

use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use yew::Callback;

thread_local! {
    static SLIDERS: RefCell<HashMap<String, Callback<f64>>> = RefCell::new(HashMap::new());
}

/// Register a slider's setter under `id`, replacing any previous entry.
pub fn register(id: &str, set_value: Callback<f64>) {
    SLIDERS.with(|s| s.borrow_mut().insert(id.to_owned(), set_value));
}

/// Remove the slider registered under `id`, if any.
pub fn unregister(id: &str) {
    SLIDERS.with(|s| s.borrow_mut().remove(id));
}

/// Set the value of the slider registered under `id`.
///
/// Returns false when no slider is registered, so callers can fall back to
/// mutating their own state directly.
pub fn set_value(id: &str, value: f64) -> bool {
    let setter = SLIDERS.with(|s| s.borrow().get(id).cloned());
    match setter {
        Some(cb) => {
            cb.emit(value);
            true
        }
        None => {
            debug!("no slider registered under {id:?}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_value_reaches_registered_slider() {
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        register("test-a", Callback::from(move |v| sink.set(v)));

        assert!(set_value("test-a", 42.0));
        assert_eq!(seen.get(), 42.0);

        unregister("test-a");
        assert!(!set_value("test-a", 7.0));
        assert_eq!(seen.get(), 42.0);
    }

    #[test]
    fn missing_slider_reports_false() {
        assert!(!set_value("test-missing", 1.0));
    }
}
