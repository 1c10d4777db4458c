//! Custom hooks for the idea form.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use gift_ideas::config::TYPING_INTERVAL_MS;

/// Type `message` out one character per tick, returning the visible prefix.
///
/// Changing the message cancels the pending tick and restarts from an empty
/// line, matching the cleared-then-retyped behavior of the status block.
#[hook]
pub fn use_typed_text(message: Option<&'static str>) -> String {
    // Progress is keyed to the message it belongs to, so a stale tick from a
    // previous message can never advance the current one.
    let progress = use_state(|| (message, 0usize));
    let timer = use_mut_ref(|| None::<Timeout>);

    let (typed_message, count) = *progress;
    let count = if typed_message == message { count } else { 0 };
    let len = message.map(|m| m.chars().count()).unwrap_or(0);

    {
        let progress = progress.clone();
        let timer = timer.clone();
        use_effect_with((message, count), move |&(message, count)| {
            if count < len {
                let tick = Timeout::new(TYPING_INTERVAL_MS, move || {
                    progress.set((message, count + 1));
                });
                // Replacing the slot drops, and thereby cancels, any pending tick.
                *timer.borrow_mut() = Some(tick);
            } else {
                // Typing finished or the message was cleared: cancel outright.
                *timer.borrow_mut() = None;
            }
            || ()
        });
    }

    match message {
        Some(m) => m.chars().take(count.min(len)).collect(),
        None => String::new(),
    }
}
