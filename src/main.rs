//! Gift idea generator: wires the form state, the custom slider, the typing
//! effect and the result card into a single page.

use yew::prelude::*;

use gift_ideas::catalog::{self, IdeaEntry};
use gift_ideas::config::{
    COMPLEXITY_SLIDER_ID, DEFAULT_MAX, DEFAULT_MIN, SUBMIT_DISABLED_LABEL, SUBMIT_LABEL,
};
use gift_ideas::geometry::Orientation;
use gift_ideas::registry;
use gift_ideas::{Complexity, IdeaColor, Mood, Recipient};

mod components;
mod hooks;
mod share;
mod slider;

use components::{ColorPicker, MoodPicker, RecipientPicker, ResultCard, ShareButton, TypingLine};
use hooks::use_typed_text;
use slider::RangeSlider;

/// Viewport width at startup, used once to decide the slider orientation.
fn viewport_width() -> f64 {
    gloo_utils::window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[function_component(Main)]
fn main_component() -> Html {
    let recipient = use_state(|| None::<Recipient>);
    let mood = use_state(|| None::<Mood>);
    let color = use_state(|| None::<IdeaColor>);
    let complexity = use_state(|| DEFAULT_MIN);
    let result = use_state(|| None::<IdeaEntry>);
    let flipped = use_state(|| false);
    let submit_enabled = use_state(|| true);
    // Sampled once; orientation stays fixed for the page's lifetime.
    let orientation = *use_state(|| Orientation::from_viewport_width(viewport_width()));

    // Randomize every filter at load.
    {
        let recipient = recipient.clone();
        let mood = mood.clone();
        let color = color.clone();
        let complexity = complexity.clone();
        use_effect_with((), move |_| {
            use rand::seq::IndexedRandom;
            use rand::Rng;

            let mut rng = rand::rng();
            recipient.set(Recipient::ALL.choose(&mut rng).copied());
            mood.set(Mood::ALL.choose(&mut rng).copied());
            color.set(IdeaColor::ALL.choose(&mut rng).copied());

            let value = rng.random_range(DEFAULT_MIN as i64..=DEFAULT_MAX as i64) as f64;
            // Prefer the slider's own setter; fall back to raw state when the
            // slider has not registered yet.
            if !registry::set_value(COMPLEXITY_SLIDER_ID, value) {
                complexity.set(value);
            }
            || ()
        });
    }

    let typed = use_typed_text((*recipient).map(Recipient::scan_message));
    let band = Complexity::from_value(*complexity);

    let on_recipient = {
        let recipient = recipient.clone();
        let submit_enabled = submit_enabled.clone();
        Callback::from(move |picked: Recipient| {
            recipient.set(Some(picked));
            submit_enabled.set(true);
        })
    };
    let on_mood = {
        let mood = mood.clone();
        let submit_enabled = submit_enabled.clone();
        Callback::from(move |picked: Mood| {
            mood.set(Some(picked));
            submit_enabled.set(true);
        })
    };
    // Color restyles the card immediately and does not re-enable the submit.
    let on_color = {
        let color = color.clone();
        Callback::from(move |picked: IdeaColor| color.set(Some(picked)))
    };
    let on_complexity_input = {
        let complexity = complexity.clone();
        let submit_enabled = submit_enabled.clone();
        Callback::from(move |value: f64| {
            complexity.set(value);
            submit_enabled.set(true);
        })
    };

    let onsubmit = {
        let recipient = recipient.clone();
        let mood = mood.clone();
        let complexity = complexity.clone();
        let result = result.clone();
        let flipped = flipped.clone();
        let submit_enabled = submit_enabled.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let entry = catalog::lookup(
                *recipient,
                Complexity::from_value(*complexity),
                *mood,
            );
            result.set(Some(*entry));
            flipped.set(false);
            submit_enabled.set(false);
        })
    };

    let on_flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };

    html! {
        <div class="page">
            <header class="page__header">
                <h1>{ "Gift Idea Generator" }</h1>
                <ShareButton />
            </header>

            <form class="idea-filter" {onsubmit}>
                <RecipientPicker selected={*recipient} onpick={on_recipient} />
                <TypingLine text={typed} />

                <fieldset class="idea-filter__group idea-filter__complexity">
                    <legend>{ "Complexity" }</legend>
                    <RangeSlider
                        slider_id={COMPLEXITY_SLIDER_ID}
                        name="complexity"
                        value={*complexity}
                        {orientation}
                        on_input={on_complexity_input.clone()}
                        on_change={on_complexity_input}
                        indicator_class={classes!((*color).map(IdeaColor::indicator_class))}
                    />
                    <span class="complexity__type">{ band.to_string() }</span>
                </fieldset>

                <ColorPicker selected={*color} onpick={on_color} />
                <MoodPicker selected={*mood} onpick={on_mood} />

                <button
                    type="submit"
                    disabled={!*submit_enabled}
                    class={classes!(
                        "idea-filter__submit",
                        (!*submit_enabled).then_some("disabled")
                    )}
                >
                    { if *submit_enabled { SUBMIT_LABEL } else { SUBMIT_DISABLED_LABEL } }
                </button>
            </form>

            if let Some(entry) = *result {
                <ResultCard {entry} color={*color} flipped={*flipped} {on_flip} />
            }
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
