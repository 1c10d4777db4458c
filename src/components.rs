//! Pure Yew view components for the idea form.
//!
//! These render from props only; all state lives in the main component.

use web_sys::MouseEvent;
use yew::prelude::*;

use gift_ideas::catalog::IdeaEntry;
use gift_ideas::config::TYPING_CURSOR;
use gift_ideas::{IdeaColor, Mood, Recipient};

use crate::share::share_current_page;

/// Radio group picking who the gift is for.
#[derive(Properties, PartialEq)]
pub struct RecipientPickerProps {
    pub selected: Option<Recipient>,
    pub onpick: Callback<Recipient>,
}

#[function_component(RecipientPicker)]
pub fn recipient_picker(props: &RecipientPickerProps) -> Html {
    html! {
        <fieldset class="idea-filter__group idea-filter__recipient">
            <legend>{ "Who is it for?" }</legend>
            { Recipient::ALL.iter().map(|&recipient| {
                let onchange = props.onpick.reform(move |_: Event| recipient);
                html! {
                    <label class="idea-filter__option">
                        <input
                            type="radio"
                            name="recipient"
                            value={recipient.value()}
                            checked={props.selected == Some(recipient)}
                            {onchange}
                        />
                        { recipient.label() }
                    </label>
                }
            }).collect::<Html>() }
        </fieldset>
    }
}

/// Radio group picking the mood of the idea.
#[derive(Properties, PartialEq)]
pub struct MoodPickerProps {
    pub selected: Option<Mood>,
    pub onpick: Callback<Mood>,
}

#[function_component(MoodPicker)]
pub fn mood_picker(props: &MoodPickerProps) -> Html {
    html! {
        <fieldset class="idea-filter__group idea-filter__mood">
            <legend>{ "What's the mood?" }</legend>
            { Mood::ALL.iter().map(|&mood| {
                let onchange = props.onpick.reform(move |_: Event| mood);
                html! {
                    <label class="idea-filter__option">
                        <input
                            type="radio"
                            name="mood"
                            value={mood.value()}
                            checked={props.selected == Some(mood)}
                            {onchange}
                        />
                        { mood.label() }
                    </label>
                }
            }).collect::<Html>() }
        </fieldset>
    }
}

/// Accent color swatches. Picking one restyles the result card immediately.
#[derive(Properties, PartialEq)]
pub struct ColorPickerProps {
    pub selected: Option<IdeaColor>,
    pub onpick: Callback<IdeaColor>,
}

#[function_component(ColorPicker)]
pub fn color_picker(props: &ColorPickerProps) -> Html {
    html! {
        <fieldset class="idea-filter__group idea-filter__color">
            <legend>{ "Pick a color" }</legend>
            { IdeaColor::ALL.iter().map(|&color| {
                let onchange = props.onpick.reform(move |_: Event| color);
                html! {
                    <label class="idea-filter__swatch" style={format!("--swatch: {};", color.hex())}>
                        <input
                            type="radio"
                            name="color"
                            value={color.hex()}
                            checked={props.selected == Some(color)}
                            {onchange}
                        />
                    </label>
                }
            }).collect::<Html>() }
        </fieldset>
    }
}

/// The typed status line with its trailing cursor glyph.
#[derive(Properties, PartialEq)]
pub struct TypingLineProps {
    pub text: String,
}

#[function_component(TypingLine)]
pub fn typing_line(props: &TypingLineProps) -> Html {
    if props.text.is_empty() {
        return html! { <p class="typing__text"></p> };
    }
    html! {
        <p class="typing__text">
            { &props.text }
            <span class="cursor">{ TYPING_CURSOR }</span>
        </p>
    }
}

/// Two-sided result card: front shows the idea, back shows how to pull it off.
#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub entry: IdeaEntry,
    pub color: Option<IdeaColor>,
    pub flipped: bool,
    pub on_flip: Callback<MouseEvent>,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let style = props.color.map(|color| {
        format!(
            "background: linear-gradient(180deg, {hex} 0%, {hex} 100%), \
             var(--bg-result) center / cover no-repeat;",
            hex = color.hex()
        )
    });
    let front_class = classes!(
        "result-content__front",
        (!props.flipped).then_some("active")
    );
    let back_class = classes!("result-content__back", props.flipped.then_some("active"));

    html! {
        <div class="result-card" {style}>
            <div class={front_class}>
                <h2 class="result__title">{ props.entry.title }</h2>
                <p class="result__desc">{ props.entry.desc }</p>
                <button type="button" class="result__button" onclick={props.on_flip.clone()}>
                    { "How?" }
                </button>
            </div>
            <div class={back_class}>
                <p class="result__desc">{ props.entry.how_to }</p>
                <button type="button" class="result__button" onclick={props.on_flip.clone()}>
                    { "Back" }
                </button>
            </div>
        </div>
    }
}

/// Share icon; the whole interaction is fire-and-forget.
#[function_component(ShareButton)]
pub fn share_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        wasm_bindgen_futures::spawn_local(share_current_page());
    });
    html! {
        <button type="button" class="share__icon" title="Share this page" {onclick}>
            { "Share" }
        </button>
    }
}
