//! Custom draggable range slider bound to a hidden numeric input.
//!
//! The component keeps three things mutually consistent: an internal numeric
//! value, the visual thumb position, and the bound `<input>`. Every update
//! path (drag, track click, programmatic set through the registry or the
//! `value` prop) funnels through the same apply routine, so listeners observe
//! identical `on_input`/`on_change` notifications regardless of how the value
//! changed.
//!
//! Drag tracking happens on the document, not the component, so a drag that
//! started on the thumb keeps following the pointer anywhere on the page.
//! Those listeners are owned by a [`DragCoordinator`] created per slider
//! instance and dropped with it; move/release handlers filter on the
//! instance's own dragging flag.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use gift_ideas::config::{DEFAULT_MAX, DEFAULT_MIN};
use gift_ideas::geometry::{
    position_to_percent, thumb_center_percent, Orientation, SliderSpan, SliderState, TrackMetrics,
};
use gift_ideas::registry;

#[derive(Properties, PartialEq)]
pub struct RangeSliderProps {
    /// Registry key and DOM id of the slider container.
    pub slider_id: AttrValue,
    /// Form name of the bound input.
    pub name: AttrValue,
    #[prop_or(DEFAULT_MIN)]
    pub min: f64,
    #[prop_or(DEFAULT_MAX)]
    pub max: f64,
    /// Externally driven value; applied through the same path as drags, with
    /// the no-op guard breaking notification cycles.
    pub value: f64,
    /// Decided by the caller, typically from a viewport-width sample at
    /// startup. Not re-derived on resize.
    pub orientation: Orientation,
    #[prop_or_default]
    pub on_input: Callback<f64>,
    #[prop_or_default]
    pub on_change: Callback<f64>,
    /// Artwork variant class for the floating indicator.
    #[prop_or_default]
    pub indicator_class: Classes,
}

struct SliderCore {
    state: SliderState,
    orientation: Orientation,
    dragging: bool,
    /// Track corner in viewport coordinates, captured at drag start and reused
    /// until release to avoid layout queries on every move.
    track_origin: Option<(f64, f64)>,
}

#[derive(Clone, PartialEq)]
struct SliderRefs {
    track: NodeRef,
    thumb: NodeRef,
    indicator: NodeRef,
    input: NodeRef,
}

/// Shared handle passed into event closures.
#[derive(Clone)]
struct SliderHandle {
    core: Rc<RefCell<SliderCore>>,
    refs: SliderRefs,
    on_input: Callback<f64>,
    on_change: Callback<f64>,
}

impl SliderHandle {
    /// Measure the track and thumb along the active axis. None while the
    /// track has no layout; callers skip positioning until it does.
    fn metrics(&self) -> Option<TrackMetrics> {
        let orientation = self.core.borrow().orientation;
        let track = self.refs.track.cast::<HtmlElement>()?;
        let size = f64::from(match orientation {
            Orientation::Horizontal => track.client_width(),
            Orientation::Vertical => track.client_height(),
        });
        if size <= 0.0 {
            return None;
        }
        let thumb_extent = self
            .refs
            .thumb
            .cast::<HtmlElement>()
            .map(|thumb| {
                f64::from(match orientation {
                    Orientation::Horizontal => thumb.client_width(),
                    Orientation::Vertical => thumb.client_height(),
                })
            })
            .unwrap_or(0.0);
        Some(TrackMetrics::measured(size, thumb_extent))
    }

    /// Clamp, guard against no-op, sync the bound input, reposition the thumb
    /// and notify. Returns whether anything changed.
    fn apply_value(&self, raw: f64) -> bool {
        let Some(next) = self.core.borrow_mut().state.apply(raw) else {
            return false;
        };
        if let Some(input) = self.refs.input.cast::<HtmlInputElement>() {
            input.set_value_as_number(next);
        }
        self.reposition();
        self.on_input.emit(next);
        self.on_change.emit(next);
        true
    }

    fn reposition(&self) {
        let (value, span, orientation) = {
            let core = self.core.borrow();
            match core.state.value() {
                Some(v) => (v, core.state.span(), core.orientation),
                None => return,
            }
        };
        let Some(metrics) = self.metrics() else {
            return;
        };
        let pos = thumb_center_percent(span.value_to_percent(value), metrics, orientation);

        if let Some(thumb) = self.refs.thumb.cast::<HtmlElement>() {
            let style = thumb.style();
            match orientation {
                Orientation::Horizontal => {
                    let _ = style.set_property("left", &format!("{pos}%"));
                    let _ = style.set_property("top", "50%");
                }
                Orientation::Vertical => {
                    let _ = style.set_property("top", &format!("{pos}%"));
                    let _ = style.set_property("left", "50%");
                }
            }
            let _ = style.set_property("transform", "translate(-50%, -50%)");
        }

        if let Some(indicator) = self.refs.indicator.cast::<HtmlElement>() {
            let style = indicator.style();
            match orientation {
                Orientation::Horizontal => {
                    let _ = style.set_property("left", &format!("calc({pos}% - 2.5rem)"));
                    let _ = style.set_property("top", "50%");
                    let _ = style.set_property("transform", "translate(-50%, -50%) rotate(90deg)");
                }
                Orientation::Vertical => {
                    let _ = style.set_property("top", &format!("{pos}%"));
                    let _ = style.remove_property("left");
                    let _ = style.set_property("transform", "translateY(-50%)");
                }
            }
        }
    }

    fn begin_drag(&self) {
        {
            let mut core = self.core.borrow_mut();
            core.dragging = true;
            core.track_origin = self.track_corner();
        }
        self.set_transitions_suspended(true);
    }

    fn end_drag(&self) {
        {
            let mut core = self.core.borrow_mut();
            if !core.dragging {
                return;
            }
            core.dragging = false;
            core.track_origin = None;
        }
        self.set_transitions_suspended(false);
    }

    fn drag_move(&self, x: f64, y: f64) {
        let origin = {
            let core = self.core.borrow();
            if !core.dragging {
                return;
            }
            core.track_origin
        };
        // Geometry can go missing mid-drag if the track is re-laid out.
        let Some(origin) = origin.or_else(|| self.track_corner()) else {
            return;
        };
        if let Some(value) = self.value_from_point(origin, x, y) {
            self.apply_value(value);
        }
    }

    /// Track press without a drag: one coordinate-to-value application against
    /// fresh geometry, no drag state retained.
    fn jump_to(&self, x: f64, y: f64) {
        let Some(origin) = self.track_corner() else {
            return;
        };
        if let Some(value) = self.value_from_point(origin, x, y) {
            self.apply_value(value);
        }
    }

    fn value_from_point(&self, origin: (f64, f64), x: f64, y: f64) -> Option<f64> {
        let (span, orientation) = {
            let core = self.core.borrow();
            (core.state.span(), core.orientation)
        };
        let metrics = self.metrics()?;
        let rel = orientation.axis_coord(x - origin.0, y - origin.1);
        Some(span.percent_to_value(position_to_percent(rel, metrics, orientation)))
    }

    fn track_corner(&self) -> Option<(f64, f64)> {
        let track = self.refs.track.cast::<HtmlElement>()?;
        let rect = track.get_bounding_client_rect();
        Some((rect.left(), rect.top()))
    }

    /// While dragging, transitions are off for immediate feedback; on release
    /// the indicator animates the offset matching the orientation.
    fn set_transitions_suspended(&self, suspended: bool) {
        let orientation = self.core.borrow().orientation;
        if let Some(thumb) = self.refs.thumb.cast::<HtmlElement>() {
            let style = thumb.style();
            if suspended {
                let _ = style.set_property("transition", "none");
            } else {
                let _ = style.remove_property("transition");
            }
        }
        if let Some(indicator) = self.refs.indicator.cast::<HtmlElement>() {
            let style = indicator.style();
            if suspended {
                let _ = style.set_property("transition", "none");
            } else {
                let animated = match orientation {
                    Orientation::Horizontal => "left 0.1s ease",
                    Orientation::Vertical => "top 0.1s ease",
                };
                let _ = style.set_property("transition", animated);
            }
        }
    }
}

/// Owns the document-level listeners that follow an in-progress drag.
struct DragCoordinator {
    _listeners: Vec<EventListener>,
}

impl DragCoordinator {
    fn new(handle: SliderHandle) -> Self {
        let doc = document();
        let mut listeners = Vec::new();

        // Non-passive so touch moves can suppress page scrolling mid-drag.
        for event in ["mousemove", "touchmove"] {
            let handle = handle.clone();
            listeners.push(EventListener::new_with_options(
                &doc,
                event,
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    if !handle.core.borrow().dragging {
                        return;
                    }
                    if let Some((x, y)) = pointer_point(event) {
                        event.prevent_default();
                        handle.drag_move(x, y);
                    }
                },
            ));
        }

        for event in ["mouseup", "touchend"] {
            let handle = handle.clone();
            listeners.push(EventListener::new(&doc, event, move |_event: &Event| {
                handle.end_drag();
            }));
        }

        Self {
            _listeners: listeners,
        }
    }
}

/// Prefer the first touch point, else the mouse point.
fn pointer_point(event: &Event) -> Option<(f64, f64)> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        return Some((touch.client_x() as f64, touch.client_y() as f64));
    }
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((mouse.client_x() as f64, mouse.client_y() as f64))
}

#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    let refs = SliderRefs {
        track: use_node_ref(),
        thumb: use_node_ref(),
        indicator: use_node_ref(),
        input: use_node_ref(),
    };

    // Bounds and orientation are fixed at construction.
    let core = {
        let state = SliderState::new(SliderSpan::new(props.min, props.max));
        let orientation = props.orientation;
        use_mut_ref(|| SliderCore {
            state,
            orientation,
            dragging: false,
            track_origin: None,
        })
    };

    let handle = SliderHandle {
        core,
        refs: refs.clone(),
        on_input: props.on_input.clone(),
        on_change: props.on_change.clone(),
    };

    // Register the programmatic setter and install the drag coordinator for
    // the component's lifetime.
    {
        let handle = handle.clone();
        let slider_id = props.slider_id.clone();
        use_effect_with((), move |_| {
            let setter = {
                let handle = handle.clone();
                Callback::from(move |value: f64| {
                    handle.apply_value(value);
                })
            };
            registry::register(&slider_id, setter);
            let coordinator = DragCoordinator::new(handle);
            move || {
                registry::unregister(&slider_id);
                drop(coordinator);
            }
        });
    }

    // Externally driven value changes, including the initial placement.
    {
        let handle = handle.clone();
        use_effect_with(props.value, move |&value| {
            handle.apply_value(value);
            || ()
        });
    }

    let on_thumb_mousedown = {
        let handle = handle.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handle.begin_drag();
        })
    };
    let on_thumb_touchstart = {
        let handle = handle.clone();
        Callback::from(move |event: TouchEvent| {
            event.prevent_default();
            handle.begin_drag();
        })
    };
    let on_track_mousedown = {
        let handle = handle.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            handle.jump_to(event.client_x() as f64, event.client_y() as f64);
        })
    };
    let on_track_touchstart = {
        let handle = handle.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                event.prevent_default();
                handle.jump_to(touch.client_x() as f64, touch.client_y() as f64);
            }
        })
    };

    let orientation_class = match props.orientation {
        Orientation::Horizontal => "complexity-input--horizontal",
        Orientation::Vertical => "complexity-input--vertical",
    };

    html! {
        <div class={classes!("complexity-input", orientation_class)} id={props.slider_id.clone()}>
            <div
                class="range-track"
                ref={refs.track.clone()}
                onmousedown={on_track_mousedown}
                ontouchstart={on_track_touchstart}
            ></div>
            <div
                class="range-thumb"
                ref={refs.thumb.clone()}
                onmousedown={on_thumb_mousedown}
                ontouchstart={on_thumb_touchstart}
            ></div>
            <div
                class={classes!("range-box", props.indicator_class.clone())}
                ref={refs.indicator.clone()}
            ></div>
            <input
                class="range-input"
                type="range"
                name={props.name.clone()}
                min={props.min.to_string()}
                max={props.max.to_string()}
                ref={refs.input.clone()}
            />
        </div>
    }
}
