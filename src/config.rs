//! Application-level configuration constants.

// Slider geometry
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
/// Half-extent used when the thumb has not been laid out yet (px).
pub const FALLBACK_THUMB_HALF_PX: f64 = 14.0;
/// Viewport widths at or below this get a horizontal slider.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Two values closer than this count as the same value (no-op guard).
pub const VALUE_EPSILON: f64 = 1e-9;

// UI behavior
pub const TYPING_INTERVAL_MS: u32 = 50;
pub const TYPING_CURSOR: char = '|';
/// Complexity values above this read as "max", at or below as "min".
pub const COMPLEXITY_SPLIT: f64 = 30.0;

// Form wiring
pub const COMPLEXITY_SLIDER_ID: &str = "complexity";
pub const SUBMIT_LABEL: &str = "Generate an idea";
pub const SUBMIT_DISABLED_LABEL: &str = "Change something in the filters";
