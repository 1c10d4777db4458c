//! Core types and logic for the gift idea generator.
//!
//! The library side is deliberately DOM-free: domain enums, slider geometry,
//! the idea catalog and the slider registry all live here so they can be
//! unit-tested on the host target. The binary wires them to the browser.

use std::fmt;

pub mod catalog;
pub mod config;
pub mod geometry;
pub mod registry;

/// Who the gift is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    Colleagues,
    Partner,
    Family,
    Friends,
}

impl Recipient {
    pub const ALL: [Recipient; 4] = [
        Recipient::Colleagues,
        Recipient::Partner,
        Recipient::Family,
        Recipient::Friends,
    ];

    /// Form value / DOM id fragment.
    pub fn value(self) -> &'static str {
        match self {
            Recipient::Colleagues => "colleagues",
            Recipient::Partner => "partner",
            Recipient::Family => "family",
            Recipient::Friends => "friends",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recipient::Colleagues => "Colleagues",
            Recipient::Partner => "Partner",
            Recipient::Family => "Family",
            Recipient::Friends => "Friends",
        }
    }

    /// Status line typed out when this recipient is picked.
    pub fn scan_message(self) -> &'static str {
        match self {
            Recipient::Colleagues => "Scanning office routines",
            Recipient::Partner => "ROMANCE program launched",
            Recipient::Family => "Warmth level set to 100%",
            Recipient::Friends => "Analyzing the funniest memories",
        }
    }
}

/// Mood filter of the idea form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Playful,
    Cozy,
    Bold,
    Sentimental,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Playful, Mood::Cozy, Mood::Bold, Mood::Sentimental];

    pub fn value(self) -> &'static str {
        match self {
            Mood::Playful => "playful",
            Mood::Cozy => "cozy",
            Mood::Bold => "bold",
            Mood::Sentimental => "sentimental",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Playful => "Playful",
            Mood::Cozy => "Cozy",
            Mood::Bold => "Bold",
            Mood::Sentimental => "Sentimental",
        }
    }
}

/// Accent color choices; each maps to a fixed hex value and a matching
/// indicator artwork class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeaColor {
    Azure,
    Lime,
    Violet,
    Cyan,
}

impl IdeaColor {
    pub const ALL: [IdeaColor; 4] = [
        IdeaColor::Azure,
        IdeaColor::Lime,
        IdeaColor::Violet,
        IdeaColor::Cyan,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            IdeaColor::Azure => "#4798FF",
            IdeaColor::Lime => "#A8FF82",
            IdeaColor::Violet => "#9761DB",
            IdeaColor::Cyan => "#0DFDF2",
        }
    }

    /// Class applied to the slider indicator so CSS can swap its artwork.
    pub fn indicator_class(self) -> &'static str {
        match self {
            IdeaColor::Azure => "range-box--azure",
            IdeaColor::Lime => "range-box--lime",
            IdeaColor::Violet => "range-box--violet",
            IdeaColor::Cyan => "range-box--cyan",
        }
    }
}

/// Complexity band derived from the slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    Min,
    Max,
}

impl Complexity {
    pub fn from_value(value: f64) -> Self {
        if value > config::COMPLEXITY_SPLIT {
            Complexity::Max
        } else {
            Complexity::Min
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Min => write!(f, "min"),
            Complexity::Max => write!(f, "max"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_band_splits_above_threshold() {
        assert_eq!(Complexity::from_value(0.0), Complexity::Min);
        assert_eq!(Complexity::from_value(config::COMPLEXITY_SPLIT), Complexity::Min);
        assert_eq!(
            Complexity::from_value(config::COMPLEXITY_SPLIT + 1.0),
            Complexity::Max
        );
        assert_eq!(Complexity::from_value(100.0), Complexity::Max);
    }

    #[test]
    fn complexity_displays_as_band_name() {
        assert_eq!(Complexity::Min.to_string(), "min");
        assert_eq!(Complexity::Max.to_string(), "max");
    }

    #[test]
    fn form_values_are_distinct() {
        let mut values: Vec<&str> = Recipient::ALL.iter().map(|r| r.value()).collect();
        values.extend(Mood::ALL.iter().map(|m| m.value()));
        let before = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), before);
    }
}
