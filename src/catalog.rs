//! Static catalog of gift ideas, keyed by the submitted filter combination.
//!
//! Mirrors the page's lookup contract: a curated entry per
//! (recipient, complexity, mood) key where one exists, otherwise a default.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Complexity, Mood, Recipient};

/// One renderable result: the card front shows `title` + `desc`, the back
/// shows `how_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeaEntry {
    pub title: &'static str,
    pub desc: &'static str,
    pub how_to: &'static str,
}

pub const DEFAULT_IDEA: IdeaEntry = IdeaEntry {
    title: "A little surprise box",
    desc: "A small box of favorite snacks, a handwritten note and one tiny inside joke.",
    how_to: "Pick three things they always reach for, wrap them badly on purpose, \
             and write the note by hand.",
};

type CatalogKey = (Recipient, Complexity, Mood);

static CATALOG: Lazy<HashMap<CatalogKey, IdeaEntry>> = Lazy::new(|| {
    use Complexity::*;
    use Mood::*;
    use Recipient::*;

    HashMap::from([
        (
            (Colleagues, Min, Playful),
            IdeaEntry {
                title: "Desk trophy ceremony",
                desc: "A tiny engraved trophy for the office's most niche achievement.",
                how_to: "Order a small trophy, invent a category only they could win, \
                         and hold a thirty-second ceremony by the coffee machine.",
            },
        ),
        (
            (Colleagues, Max, Bold),
            IdeaEntry {
                title: "Escape-room lunch break",
                desc: "Book the whole team into an escape room over a long lunch.",
                how_to: "Find a room within walking distance, clear it with the \
                         calendar, and keep the destination secret until the door.",
            },
        ),
        (
            (Partner, Min, Cozy),
            IdeaEntry {
                title: "Breakfast in reverse",
                desc: "Their favorite dinner served as breakfast in bed.",
                how_to: "Prep everything the night before and set an alarm twenty \
                         minutes earlier than theirs.",
            },
        ),
        (
            (Partner, Max, Sentimental),
            IdeaEntry {
                title: "Year-one time capsule",
                desc: "A sealed box of tickets, photos and notes from your first year, \
                       to be opened on a date you pick together.",
                how_to: "Collect the artifacts quietly over a few weeks, seal the box \
                         together, and write the opening date on the lid.",
            },
        ),
        (
            (Partner, Max, Playful),
            IdeaEntry {
                title: "City scavenger date",
                desc: "A trail of clues through the places that matter to you two.",
                how_to: "Write five clues, plant them a day ahead, and end the trail \
                         where you first met.",
            },
        ),
        (
            (Family, Min, Cozy),
            IdeaEntry {
                title: "Recipe rescue night",
                desc: "Cook the family dish nobody has made since grandma did.",
                how_to: "Call the relative who remembers it best, shop together, and \
                         let everyone own one step of the recipe.",
            },
        ),
        (
            (Family, Max, Sentimental),
            IdeaEntry {
                title: "Voices album",
                desc: "A recorded album of every family member telling one story.",
                how_to: "Record each person separately, keep clips under three \
                         minutes, and print a cover with everyone's name.",
            },
        ),
        (
            (Friends, Min, Playful),
            IdeaEntry {
                title: "Inside-joke sticker pack",
                desc: "Custom stickers of the group's most-quoted moments.",
                how_to: "Shortlist the jokes in the group chat, sketch or commission \
                         simple art, and order a pack for everyone.",
            },
        ),
        (
            (Friends, Max, Bold),
            IdeaEntry {
                title: "Mystery day trip",
                desc: "A one-day trip where only the departure time is announced.",
                how_to: "Pick somewhere two hours away, handle tickets yourself, and \
                         reveal the destination at the platform.",
            },
        ),
        (
            (Friends, Max, Sentimental),
            IdeaEntry {
                title: "Friendship yearbook",
                desc: "A printed mini-yearbook of the past year of the group.",
                how_to: "Gather one photo and one caption from each friend per month, \
                         lay it out in a template, and print a copy each.",
            },
        ),
    ])
});

/// Look up the idea for a submitted filter combination.
///
/// Unset recipient or mood, or a combination with no curated entry, falls back
/// to [`DEFAULT_IDEA`].
pub fn lookup(
    recipient: Option<Recipient>,
    complexity: Complexity,
    mood: Option<Mood>,
) -> &'static IdeaEntry {
    match (recipient, mood) {
        (Some(r), Some(m)) => CATALOG.get(&(r, complexity, m)).unwrap_or(&DEFAULT_IDEA),
        _ => &DEFAULT_IDEA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_combination_returns_its_entry() {
        let entry = lookup(Some(Recipient::Partner), Complexity::Min, Some(Mood::Cozy));
        assert_eq!(entry.title, "Breakfast in reverse");
    }

    #[test]
    fn unknown_combination_falls_back_to_default() {
        let entry = lookup(Some(Recipient::Colleagues), Complexity::Min, Some(Mood::Sentimental));
        assert_eq!(*entry, DEFAULT_IDEA);
    }

    #[test]
    fn unset_fields_fall_back_to_default() {
        assert_eq!(*lookup(None, Complexity::Max, Some(Mood::Bold)), DEFAULT_IDEA);
        assert_eq!(*lookup(Some(Recipient::Friends), Complexity::Min, None), DEFAULT_IDEA);
    }

    #[test]
    fn catalog_entries_are_complete() {
        for entry in CATALOG.values() {
            assert!(!entry.title.is_empty());
            assert!(!entry.desc.is_empty());
            assert!(!entry.how_to.is_empty());
        }
    }
}
