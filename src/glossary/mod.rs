//! Searchable glossary of accessibility terminology.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

const ENTRIES: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "ARIA",
        definition: "Accessible Rich Internet Applications - a set of attributes that define ways to make web content and applications more accessible to people with disabilities.",
    },
    GlossaryEntry {
        term: "Alt Text",
        definition: "Alternative text that describes the content and function of an image.",
    },
    GlossaryEntry {
        term: "Screen Reader",
        definition: "A software application that enables people with visual impairments to use a computer by reading aloud the content displayed on the screen.",
    },
    GlossaryEntry {
        term: "WCAG",
        definition: "Web Content Accessibility Guidelines - a set of recommendations for making web content more accessible.",
    },
    GlossaryEntry {
        term: "Keyboard Navigation",
        definition: "The ability to access and interact with all parts of a website using only a keyboard.",
    },
    GlossaryEntry {
        term: "Color Contrast",
        definition: "The difference in light between foreground (usually text) and background colors, which affects readability.",
    },
    GlossaryEntry {
        term: "Focus Indicator",
        definition: "A visual cue that shows which element on a web page currently has keyboard focus.",
    },
    GlossaryEntry {
        term: "Semantic HTML",
        definition: "Using HTML elements for their intended purpose, which helps convey the structure and meaning of web content.",
    },
];

/// All glossary entries in display order.
pub fn all() -> &'static [GlossaryEntry] {
    ENTRIES
}

/// Case-insensitive substring search over both term and definition.
/// An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    ENTRIES
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.term.to_lowercase().contains(&needle)
                || e.definition.to_lowercase().contains(&needle)
        })
        .collect()
}
