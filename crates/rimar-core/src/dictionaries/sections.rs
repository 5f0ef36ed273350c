//! Section header synonyms.
//!
//! Matched exactly first, then as a prefix in table order, so longer
//! compound names must precede the shorter names they start with.

use crate::sections::Section;

/// Header spelling → section, in lookup order.
pub const SECTION_SYNONYMS: &[(&str, Section)] = &[
    // hooks
    ("refren", Section::Hook),
    ("chorus", Section::Hook),
    ("hook", Section::Hook),
    ("refrain", Section::Hook),
    ("припев", Section::Hook),
    // pre-hooks
    ("pre-refren", Section::PreHook),
    ("pre-chorus", Section::PreHook),
    ("prechorus", Section::PreHook),
    ("предприпев", Section::PreHook),
    // verses
    ("verse", Section::Verse),
    ("strofa", Section::Verse),
    ("vers", Section::Verse),
    ("couplet", Section::Verse),
    ("куплет", Section::Verse),
    // bridges
    ("bridge", Section::Bridge),
    ("pod", Section::Bridge),
    ("pont", Section::Bridge),
    ("мост", Section::Bridge),
    ("бридж", Section::Bridge),
    // intros and outros
    ("intro", Section::Intro),
    ("интро", Section::Intro),
    ("outro", Section::Outro),
    ("аутро", Section::Outro),
    // post-hooks
    ("post-chorus", Section::PostHook),
    ("post-refren", Section::PostHook),
    ("postchorus", Section::PostHook),
];
