//! Song sections and bracketed section headers (`[Refren]`, `[Verse 2]`).

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::sections::SECTION_SYNONYMS;

/// Structural label for a block of lyric lines.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Section {
    /// Chorus / refrain.
    Hook,
    /// Verse; also the fallback for unlabeled or unrecognized blocks.
    #[default]
    Verse,
    /// Pre-chorus.
    PreHook,
    /// Bridge.
    Bridge,
    /// Intro.
    Intro,
    /// Outro.
    Outro,
    /// Post-chorus.
    PostHook,
}

impl Section {
    /// Kebab-case identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::Verse => "verse",
            Self::PreHook => "pre-hook",
            Self::Bridge => "bridge",
            Self::Intro => "intro",
            Self::Outro => "outro",
            Self::PostHook => "post-hook",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block of lines with a known section, as produced by a scraper or by
/// [`split_sections`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionHint {
    /// The block's section.
    pub section: Section,
    /// Non-blank lines in order.
    pub lines: Vec<String>,
}

static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*\]$").expect("valid regex"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\d+\s*").expect("valid regex"));

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid regex"));

/// Whether a trimmed line is a bracketed section header.
pub fn is_section_header(line: &str) -> bool {
    HEADER_LINE.is_match(line.trim())
}

/// Normalize a header such as `[Verse 2 (x2)]` to a [`Section`].
///
/// Returns `None` for headers not in the synonym table.
pub fn normalize_section(header: &str) -> Option<Section> {
    let stripped = header
        .trim()
        .trim_matches(|c: char| c == '[' || c == ']')
        .to_lowercase();
    let without_digits = DIGITS.replace_all(&stripped, "");
    let cleaned = PARENTHETICAL.replace_all(&without_digits, "");
    let cleaned = cleaned.trim();

    SECTION_SYNONYMS
        .iter()
        .find(|(name, _)| *name == cleaned)
        .or_else(|| {
            SECTION_SYNONYMS
                .iter()
                .find(|(name, _)| cleaned.starts_with(*name))
        })
        .map(|(_, section)| *section)
}

/// Group lines under their bracketed headers.
///
/// Lines before the first header, and lines under an unrecognized header,
/// land in [`Section::Verse`]. Header lines themselves are dropped, as are
/// blank lines and blocks that end up empty.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sections(text: &str) -> Vec<SectionHint> {
    let mut blocks = Vec::new();
    let mut current = Section::default();
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_section_header(line) {
            if !lines.is_empty() {
                blocks.push(SectionHint {
                    section: current,
                    lines: std::mem::take(&mut lines),
                });
            }
            current = normalize_section(line).unwrap_or_default();
            continue;
        }
        lines.push(line.to_string());
    }

    if !lines.is_empty() {
        blocks.push(SectionHint {
            section: current,
            lines,
        });
    }
    blocks
}
