use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// U+FEFF counts as whitespace in browsers but is not White_Space in Unicode.
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("Invalid whitespace regex pattern"));
// Uppercase letters left after lowercasing have no lowercase form (`ℂ`, `ϒ`,
// squared capitals) and are dropped.
static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[[^\w\-]\p{Uppercase}\p{Lt}]+").expect("Invalid word character regex pattern")
});
static NON_WORD_ASCII_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_\-]+").expect("Invalid ASCII word character regex pattern")
});
static HYPHEN_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("Invalid hyphen run regex pattern"));

/// Which characters survive as "word characters" when building a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugStyle {
    /// Unicode letters, digits, marks and connector punctuation are kept.
    #[default]
    Unicode,
    /// Only `[A-Za-z0-9_]` is kept; any other letter is dropped.
    Ascii,
    /// Text is transliterated to ASCII before normalizing.
    Transliterate,
}

impl SlugStyle {
    pub const ALL: [SlugStyle; 3] = [
        SlugStyle::Unicode,
        SlugStyle::Ascii,
        SlugStyle::Transliterate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlugStyle::Unicode => "unicode",
            SlugStyle::Ascii => "ascii",
            SlugStyle::Transliterate => "transliterate",
        }
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlugStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(SlugStyle::Unicode),
            "ascii" => Ok(SlugStyle::Ascii),
            "transliterate" => Ok(SlugStyle::Transliterate),
            other => Err(ParseError::UnknownSlugStyle(other.to_string())),
        }
    }
}

/// Derive a slug from arbitrary text using the default [`SlugStyle::Unicode`].
///
/// The passes run in a fixed order: lowercase, whitespace runs to a single
/// hyphen, strip non-word characters, collapse hyphen runs, then drop one
/// leading and one trailing hyphen. The result never starts or ends with a
/// hyphen, never contains `--` and holds no uppercase characters. Empty input
/// yields an empty slug.
pub fn normalize(text: &str) -> String {
    normalize_with(text, SlugStyle::Unicode)
}

pub fn normalize_with(text: &str, style: SlugStyle) -> String {
    match style {
        SlugStyle::Unicode => run_passes(text, &NON_WORD_REGEX),
        SlugStyle::Ascii => run_passes(text, &NON_WORD_ASCII_REGEX),
        // slugify already lowercases and hyphenates; the passes keep the
        // output shape identical to the other styles.
        SlugStyle::Transliterate => run_passes(&slug::slugify(text), &NON_WORD_ASCII_REGEX),
    }
}

fn run_passes(text: &str, non_word: &Regex) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_REGEX.replace_all(&lowered, "-");
    let stripped = non_word.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN_REGEX.replace_all(&stripped, "-");

    let slug: &str = &collapsed;
    let slug = slug.strip_prefix('-').unwrap_or(slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}
