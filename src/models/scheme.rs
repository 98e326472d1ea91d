use crate::error::ParseError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
    /// Follow the operating system preference. Never persisted.
    Auto,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            "auto" => Ok(ColorScheme::Auto),
            other => Err(ParseError::UnknownColorScheme(other.to_string())),
        }
    }
}

/// Source of the `prefers-color-scheme: dark` media query result.
pub trait SystemScheme: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// A system preference that never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSystemScheme(pub bool);

impl SystemScheme for FixedSystemScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Class list of the page `<body>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyClasses {
    classes: BTreeSet<String>,
}

impl BodyClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|s| s.as_str())
    }
}

impl fmt::Display for BodyClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(" "))
    }
}
