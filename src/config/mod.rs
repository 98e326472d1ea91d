use crate::services::slug::SlugStyle;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub slug: SlugConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlugConfig {
    /// Quiet period after the last title edit before a slug is suggested
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub style: SlugStyle,
    #[serde(default = "default_title_field")]
    pub title_field: String,
    #[serde(default = "default_slug_field")]
    pub slug_field: String,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            style: SlugStyle::default(),
            title_field: default_title_field(),
            slug_field: default_slug_field(),
        }
    }
}

impl SlugConfig {
    pub const MAX_DEBOUNCE_MS: u64 = 10_000;

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            anyhow::bail!("slug.debounce_ms must be greater than 0");
        }
        if self.debounce_ms > Self::MAX_DEBOUNCE_MS {
            anyhow::bail!(
                "slug.debounce_ms must be {} or less",
                Self::MAX_DEBOUNCE_MS
            );
        }
        if self.title_field.is_empty() || self.slug_field.is_empty() {
            anyhow::bail!("slug.title_field and slug.slug_field must not be empty");
        }
        if self.title_field == self.slug_field {
            anyhow::bail!(
                "slug.title_field and slug.slug_field must differ (both are '{}')",
                self.title_field
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_light_class")]
    pub light_class: String,
    #[serde(default = "default_dark_class")]
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            light_class: default_light_class(),
            dark_class: default_dark_class(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            anyhow::bail!("theme.storage_key must not be empty");
        }
        if self.light_class.is_empty() || self.dark_class.is_empty() {
            anyhow::bail!("theme.light_class and theme.dark_class must not be empty");
        }
        if self.light_class == self.dark_class {
            anyhow::bail!(
                "theme.light_class and theme.dark_class must differ (both are '{}')",
                self.light_class
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrollConfig {
    /// Offset in pixels past which the button is shown
    #[serde(default = "default_scroll_threshold")]
    pub threshold: u32,
    #[serde(default = "default_visible_class")]
    pub visible_class: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: default_scroll_threshold(),
            visible_class: default_visible_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_title_field() -> String {
    "id_title".to_string()
}

fn default_slug_field() -> String {
    "id_slug".to_string()
}

fn default_storage_key() -> String {
    "color-scheme".to_string()
}

fn default_light_class() -> String {
    "default_scheme".to_string()
}

fn default_dark_class() -> String {
    "dark_scheme".to_string()
}

fn default_scroll_threshold() -> u32 {
    100
}

fn default_visible_class() -> String {
    "showBtn".to_string()
}

fn default_storage_path() -> String {
    "data/admin-assist.db".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                "Config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// The configuration as TOML, every default spelled out.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.slug.validate()?;
        self.theme.validate()?;
        if self.scroll.visible_class.is_empty() {
            anyhow::bail!("scroll.visible_class must not be empty");
        }
        if self.storage.path.is_empty() {
            anyhow::bail!("storage.path must not be empty");
        }
        Ok(())
    }
}
