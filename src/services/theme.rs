use crate::config::ThemeConfig;
use crate::models::{BodyClasses, ColorScheme, SystemScheme};
use crate::services::settings::SettingsStore;
use anyhow::Result;

/// Light/dark/auto colour scheme switcher.
///
/// An explicit light or dark choice is persisted under the configured
/// storage key; `auto` is stored as the absence of that key. The scheme is
/// applied by toggling the light and dark classes on the page body.
pub struct ThemeSwitcher<S> {
    store: S,
    system: Box<dyn SystemScheme>,
    config: ThemeConfig,
    body: BodyClasses,
    checked: Option<ColorScheme>,
}

impl<S: SettingsStore> ThemeSwitcher<S> {
    pub fn new(store: S, system: impl SystemScheme + 'static, config: ThemeConfig) -> Self {
        Self {
            store,
            system: Box::new(system),
            config,
            body: BodyClasses::new(),
            checked: None,
        }
    }

    pub fn body(&self) -> &BodyClasses {
        &self.body
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The radio button currently marked as checked by [`setup_switcher`](Self::setup_switcher).
    pub fn checked(&self) -> Option<ColorScheme> {
        self.checked
    }

    pub fn system_scheme(&self) -> ColorScheme {
        if self.system.prefers_dark() {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// The persisted choice. Unrecognised stored values are treated as unset.
    pub fn saved_scheme(&self) -> Result<Option<ColorScheme>> {
        let Some(raw) = self.store.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        match raw.parse::<ColorScheme>() {
            Ok(ColorScheme::Auto) | Err(_) => {
                tracing::warn!(value = %raw, "Ignoring unexpected stored colour scheme");
                Ok(None)
            }
            Ok(scheme) => Ok(Some(scheme)),
        }
    }

    /// The scheme the body classes currently reflect, if any.
    pub fn applied_scheme(&self) -> Option<ColorScheme> {
        if self.body.contains(&self.config.dark_class) {
            Some(ColorScheme::Dark)
        } else if self.body.contains(&self.config.light_class) {
            Some(ColorScheme::Light)
        } else {
            None
        }
    }

    pub fn switch_media(&mut self, scheme: ColorScheme) {
        let resolved = match scheme {
            ColorScheme::Auto => self.system_scheme(),
            other => other,
        };
        match resolved {
            ColorScheme::Dark => {
                self.body.remove(&self.config.light_class);
                self.body.add(&self.config.dark_class);
            }
            _ => {
                self.body.remove(&self.config.dark_class);
                self.body.add(&self.config.light_class);
            }
        }
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) -> Result<()> {
        self.switch_media(scheme);

        match scheme {
            ColorScheme::Auto => self.store.remove(&self.config.storage_key)?,
            other => self.store.set(&self.config.storage_key, other.as_str())?,
        }
        tracing::debug!(scheme = %scheme, "Colour scheme set");
        Ok(())
    }

    /// Check the radio matching the saved choice and apply it.
    pub fn setup_switcher(&mut self) -> Result<Option<ColorScheme>> {
        if let Some(saved) = self.saved_scheme()? {
            self.checked = Some(saved);
            self.switch_media(saved);
        }
        Ok(self.checked)
    }

    pub fn setup_scheme(&mut self) -> Result<()> {
        match self.saved_scheme()? {
            None => self.set_scheme(ColorScheme::Auto),
            Some(saved) if saved != self.system_scheme() => self.set_scheme(saved),
            Some(_) => Ok(()),
        }
    }

    /// Apply the persisted choice, or the system scheme when none is saved,
    /// without writing to the store.
    pub fn restore(&mut self) -> Result<ColorScheme> {
        let scheme = self.saved_scheme()?.unwrap_or(ColorScheme::Auto);
        self.checked = Some(scheme).filter(|s| *s != ColorScheme::Auto);
        self.switch_media(scheme);
        Ok(scheme)
    }

    /// Page-load initialisation: restore the switcher, then the scheme.
    pub fn setup(&mut self) -> Result<()> {
        self.setup_switcher()?;
        self.setup_scheme()
    }

    /// Handle a change event from one of the scheme radios.
    pub fn on_radio_changed(&mut self, value: &str) -> Result<()> {
        let scheme: ColorScheme = value.parse()?;
        self.checked = Some(scheme);
        self.set_scheme(scheme)
    }
}
