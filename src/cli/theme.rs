use crate::models::{ColorScheme, FixedSystemScheme};
use crate::{Config, Database, ThemeSwitcher};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, system_dark: bool, command: super::ThemeCommand) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let db = Database::open(&config.storage.path)?;
    db.migrate()?;

    let mut switcher = ThemeSwitcher::new(db, FixedSystemScheme(system_dark), config.theme);

    let scheme = match command {
        super::ThemeCommand::Get => switcher.restore()?,
        super::ThemeCommand::Set { scheme } => {
            switcher.setup()?;
            switcher.set_scheme(scheme)?;
            scheme
        }
        super::ThemeCommand::Clear => {
            switcher.setup()?;
            switcher.set_scheme(ColorScheme::Auto)?;
            ColorScheme::Auto
        }
    };

    println!("scheme: {}", scheme);
    println!("body:   {}", switcher.body());

    Ok(())
}
