use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    if !config_path.exists() {
        println!("# {} not found, showing defaults", config_path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
