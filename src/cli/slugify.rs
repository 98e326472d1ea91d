use crate::services::slug::{normalize_with, SlugStyle};
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, text: &[String], style: Option<SlugStyle>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let style = style.unwrap_or(config.slug.style);

    println!("{}", normalize_with(&text.join(" "), style));

    Ok(())
}
