use crate::services::scroll::ScrollTop;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, offset: u32) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let mut button = ScrollTop::new(&config.scroll);

    if button.on_scroll(offset) {
        println!("shown ({})", config.scroll.visible_class);
    } else {
        println!("hidden");
    }

    Ok(())
}
