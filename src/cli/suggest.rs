use crate::models::{Form, TextField};
use crate::{Config, SlugSuggester};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

const SLUG_PREFIX: &str = "slug:";

pub async fn run(config_path: &Path, initial_slug: &str) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let form = Form::new()
        .with_field(&config.slug.title_field, "")
        .with_field(&config.slug.slug_field, initial_slug);

    let mut suggester =
        SlugSuggester::attach(&form, &config.slug)?.context("Slug form inputs are missing")?;
    let title = form
        .field(&config.slug.title_field)
        .context("Title input is missing")?;
    let slug = form
        .field(&config.slug.slug_field)
        .context("Slug input is missing")?;

    let mut changes = slug.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!(
        "Suggesting slugs after {}ms of quiet ({} style)",
        suggester.delay().as_millis(),
        suggester.style()
    );

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Some(rest) = line.strip_prefix(SLUG_PREFIX) {
                    let value = rest.trim();
                    slug.set_value(value);
                    suggester.on_slug_changed(value);
                } else {
                    title.set_value(&line);
                    suggester.on_title_changed(&line);
                }
            }
            Ok(()) = changes.changed() => {
                println!("{}", changes.borrow_and_update().as_str());
            }
        }
    }

    suggester.settle().await;
    if changes.has_changed().unwrap_or(false) {
        println!("{}", changes.borrow_and_update().as_str());
    }

    Ok(())
}
