use crate::config::SlugConfig;
use crate::models::{Form, TextField};
use crate::services::slug::{normalize_with, SlugStyle};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Suggests a slug for an admin form while the title is being typed.
///
/// Title edits are debounced: each edit cancels the pending derivation and
/// schedules a new one. When it fires, the slug field is filled only if it is
/// still empty, so a slug typed by hand is never overwritten. Clearing the slug
/// field restores the suggestion immediately.
///
/// The tokio runtime current at construction runs the delayed derivations;
/// building a suggester outside a runtime fails.
pub struct SlugSuggester {
    runtime: Handle,
    title: Arc<dyn TextField>,
    slug: Arc<dyn TextField>,
    delay: Duration,
    style: SlugStyle,
    pending: Option<JoinHandle<()>>,
}

impl SlugSuggester {
    pub fn new(title: Arc<dyn TextField>, slug: Arc<dyn TextField>) -> Result<Self> {
        let runtime =
            Handle::try_current().context("Slug suggester must be created inside a tokio runtime")?;
        Ok(Self {
            runtime,
            title,
            slug,
            delay: DEFAULT_DEBOUNCE,
            style: SlugStyle::default(),
            pending: None,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_style(mut self, style: SlugStyle) -> Self {
        self.style = style;
        self
    }

    /// Wire a suggester to the title and slug inputs of `form`.
    ///
    /// Returns `Ok(None)` when either input is missing; nothing is attached in
    /// that case.
    pub fn attach(form: &Form, config: &SlugConfig) -> Result<Option<Self>> {
        let (Some(title), Some(slug)) = (
            form.field(&config.title_field),
            form.field(&config.slug_field),
        ) else {
            tracing::debug!(
                title_field = %config.title_field,
                slug_field = %config.slug_field,
                "Slug inputs not present, suggester not attached"
            );
            return Ok(None);
        };

        let suggester = Self::new(Arc::new(title), Arc::new(slug))?
            .with_delay(config.debounce())
            .with_style(config.style);
        Ok(Some(suggester))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn style(&self) -> SlugStyle {
        self.style
    }

    /// The slug the current title would produce.
    pub fn suggestion(&self) -> String {
        normalize_with(&self.title.value(), self.style)
    }

    /// Handle an edit of the title input.
    pub fn on_title_changed(&mut self, new_text: &str) {
        self.cancel_pending();

        let deadline = Instant::now() + self.delay;
        let title = Arc::clone(&self.title);
        let slug = Arc::clone(&self.slug);
        let style = self.style;

        tracing::trace!(len = new_text.len(), "Title changed, slug derivation scheduled");

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if slug.is_empty() {
                let suggestion = normalize_with(&title.value(), style);
                tracing::debug!(slug = %suggestion, "Filled empty slug from title");
                slug.set_value(&suggestion);
            }
        }));
    }

    /// Handle an edit of the slug input.
    pub fn on_slug_changed(&mut self, new_text: &str) {
        if new_text.is_empty() {
            let suggestion = self.suggestion();
            tracing::debug!(slug = %suggestion, "Slug cleared, restored suggestion");
            self.slug.set_value(&suggestion);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the scheduled derivation, if any, to run.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::warn!("Slug derivation task failed: {}", e);
                }
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SlugSuggester {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
