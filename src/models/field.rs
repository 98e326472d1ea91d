use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// A single-line text input whose value can be read and replaced.
pub trait TextField: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn is_empty(&self) -> bool {
        self.value().is_empty()
    }
}

/// In-process stand-in for an `<input>` element.
///
/// Clones share the same value, so a handle given to a component observes
/// edits made through any other handle. Every write is broadcast to
/// subscribers, including writes that leave the value unchanged.
#[derive(Debug, Clone)]
pub struct InputField {
    id: String,
    value: Arc<watch::Sender<String>>,
}

impl InputField {
    pub fn new(id: impl Into<String>, initial: impl Into<String>) -> Self {
        let (tx, _) = watch::channel(initial.into());
        Self {
            id: id.into(),
            value: Arc::new(tx),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Receive a notification each time the value is written.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.value.subscribe()
    }
}

impl TextField for InputField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        self.value.send_replace(value.to_string());
    }
}

/// The inputs of one admin form, looked up by element id.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: HashMap<String, InputField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input, replacing any existing one with the same id.
    pub fn insert(&mut self, id: &str, initial: &str) -> InputField {
        let field = InputField::new(id, initial);
        self.fields.insert(id.to_string(), field.clone());
        field
    }

    pub fn with_field(mut self, id: &str, initial: &str) -> Self {
        self.insert(id, initial);
        self
    }

    pub fn field(&self, id: &str) -> Option<InputField> {
        self.fields.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }
}
