use crate::config::ScrollConfig;

/// "Back to top" button bound to the main scroll section.
#[derive(Debug, Clone)]
pub struct ScrollTop {
    threshold: u32,
    visible_class: String,
    offset: u32,
    visible: bool,
}

impl ScrollTop {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.threshold,
            visible_class: config.visible_class.clone(),
            offset: 0,
            visible: false,
        }
    }

    /// Record the section's scroll offset and return whether the button shows.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.offset = offset;
        self.visible = offset > self.threshold;
        self.visible
    }

    /// Scroll the section back to the top.
    ///
    /// Visibility is left alone; the scroll event that follows hides the button.
    pub fn on_click(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The class the button carries in its current state.
    pub fn button_class(&self) -> Option<&str> {
        self.visible.then_some(self.visible_class.as_str())
    }
}
