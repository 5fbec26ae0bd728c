use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use crate::theme::domain::color_scheme::ColorScheme;
use crate::theme::domain::style_marker::StyleMarkerSink;

/// Class that marks the document root while the dark scheme is active.
pub const DARK_CLASS: &str = "dark";

/// The document root's class list.
///
/// Non-reactive styling keys off the presence of [`DARK_CLASS`]. As a
/// [`StyleMarkerSink`] it toggles that class to match the applied scheme.
#[derive(Debug, Default)]
pub struct ClassList {
    classes: Mutex<BTreeSet<String>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `class` when `enabled`, removes it otherwise.
    pub fn toggle(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.lock().unwrap_or_else(PoisonError::into_inner);
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }

    pub fn is_dark(&self) -> bool {
        self.contains(DARK_CLASS)
    }

    /// Classes in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl StyleMarkerSink for ClassList {
    fn apply(&self, scheme: ColorScheme) {
        self.toggle(DARK_CLASS, scheme.is_dark());
    }
}
