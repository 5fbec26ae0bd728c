use thiserror::Error;

use super::domain::color_scheme::ColorScheme;
use super::provider::{ThemeHandle, ThemeProvider};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme accessed outside of a ThemeProvider")]
    NoProvider,
}

/// Theme capability passed down the view tree by reference.
///
/// A context built with [`ThemeContext::empty`] has no provider; lookups
/// through it see [`ThemeAccessor::Detached`].
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    handle: Option<ThemeHandle>,
}

impl ThemeContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn provided_by(provider: &ThemeProvider) -> Self {
        Self {
            handle: Some(provider.handle()),
        }
    }

    pub fn is_provided(&self) -> bool {
        self.handle.is_some()
    }
}

impl From<&ThemeProvider> for ThemeContext {
    fn from(provider: &ThemeProvider) -> Self {
        Self::provided_by(provider)
    }
}

/// What a consumer gets back from [`use_theme`].
#[derive(Debug, Clone)]
pub enum ThemeAccessor {
    Provided(ThemeHandle),
    /// No enclosing provider: reads as light, writes are dropped.
    Detached,
}

impl ThemeAccessor {
    pub fn is_dark_mode(&self) -> bool {
        match self {
            ThemeAccessor::Provided(handle) => handle.is_dark_mode(),
            ThemeAccessor::Detached => false,
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark_mode())
    }

    pub fn set_dark_mode(&self, is_dark_mode: bool) {
        match self {
            ThemeAccessor::Provided(handle) => handle.set_dark_mode(is_dark_mode),
            ThemeAccessor::Detached => {
                log::debug!("set_dark_mode({is_dark_mode}) ignored: no theme provider");
            }
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode(!self.is_dark_mode());
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, ThemeAccessor::Provided(_))
    }
}

/// Looks up the theme in `context`, degrading to [`ThemeAccessor::Detached`].
pub fn use_theme(context: &ThemeContext) -> ThemeAccessor {
    match &context.handle {
        Some(handle) => ThemeAccessor::Provided(handle.clone()),
        None => ThemeAccessor::Detached,
    }
}

/// Like [`use_theme`], but a missing provider is an error.
pub fn try_use_theme(context: &ThemeContext) -> Result<ThemeAccessor, ThemeError> {
    match use_theme(context) {
        ThemeAccessor::Detached => Err(ThemeError::NoProvider),
        accessor => Ok(accessor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::infrastructure::class_list::ClassList;
    use crate::theme::infrastructure::simulated_color_scheme::SimulatedColorScheme;
    use std::sync::Arc;

    #[test]
    fn test_detached_accessor_is_inert() {
        let theme = use_theme(&ThemeContext::empty());
        assert!(!theme.is_provided());
        assert!(!theme.is_dark_mode());

        theme.set_dark_mode(true);
        theme.toggle_dark_mode();
        assert!(!theme.is_dark_mode());
        assert_eq!(theme.color_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_try_use_theme_without_provider_errors() {
        let err = try_use_theme(&ThemeContext::empty()).unwrap_err();
        assert_eq!(err, ThemeError::NoProvider);
        assert!(err.to_string().contains("ThemeProvider"));
    }

    #[test]
    fn test_provided_accessor_shares_state() {
        let signal = SimulatedColorScheme::new(false);
        let marker = Arc::new(ClassList::new());
        let provider = ThemeProvider::mount(&signal, marker.clone());
        let context = ThemeContext::from(&provider);
        assert!(context.is_provided());

        let writer = try_use_theme(&context).unwrap();
        let reader = use_theme(&context.clone());
        writer.set_dark_mode(true);

        assert!(reader.is_dark_mode());
        assert!(provider.is_dark_mode());
        assert!(marker.is_dark());
    }
}
