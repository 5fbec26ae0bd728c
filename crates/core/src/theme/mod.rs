//! Light/dark theme capability.
//!
//! - [`ThemeProvider`]: owns the dark-mode flag, follows the OS preference
//! - [`ThemeContext`]: the capability handed down the view tree
//! - [`use_theme`] / [`try_use_theme`]: accessor lookup
//! - [`ColorSchemeSignal`]: the host's "prefers dark" signal
//! - [`StyleMarkerSink`]: the shell-owned global style marker

pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod provider;

pub use context::{try_use_theme, use_theme, ThemeAccessor, ThemeContext, ThemeError};
pub use domain::color_scheme::ColorScheme;
pub use domain::color_scheme_signal::{ColorSchemeSignal, SchemeListener, SignalError};
pub use domain::style_marker::{NullStyleMarker, StyleMarkerSink};
pub use domain::subscription::SignalSubscription;
pub use provider::{ThemeHandle, ThemeProvider, ThemeState};
