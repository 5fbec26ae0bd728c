use std::sync::{Mutex, PoisonError};

use super::listener_registry::ListenerRegistry;
use super::platform;
use crate::theme::domain::color_scheme_signal::{ColorSchemeSignal, SchemeListener, SignalError};
use crate::theme::domain::subscription::SignalSubscription;

type Detector = fn() -> Result<bool, SignalError>;

/// The operating system's color scheme preference.
///
/// The OS offers no portable push notification, so the host drives
/// [`refresh`](ColorSchemeSignal::refresh) periodically (the desktop app does
/// it from a timer subscription). Listeners are called when the value read
/// differs from the last one seen, including the first successful read after
/// the host could not be queried.
pub struct SystemColorScheme {
    detector: Detector,
    last_seen: Mutex<Option<bool>>,
    listeners: ListenerRegistry,
}

impl SystemColorScheme {
    pub fn new() -> Self {
        Self::with_detector(platform::prefers_dark)
    }

    /// Uses `detector` instead of querying the operating system.
    pub fn with_detector(detector: Detector) -> Self {
        Self {
            detector,
            last_seen: Mutex::new(None),
            listeners: ListenerRegistry::new(),
        }
    }

    fn detect(&self) -> Result<bool, SignalError> {
        let prefers_dark = (self.detector)()?;
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Some(prefers_dark);
        Ok(prefers_dark)
    }
}

impl Default for SystemColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for SystemColorScheme {
    fn prefers_dark(&self) -> Result<bool, SignalError> {
        self.detect()
    }

    fn subscribe(&self, listener: SchemeListener) -> Result<SignalSubscription, SignalError> {
        Ok(self.listeners.subscribe(listener))
    }

    fn refresh(&self) {
        let current = match (self.detector)() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Color scheme refresh failed: {e}");
                return;
            }
        };

        let changed = {
            let mut last_seen = self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
            let changed = *last_seen != Some(current);
            *last_seen = Some(current);
            changed
        };

        if changed {
            log::debug!("System color scheme changed (prefers dark: {current})");
            self.listeners.notify(current);
        }
    }
}
