use std::sync::atomic::{AtomicBool, Ordering};

use super::listener_registry::ListenerRegistry;
use crate::theme::domain::color_scheme_signal::{ColorSchemeSignal, SchemeListener, SignalError};
use crate::theme::domain::subscription::SignalSubscription;

/// A color scheme signal driven by the caller instead of the OS.
///
/// Used by tests and by hosts that feed the preference from elsewhere
/// (an embedding webview, a remote setting). [`unsupported`](Self::unsupported)
/// builds a signal that behaves like a host without the capability.
pub struct SimulatedColorScheme {
    prefers_dark: AtomicBool,
    supported: bool,
    listeners: ListenerRegistry,
}

impl SimulatedColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            supported: true,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            prefers_dark: AtomicBool::new(false),
            supported: false,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Changes the simulated preference and fires a change notification.
    ///
    /// Like a media query, listeners only hear about actual changes.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let previous = self.prefers_dark.swap(prefers_dark, Ordering::SeqCst);
        if previous != prefers_dark && self.supported {
            self.listeners.notify(prefers_dark);
        }
    }

    /// Number of live listener registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ColorSchemeSignal for SimulatedColorScheme {
    fn prefers_dark(&self) -> Result<bool, SignalError> {
        if !self.supported {
            return Err(SignalError::Unsupported);
        }
        Ok(self.prefers_dark.load(Ordering::SeqCst))
    }

    fn subscribe(&self, listener: SchemeListener) -> Result<SignalSubscription, SignalError> {
        if !self.supported {
            return Err(SignalError::Unsupported);
        }
        Ok(self.listeners.subscribe(listener))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_reports_initial_value() {
        assert_eq!(SimulatedColorScheme::new(true).prefers_dark(), Ok(true));
        assert_eq!(SimulatedColorScheme::new(false).prefers_dark(), Ok(false));
    }

    #[test]
    fn test_notifies_only_on_change() {
        let signal = SimulatedColorScheme::new(false);
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let _sub = signal
            .subscribe(Box::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        signal.set_prefers_dark(false);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        signal.set_prefers_dark(true);
        signal.set_prefers_dark(true);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(signal.prefers_dark(), Ok(true));
    }

    #[test]
    fn test_unsupported_rejects_reads_and_subscriptions() {
        let signal = SimulatedColorScheme::unsupported();
        assert_eq!(signal.prefers_dark(), Err(SignalError::Unsupported));
        assert!(signal.subscribe(Box::new(|_| {})).is_err());
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_listener_count_tracks_subscriptions() {
        let signal = SimulatedColorScheme::new(false);
        let sub = signal.subscribe(Box::new(|_| {})).unwrap();
        assert_eq!(signal.listener_count(), 1);
        drop(sub);
        assert_eq!(signal.listener_count(), 0);
    }
}
