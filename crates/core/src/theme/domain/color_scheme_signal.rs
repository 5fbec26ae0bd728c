use thiserror::Error;

use super::subscription::SignalSubscription;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("color scheme preference is not supported on this host")]
    Unsupported,
    #[error("failed to read color scheme preference: {0}")]
    Detection(String),
}

/// Callback invoked with the new "prefers dark" value on every change.
pub type SchemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// Domain interface for the host's "prefers dark color scheme" signal.
///
/// A signal reports its current value and notifies subscribed listeners
/// whenever the value changes. Registrations are scoped: the returned
/// [`SignalSubscription`] deregisters its listener when dropped.
pub trait ColorSchemeSignal: Send + Sync {
    /// Current "prefers dark" value of the host.
    fn prefers_dark(&self) -> Result<bool, SignalError>;

    /// Registers a change listener.
    fn subscribe(&self, listener: SchemeListener) -> Result<SignalSubscription, SignalError>;

    /// Re-reads the host preference and notifies listeners if it changed.
    ///
    /// Push-based signals have nothing to do here. Default: no-op.
    fn refresh(&self) {}
}
