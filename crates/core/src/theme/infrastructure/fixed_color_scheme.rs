use crate::theme::domain::color_scheme::ColorScheme;
use crate::theme::domain::color_scheme_signal::{ColorSchemeSignal, SchemeListener, SignalError};
use crate::theme::domain::subscription::SignalSubscription;

/// A signal pinned to one scheme. It never changes, so listeners are
/// accepted and never called.
pub struct FixedColorScheme(pub ColorScheme);

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> Result<bool, SignalError> {
        Ok(self.0.is_dark())
    }

    fn subscribe(&self, _listener: SchemeListener) -> Result<SignalSubscription, SignalError> {
        Ok(SignalSubscription::inert())
    }
}
