/// Scoped registration on a [`ColorSchemeSignal`](super::color_scheme_signal::ColorSchemeSignal).
///
/// The listener stays registered for as long as this value lives. Dropping it
/// (or calling [`release`](Self::release)) deregisters the listener, so no
/// callback can reach an owner that has already been torn down.
#[must_use = "dropping a subscription immediately deregisters its listener"]
pub struct SignalSubscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl SignalSubscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release, for signals that never change.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Deregisters the listener now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for SignalSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
