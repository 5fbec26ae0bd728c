use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::domain::color_scheme::ColorScheme;
use super::domain::color_scheme_signal::ColorSchemeSignal;
use super::domain::style_marker::StyleMarkerSink;
use super::domain::subscription::SignalSubscription;

/// The shared dark-mode flag. Starts light until the OS preference is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

struct ThemeShared {
    state: Mutex<ThemeState>,
    /// Serializes writers. `mounted` only changes while this is held, so a
    /// writer that got past the check finishes before unmount completes.
    writer: Mutex<()>,
    marker: Arc<dyn StyleMarkerSink>,
    mounted: AtomicBool,
}

impl ThemeShared {
    /// Single update path for OS notifications and setter calls.
    ///
    /// The state lock is released before the marker runs, so a sink may read
    /// the theme through a [`ThemeHandle`]. It must not write it.
    fn apply(&self, is_dark_mode: bool) -> bool {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.mounted.load(Ordering::SeqCst) {
            log::debug!("Ignoring dark mode update ({is_dark_mode}) after unmount");
            return false;
        }
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_dark_mode = is_dark_mode;
        let scheme = ColorScheme::from_dark(is_dark_mode);
        self.marker.apply(scheme);
        log::debug!("Theme set to {scheme}");
        true
    }

    fn unmount(&self) {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.mounted.store(false, Ordering::SeqCst);
    }

    fn snapshot(&self) -> ThemeState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns the theme state of one application instance.
///
/// Mounting registers a single listener on the OS color scheme signal and
/// synchronizes with the current preference. Dropping the provider unmounts
/// it: the listener is released and every outstanding [`ThemeHandle`] goes
/// inert.
pub struct ThemeProvider {
    shared: Arc<ThemeShared>,
    subscription: Option<SignalSubscription>,
}

impl ThemeProvider {
    pub fn mount(signal: &dyn ColorSchemeSignal, marker: Arc<dyn StyleMarkerSink>) -> Self {
        let shared = Arc::new(ThemeShared {
            state: Mutex::new(ThemeState::default()),
            writer: Mutex::new(()),
            marker,
            mounted: AtomicBool::new(true),
        });

        // Subscribe before the initial read so a change in between is not lost.
        let weak = Arc::downgrade(&shared);
        let subscription = match signal.subscribe(Box::new(move |prefers_dark| {
            if let Some(shared) = weak.upgrade() {
                shared.apply(prefers_dark);
            }
        })) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                log::warn!("Not following OS color scheme changes: {e}");
                None
            }
        };

        match signal.prefers_dark() {
            Ok(prefers_dark) => {
                shared.apply(prefers_dark);
            }
            Err(e) => {
                log::warn!("Could not read OS color scheme, staying light: {e}");
            }
        }

        log::info!(
            "Theme provider mounted ({})",
            ColorScheme::from_dark(shared.snapshot().is_dark_mode)
        );

        Self {
            shared,
            subscription,
        }
    }

    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            shared: self.shared.clone(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.shared.snapshot().is_dark_mode
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark_mode())
    }

    /// Whether an OS listener is registered.
    pub fn is_following_os(&self) -> bool {
        self.subscription.is_some()
    }

    /// Tears the provider down. Same as dropping it.
    pub fn unmount(self) {}
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        self.shared.unmount();
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
        log::debug!("Theme provider unmounted");
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("state", &self.shared.snapshot())
            .field("following_os", &self.is_following_os())
            .finish()
    }
}

/// Cheap, cloneable read/write access to a provider's state.
#[derive(Clone)]
pub struct ThemeHandle {
    shared: Arc<ThemeShared>,
}

impl ThemeHandle {
    pub fn is_dark_mode(&self) -> bool {
        self.shared.snapshot().is_dark_mode
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark_mode())
    }

    /// Applies `is_dark_mode` to the state and the global style marker.
    ///
    /// No-op once the provider has been unmounted.
    pub fn set_dark_mode(&self, is_dark_mode: bool) {
        self.shared.apply(is_dark_mode);
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode(!self.is_dark_mode());
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("state", &self.shared.snapshot())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
