use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::theme::domain::color_scheme_signal::SchemeListener;
use crate::theme::domain::subscription::SignalSubscription;

type SharedListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Registered listeners of a signal, keyed by registration id.
///
/// Subscriptions only hold a weak reference to the registry, so a
/// subscription that outlives its signal releases into nothing.
#[derive(Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Listeners>>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<u64, SharedListener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SchemeListener) -> SignalSubscription {
        let id = {
            let mut listeners = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.insert(id, Arc::from(listener));
            id
        };
        log::trace!("color scheme listener {id} registered");

        let registry = Arc::downgrade(&self.inner);
        SignalSubscription::new(move || {
            if let Some(inner) = registry.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entries
                    .remove(&id);
                log::trace!("color scheme listener {id} released");
            }
        })
    }

    /// Calls every registered listener with `prefers_dark`.
    ///
    /// The lock is released before listeners run, so a listener may
    /// subscribe or release without deadlocking.
    pub fn notify(&self, prefers_dark: bool) {
        let listeners: Vec<SharedListener> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
