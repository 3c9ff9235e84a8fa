//! Viewport classification driven by an injected resize signal.
//!
//! The resize signal is modeled as a capability the host hands in, not a
//! singleton, so the watcher stays testable without a real display surface.
//! Subscriptions are guards: dropping one unregisters the listener.

use crate::services::placement::ViewportClass;
use std::sync::{Arc, Mutex};

/// Listener invoked with the new viewport width in pixels.
pub type ResizeListener = Box<dyn Fn(u32) + Send + Sync>;

/// A source of viewport-width change events.
pub trait ResizeSource {
    /// Register a listener; the returned subscription unregisters it when
    /// dropped.
    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription;
}

/// Guard for a registered resize listener.
pub struct ResizeSubscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ResizeSubscription {
    #[must_use]
    pub fn new(cancel: Box<dyn FnOnce() + Send>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, ResizeListener)>,
}

/// In-memory resize broadcaster. Hosts forward their platform resize events
/// through [`ManualResizeSource::emit`]; tests drive it directly.
#[derive(Clone, Default)]
pub struct ManualResizeSource {
    listeners: Arc<Mutex<ListenerTable>>,
}

impl ManualResizeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Broadcast a new viewport width to every live listener.
    pub fn emit(&self, width_px: u32) {
        if let Ok(table) = self.listeners.lock() {
            for (_, listener) in &table.entries {
                listener(width_px);
            }
        }
    }
}

impl ResizeSource for ManualResizeSource {
    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription {
        let id = match self.listeners.lock() {
            Ok(mut table) => {
                let id = table.next_id;
                table.next_id += 1;
                table.entries.push((id, listener));
                id
            }
            Err(_) => return ResizeSubscription::new(Box::new(|| {})),
        };

        let listeners = Arc::clone(&self.listeners);
        ResizeSubscription::new(Box::new(move || {
            if let Ok(mut table) = listeners.lock() {
                table.entries.retain(|(entry_id, _)| *entry_id != id);
            }
        }))
    }
}

/// Tracks the current viewport class off a resize signal.
pub struct ViewportWatcher {
    class: Arc<Mutex<ViewportClass>>,
    _subscription: ResizeSubscription,
}

impl ViewportWatcher {
    /// Subscribe to `source`, seeding the class from `initial_width_px`.
    #[must_use]
    pub fn new(source: &dyn ResizeSource, initial_width_px: u32) -> Self {
        let class = Arc::new(Mutex::new(ViewportClass::from_width(initial_width_px)));
        let shared = Arc::clone(&class);
        let subscription = source.subscribe(Box::new(move |width_px| {
            if let Ok(mut current) = shared.lock() {
                *current = ViewportClass::from_width(width_px);
            }
        }));

        Self {
            class,
            _subscription: subscription,
        }
    }

    /// Latest observed viewport class.
    #[must_use]
    pub fn current(&self) -> ViewportClass {
        self.class.lock().map_or_else(|_| ViewportClass::default(), |class| *class)
    }
}
