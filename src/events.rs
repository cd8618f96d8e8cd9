use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use serde::{Deserialize, Serialize};

use crate::key::ResourceKey;

/// One record on the shared playback-state stream.
///
/// The native module publishes these for every key whenever playback starts
/// or stops; handles filter by their own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayChange {
    #[serde(rename = "playerKey")]
    pub key: ResourceKey,
    #[serde(rename = "isPlaying")]
    pub is_playing: bool,
}

pub type PlayListener = Arc<dyn Fn(&PlayChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<u64, PlayListener>,
}

/// Multicast stream of [`PlayChange`] records.
///
/// One hub exists per process, shared between the native service (producer)
/// and every handle (consumers). Listeners are invoked outside the registry
/// lock, so a listener may subscribe or unsubscribe without deadlocking.
#[derive(Default)]
pub struct EventHub {
    registry: Mutex<Registry>,
}

impl EventHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn subscribe(self: &Arc<Self>, listener: PlayListener) -> Subscription {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, listener);
        Subscription {
            hub: Arc::downgrade(self),
            id: Some(id),
        }
    }

    pub fn emit(&self, change: PlayChange) {
        let listeners: Vec<PlayListener> = {
            let registry = self.registry.lock().unwrap();
            registry.listeners.values().cloned().collect()
        };
        for listener in listeners {
            listener(&change);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().unwrap().listeners.len()
    }

    fn unsubscribe(&self, id: u64) {
        self.registry.lock().unwrap().listeners.remove(&id);
    }
}

/// Ownership of one registration with an [`EventHub`].
///
/// Removal happens at most once: explicitly through [`Subscription::remove`],
/// or on drop.
pub struct Subscription {
    hub: Weak<EventHub>,
    id: Option<u64>,
}

impl Subscription {
    /// Remove the registration. Safe to call repeatedly; only the first call
    /// does anything.
    pub fn remove(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(hub) = self.hub.upgrade() {
                hub.unsubscribe(id);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}
