use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::EventHub;
use crate::platform::Platform;
use crate::service::SoundService;
use crate::source::AssetResolver;

/// Well-known directories reported by the native module at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDirs {
    pub main_bundle: String,
    pub documents: String,
    pub library: String,
    pub caches: String,
}

/// Process-wide wiring for the sound bridge.
///
/// Created once at startup and cloned into each [`crate::SoundHandle`];
/// clones share the same service, event hub, and resolver. Replaces the
/// scattered module-level globals of the native bindings with one explicit
/// value.
#[derive(Clone)]
pub struct SoundContext {
    pub platform: Platform,
    pub service: Arc<dyn SoundService>,
    pub assets: Arc<dyn AssetResolver>,
    pub events: Arc<EventHub>,
    pub dirs: BundleDirs,
}

impl SoundContext {
    pub fn new(
        platform: Platform,
        service: Arc<dyn SoundService>,
        assets: Arc<dyn AssetResolver>,
        events: Arc<EventHub>,
    ) -> Self {
        Self {
            platform,
            service,
            assets,
            events,
            dirs: BundleDirs::default(),
        }
    }

    pub fn with_dirs(mut self, dirs: BundleDirs) -> Self {
        self.dirs = dirs;
        self
    }
}
