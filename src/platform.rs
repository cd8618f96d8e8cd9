use serde::{Deserialize, Serialize};

/// Which native sound module this process is bridged to.
///
/// The three modules expose almost the same entry points with inconsistent
/// calling conventions. Every difference is expressed as a predicate here and
/// dispatched on explicitly, so no operation has to re-derive platform facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Ios,
    Android,
    Windows,
}

impl Platform {
    /// Volume takes separate left/right arguments (duplicated by the caller).
    pub fn has_stereo_volume(self) -> bool {
        matches!(self, Platform::Android | Platform::Windows)
    }

    /// Looping is a "loop forever" boolean rather than an explicit loop count.
    pub fn loops_as_flag(self) -> bool {
        matches!(self, Platform::Android | Platform::Windows)
    }

    pub fn supports_speed(self) -> bool {
        !matches!(self, Platform::Windows)
    }

    pub fn has_native_reset(self) -> bool {
        matches!(self, Platform::Android)
    }

    /// Whether the native module publishes play-change records at all.
    pub fn has_play_change_events(self) -> bool {
        !matches!(self, Platform::Windows)
    }

    /// Bare relative names address bundled raw resources and must be
    /// lowercased with the extension stripped before prepare.
    pub fn normalizes_bundle_paths(self) -> bool {
        matches!(self, Platform::Android)
    }

    /// Silence-mode, set-active, and set-mode session calls exist.
    pub fn has_session_controls(self) -> bool {
        matches!(self, Platform::Ios)
    }

    pub fn supports_category(self) -> bool {
        !matches!(self, Platform::Windows)
    }

    pub fn has_system_volume(self) -> bool {
        matches!(self, Platform::Android)
    }

    pub fn has_speakerphone(self) -> bool {
        matches!(self, Platform::Android)
    }
}
