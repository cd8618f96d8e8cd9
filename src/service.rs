use serde::{Deserialize, Serialize};

use crate::key::ResourceKey;

/// Options forwarded verbatim to the native prepare call.
pub type PrepareOptions = serde_json::Map<String, serde_json::Value>;

/// Properties reported by the native module when a sound finishes preparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_channels: Option<i32>,
}

/// Error value reported by the native module.
///
/// Opaque to this layer: it is never inspected or classified here, only
/// forwarded to the caller's load callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

impl std::fmt::Display for NativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for NativeError {}

pub type PrepareCallback = Box<dyn FnOnce(Option<NativeError>, Option<SoundProperties>) + Send>;
pub type PlayCallback = Box<dyn FnOnce(bool) + Send>;
pub type DoneCallback = Box<dyn FnOnce() + Send>;
pub type TimeCallback = Box<dyn FnOnce(f64, bool) + Send>;
pub type SystemVolumeCallback = Box<dyn FnOnce(f64) + Send>;

/// Contract the platform-native sound engine implements.
///
/// All real audio work happens behind this trait. Asynchronous entry points
/// take a completion callback that the engine must invoke exactly once; the
/// rest are fire-and-forget. Keyed calls address the resource slot prepared
/// under that [`ResourceKey`].
///
/// Not every entry point exists on every platform; [`crate::SoundHandle`]
/// and [`crate::session`] gate their calls on [`crate::Platform`] so an
/// implementation only receives calls its platform supports.
pub trait SoundService: Send + Sync {
    fn prepare(&self, path: &str, key: ResourceKey, options: &PrepareOptions, done: PrepareCallback);

    fn play(&self, key: ResourceKey, done: PlayCallback);
    fn pause(&self, key: ResourceKey, done: DoneCallback);
    fn stop(&self, key: ResourceKey, done: DoneCallback);
    fn reset(&self, key: ResourceKey);
    fn release(&self, key: ResourceKey);

    /// Single-argument volume call (iOS convention).
    fn set_volume(&self, key: ResourceKey, value: f64);
    /// Two-argument volume call (Android/Windows convention).
    fn set_stereo_volume(&self, key: ResourceKey, left: f64, right: f64);
    fn set_pan(&self, key: ResourceKey, value: f64);
    /// Loop-forever flag (Android/Windows convention).
    fn set_looping(&self, key: ResourceKey, looping: bool);
    /// Explicit loop count, -1 meaning forever (iOS convention).
    fn set_number_of_loops(&self, key: ResourceKey, loops: i32);
    fn set_speed(&self, key: ResourceKey, value: f64);

    fn get_current_time(&self, key: ResourceKey, done: TimeCallback);
    fn set_current_time(&self, key: ResourceKey, seconds: f64);

    fn get_system_volume(&self, done: SystemVolumeCallback);
    fn set_system_volume(&self, value: f64);
    fn set_speakerphone_on(&self, key: ResourceKey, on: bool);

    // Process-wide session state owned by the native side.
    fn enable(&self, enabled: bool);
    fn enable_in_silence_mode(&self, enabled: bool);
    fn set_active(&self, active: bool);
    fn set_category(&self, category: &str, mix_with_others: bool);
    fn set_mode(&self, mode: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_error_display() {
        let plain = NativeError {
            code: None,
            message: "resource not found".into(),
        };
        assert_eq!(plain.to_string(), "resource not found");

        let coded = NativeError {
            code: Some("ENOENT".into()),
            message: "resource not found".into(),
        };
        assert_eq!(coded.to_string(), "resource not found (ENOENT)");
    }

    #[test]
    fn properties_use_native_field_names() {
        let props: SoundProperties =
            serde_json::from_str(r#"{"duration": 2.5, "numberOfChannels": 2}"#).unwrap();
        assert_eq!(props.duration, Some(2.5));
        assert_eq!(props.number_of_channels, Some(2));
    }
}
