//! Process-wide audio-session controls.
//!
//! These forward directly to the native service; the native side owns the
//! actual session state. Each call is gated to the platforms whose module
//! exposes it and is a silent no-op elsewhere.

use crate::context::SoundContext;

/// Enable or disable the sound system. Available everywhere.
pub fn enable(ctx: &SoundContext, enabled: bool) {
    ctx.service.enable(enabled);
}

/// Keep playing while the device is in silence mode. iOS only.
pub fn enable_in_silence_mode(ctx: &SoundContext, enabled: bool) {
    if ctx.platform.has_session_controls() {
        ctx.service.enable_in_silence_mode(enabled);
    }
}

/// Activate or deactivate the audio session. iOS only.
pub fn set_active(ctx: &SoundContext, active: bool) {
    if ctx.platform.has_session_controls() {
        ctx.service.set_active(active);
    }
}

/// Set the audio-session category, optionally mixing with other apps.
/// iOS and Android.
pub fn set_category(ctx: &SoundContext, category: &str, mix_with_others: bool) {
    if ctx.platform.supports_category() {
        ctx.service.set_category(category, mix_with_others);
    }
}

/// Set the audio-session mode. iOS only.
pub fn set_mode(ctx: &SoundContext, mode: &str) {
    if ctx.platform.has_session_controls() {
        ctx.service.set_mode(mode);
    }
}
