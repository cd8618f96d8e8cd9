//! Binding layer between application code and a platform-native sound engine.
//!
//! This crate does no audio work itself. It derives a stable key for each
//! sound source, forwards every operation to an injected [`SoundService`],
//! and papers over the calling-convention differences between the iOS,
//! Android, and Windows native modules.
//!
//! Main types:
//! - [`SoundHandle`]: identity and state cache for one native sound resource
//! - [`SoundService`]: the contract the native engine implements
//! - [`SoundContext`]: process-wide wiring (service, events, assets, platform)
//! - [`EventHub`]: the shared playback-state notification stream

pub mod context;
pub mod events;
pub mod handle;
pub mod key;
pub mod platform;
pub mod service;
pub mod session;
pub mod source;

pub use context::{BundleDirs, SoundContext};
pub use events::{EventHub, PlayChange, PlayListener, Subscription};
pub use handle::{LoadCallback, SoundHandle};
pub use key::{ResourceKey, djb2};
pub use platform::Platform;
pub use service::{
    DoneCallback, NativeError, PlayCallback, PrepareCallback, PrepareOptions, SoundProperties,
    SoundService, SystemVolumeCallback, TimeCallback,
};
pub use source::{AssetRef, AssetResolver, NoAssets, ResolvedAsset, SoundSource};
