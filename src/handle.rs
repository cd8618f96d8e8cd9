use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::context::SoundContext;
use crate::events::Subscription;
use crate::key::ResourceKey;
use crate::service::{NativeError, PrepareOptions, SoundProperties};
use crate::source::SoundSource;

pub type LoadCallback = Box<dyn FnOnce(Option<NativeError>, Option<SoundProperties>) + Send>;

/// Cached playback parameters and lifecycle flags for one handle.
struct HandleState {
    loaded: bool,
    playing: bool,
    duration: f64,
    number_of_channels: i32,
    volume: f64,
    pan: f64,
    number_of_loops: i32,
    speed: f64,
    subscription: Option<Subscription>,
}

impl Default for HandleState {
    fn default() -> Self {
        Self {
            loaded: false,
            playing: false,
            duration: -1.0,
            number_of_channels: -1,
            volume: 1.0,
            pan: 0.0,
            number_of_loops: 0,
            speed: 1.0,
            subscription: None,
        }
    }
}

/// Client-side identity and state cache for one native sound resource.
///
/// Construction derives the resource key, fires an asynchronous prepare
/// request, and registers for playback-state notifications once prepare
/// succeeds. Every mutating call forwards to the native service keyed by
/// that identity, using the calling convention of the context's platform.
///
/// Misuse never panics or errors: operations on an unloaded handle are
/// silent no-ops, except [`SoundHandle::play`], which reports failure
/// through its callback.
pub struct SoundHandle {
    ctx: SoundContext,
    key: ResourceKey,
    path: String,
    state: Arc<Mutex<HandleState>>,
}

/// Paths starting with `/`, `http(s)`, or `asset` address real locations;
/// anything else is a bare bundled-resource name.
fn is_relative_path(path: &str) -> bool {
    !(path.starts_with('/') || path.starts_with("http") || path.starts_with("asset"))
}

/// Drop a trailing `.ext` segment, if any.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

impl SoundHandle {
    /// Create a handle and immediately request native prepare.
    ///
    /// `on_load` fires exactly once with the native result, success or
    /// failure. Until it reports success the handle stays unloaded.
    pub fn new(
        ctx: &SoundContext,
        source: impl Into<SoundSource>,
        base_path: Option<&str>,
        options: PrepareOptions,
        on_load: Option<LoadCallback>,
    ) -> Self {
        let (path, key) = match source.into() {
            SoundSource::Asset(asset) => {
                let uri = ctx
                    .assets
                    .resolve(asset)
                    .map(|resolved| resolved.uri)
                    .unwrap_or_default();
                (uri, ResourceKey(asset.id))
            }
            SoundSource::Path(filename) => {
                let path = match base_path {
                    Some(base) => format!("{base}/{filename}"),
                    None if ctx.platform.normalizes_bundle_paths()
                        && is_relative_path(&filename) =>
                    {
                        // Bare resource names address bundled raw resources:
                        // lowercase, no extension.
                        strip_extension(&filename.to_lowercase()).to_string()
                    }
                    None => filename.clone(),
                };
                // The key hashes the original filename, not the normalized
                // path. The native side does the same, so changing either
                // half alone breaks addressing.
                (path, ResourceKey::from_path(&filename))
            }
        };

        let state = Arc::new(Mutex::new(HandleState::default()));
        let handle = Self {
            ctx: ctx.clone(),
            key,
            path,
            state,
        };

        debug!("preparing sound {} (key {})", handle.path, handle.key);
        let cb_state = Arc::clone(&handle.state);
        let events = Arc::clone(&handle.ctx.events);
        let platform = handle.ctx.platform;
        handle.ctx.service.prepare(
            &handle.path,
            key,
            &options,
            Box::new(move |error, properties| {
                {
                    let mut state = cb_state.lock().unwrap();
                    if let Some(props) = &properties {
                        if let Some(duration) = props.duration {
                            state.duration = duration;
                        }
                        if let Some(channels) = props.number_of_channels {
                            state.number_of_channels = channels;
                        }
                    }
                    if error.is_none() {
                        state.loaded = true;

                        if state.subscription.is_some() {
                            warn!("play-change listener is already registered");
                            return;
                        }

                        if platform.has_play_change_events() {
                            let listener_state = Arc::clone(&cb_state);
                            state.subscription = Some(events.subscribe(Arc::new(
                                move |change: &crate::events::PlayChange| {
                                    if change.key == key {
                                        listener_state.lock().unwrap().playing =
                                            change.is_playing;
                                    }
                                },
                            )));
                        }
                    }
                }
                if let Some(callback) = on_load {
                    callback(error, properties);
                }
            }),
        );

        handle
    }

    pub fn key(&self) -> ResourceKey {
        self.key
    }

    /// The path or URI handed to the native prepare call.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.state.lock().unwrap().loaded
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    /// Start playback. `on_end` receives the native success flag when
    /// playback finishes; if the handle is not loaded it receives `false`
    /// immediately and the native module is never called.
    pub fn play<F>(&self, on_end: F) -> &Self
    where
        F: FnOnce(bool) + Send + 'static,
    {
        if self.is_loaded() {
            self.ctx.service.play(self.key, Box::new(on_end));
        } else {
            on_end(false);
        }
        self
    }

    pub fn pause<F>(&self, done: F) -> &Self
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_loaded() {
            let state = Arc::clone(&self.state);
            self.ctx.service.pause(
                self.key,
                Box::new(move || {
                    state.lock().unwrap().playing = false;
                    done();
                }),
            );
        }
        self
    }

    pub fn stop<F>(&self, done: F) -> &Self
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_loaded() {
            let state = Arc::clone(&self.state);
            self.ctx.service.stop(
                self.key,
                Box::new(move || {
                    state.lock().unwrap().playing = false;
                    done();
                }),
            );
        }
        self
    }

    /// Rewind to the start. Only the Android module has a native reset.
    pub fn reset(&self) -> &Self {
        if self.ctx.platform.has_native_reset() {
            let loaded = {
                let mut state = self.state.lock().unwrap();
                if state.loaded {
                    state.playing = false;
                }
                state.loaded
            };
            // Lock dropped first: the service may publish a play-change
            // synchronously, re-entering the listener.
            if loaded {
                self.ctx.service.reset(self.key);
            }
        }
        self
    }

    /// Free the native resource slot and drop the notification
    /// subscription. The second and later calls are no-ops.
    ///
    /// A release issued while prepare is still in flight does not cancel
    /// it; if the prepare callback arrives afterwards it will mark the
    /// handle loaded again, matching the native bindings.
    pub fn release(&self) -> &Self {
        let subscription = {
            let mut state = self.state.lock().unwrap();
            if !state.loaded {
                return self;
            }
            state.loaded = false;
            state.subscription.take()
        };
        self.ctx.service.release(self.key);
        if let Some(mut subscription) = subscription {
            subscription.remove();
        }
        self
    }

    /// Duration in seconds, -1 until prepare reports it.
    pub fn duration(&self) -> f64 {
        self.state.lock().unwrap().duration
    }

    /// Channel count, -1 until prepare reports it.
    pub fn number_of_channels(&self) -> i32 {
        self.state.lock().unwrap().number_of_channels
    }

    pub fn volume(&self) -> f64 {
        self.state.lock().unwrap().volume
    }

    /// Cache the volume and, when loaded, forward it natively. Android and
    /// Windows take a stereo pair; the value is duplicated to both sides.
    pub fn set_volume(&self, value: f64) -> &Self {
        let loaded = {
            let mut state = self.state.lock().unwrap();
            state.volume = value;
            state.loaded
        };
        if loaded {
            if self.ctx.platform.has_stereo_volume() {
                self.ctx.service.set_stereo_volume(self.key, value, value);
            } else {
                self.ctx.service.set_volume(self.key, value);
            }
        }
        self
    }

    pub fn pan(&self) -> f64 {
        self.state.lock().unwrap().pan
    }

    pub fn set_pan(&self, value: f64) -> &Self {
        let loaded = {
            let mut state = self.state.lock().unwrap();
            state.pan = value;
            state.loaded
        };
        if loaded {
            self.ctx.service.set_pan(self.key, value);
        }
        self
    }

    pub fn number_of_loops(&self) -> i32 {
        self.state.lock().unwrap().number_of_loops
    }

    /// Cache the loop count and, when loaded, forward it natively. Android
    /// and Windows only understand a loop-forever flag, so any nonzero
    /// count becomes `true` there.
    pub fn set_number_of_loops(&self, value: i32) -> &Self {
        let loaded = {
            let mut state = self.state.lock().unwrap();
            state.number_of_loops = value;
            state.loaded
        };
        if loaded {
            if self.ctx.platform.loops_as_flag() {
                self.ctx.service.set_looping(self.key, value != 0);
            } else {
                self.ctx.service.set_number_of_loops(self.key, value);
            }
        }
        self
    }

    pub fn speed(&self) -> f64 {
        self.state.lock().unwrap().speed
    }

    /// Cache the speed and, when loaded, forward it natively. The Windows
    /// module has no speed call; there the value is cache-only.
    pub fn set_speed(&self, value: f64) -> &Self {
        let loaded = {
            let mut state = self.state.lock().unwrap();
            state.speed = value;
            state.loaded
        };
        if loaded && self.ctx.platform.supports_speed() {
            self.ctx.service.set_speed(self.key, value);
        }
        self
    }

    /// Ask the native module for the current position. No-op while
    /// unloaded; the callback is simply never invoked then.
    pub fn get_current_time<F>(&self, done: F)
    where
        F: FnOnce(f64, bool) + Send + 'static,
    {
        if self.is_loaded() {
            self.ctx.service.get_current_time(self.key, Box::new(done));
        }
    }

    pub fn set_current_time(&self, seconds: f64) -> &Self {
        if self.is_loaded() {
            self.ctx.service.set_current_time(self.key, seconds);
        }
        self
    }

    /// Device volume query, Android only.
    pub fn get_system_volume<F>(&self, done: F) -> &Self
    where
        F: FnOnce(f64) + Send + 'static,
    {
        if self.ctx.platform.has_system_volume() {
            self.ctx.service.get_system_volume(Box::new(done));
        }
        self
    }

    /// Device volume, Android only.
    pub fn set_system_volume(&self, value: f64) -> &Self {
        if self.ctx.platform.has_system_volume() {
            self.ctx.service.set_system_volume(value);
        }
        self
    }

    /// Route output through the speakerphone, Android only.
    pub fn set_speakerphone_on(&self, on: bool) {
        if self.ctx.platform.has_speakerphone() {
            self.ctx.service.set_speakerphone_on(self.key, on);
        }
    }
}
