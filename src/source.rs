/// A sound source supplied by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A resource packaged with the application, resolved to a platform URI
    /// by the host's asset pipeline. The numeric id doubles as the resource
    /// key.
    Asset(AssetRef),
    /// A filesystem path, URL, or bare bundled-resource name.
    Path(String),
}

impl From<&str> for SoundSource {
    fn from(path: &str) -> Self {
        SoundSource::Path(path.to_string())
    }
}

impl From<String> for SoundSource {
    fn from(path: String) -> Self {
        SoundSource::Path(path)
    }
}

/// Reference to a bundled asset. The id is assigned by the host's asset
/// pipeline at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRef {
    pub id: i32,
}

/// A bundled asset resolved to something the native module can open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub uri: String,
}

/// Host-side asset pipeline: maps a bundled-asset reference to its URI.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, asset: AssetRef) -> Option<ResolvedAsset>;
}

/// Resolver for hosts without an asset pipeline; resolves nothing.
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _asset: AssetRef) -> Option<ResolvedAsset> {
        None
    }
}
