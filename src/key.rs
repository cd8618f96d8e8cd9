use serde::{Deserialize, Serialize};

/// Key addressing one native-held sound resource.
///
/// For bundled assets this is the asset's platform-assigned numeric id; for
/// everything else it is [`djb2`] over the filename string. Both sides of the
/// bridge compute the key independently, so the derivation must stay
/// bit-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey(pub i32);

impl ResourceKey {
    /// Derive the key for a non-asset source from its filename.
    pub fn from_path(path: &str) -> Self {
        ResourceKey(djb2(path))
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// djb2 string hash, signed 32-bit with wrapping arithmetic.
///
/// Iterates UTF-16 code units, not bytes or chars: the native side hashes
/// JavaScript char codes, and the two processes must agree on the key
/// without communicating.
pub fn djb2(s: &str) -> i32 {
    let mut hash: i32 = 5381;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(33).wrapping_add(unit as i32);
    }
    hash
}
