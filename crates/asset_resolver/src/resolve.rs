//! Variant/extension trial order and the resolution engine.

use crate::{AssetCache, AssetProbe};

/// Extension trial order used when the caller does not supply one.
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "svg"];

/// Candidate filename stems derived from a logical name, most specific first:
/// verbatim, lowercased, lowercased with non-alphanumeric characters stripped.
/// Duplicates collapse in order, so `"rust"` yields a single variant.
pub fn name_variants(logical_name: &str) -> Vec<String> {
    let lowered = logical_name.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let mut variants = Vec::with_capacity(3);
    for candidate in [logical_name.to_string(), lowered, stripped] {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// One resolution request: where to look, what to look for, and which extensions to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// Path prefix of the asset origin, e.g. `"/assets/skills/"`.
    pub base_path: String,
    /// Caller-supplied identifier the candidate filenames derive from. May be empty, in
    /// which case resolution is skipped entirely.
    pub logical_name: String,
    /// Extension trial order.
    pub extensions: Vec<String>,
}

impl AssetRequest {
    /// Builds a request with the default extension order.
    pub fn new(base_path: impl Into<String>, logical_name: impl Into<String>) -> Self {
        Self::with_extensions(
            base_path,
            logical_name,
            DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()),
        )
    }

    /// Builds a request with a caller-supplied extension order.
    pub fn with_extensions(
        base_path: impl Into<String>,
        logical_name: impl Into<String>,
        extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            logical_name: logical_name.into(),
            extensions: extensions.into_iter().collect(),
        }
    }

    /// Memoization key shared by every request for the same base path and logical name.
    pub fn cache_key(&self) -> String {
        format!("{}{}", self.base_path, self.logical_name)
    }
}

/// Resolves a request to an asset path, or `None` when every candidate misses.
///
/// Candidates are probed strictly in variant-major, extension-minor order, one at a time.
/// A cache hit short-circuits without probing; a successful probe writes through
/// [`AssetCache::insert_if_absent`] so concurrent resolutions of one key stay idempotent.
/// Misses are not cached: a later request with different extensions may still succeed.
pub async fn resolve_asset<P>(
    probe: &P,
    cache: &AssetCache,
    request: &AssetRequest,
) -> Option<String>
where
    P: AssetProbe + ?Sized,
{
    if request.logical_name.is_empty() {
        return None;
    }

    let key = request.cache_key();
    if let Some(hit) = cache.get(&key) {
        return Some(hit);
    }

    for variant in name_variants(&request.logical_name) {
        for extension in &request.extensions {
            let candidate = format!("{}{variant}.{extension}", request.base_path);
            if probe.probe(&candidate).await {
                return Some(cache.insert_if_absent(&key, &candidate));
            }
        }
    }
    None
}
