//! Build-manifest lookup for fingerprinted asset filenames.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mapping from logical asset names to the filenames actually served.
///
/// Manifests are produced by an external build step (bundler fingerprinting
/// or asset revisioning) and are immutable once constructed. Lookup
/// tolerates leading-slash differences between the caller's asset
/// identifier and the manifest's key convention, so the same manifest works
/// no matter which spelling the build tool emitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AssetManifest {
    entries: BTreeMap<String, String>,
}

impl AssetManifest {
    /// Validate an untyped JSON value into a manifest.
    ///
    /// The value must be a JSON object whose values are all strings.
    /// Arrays, scalars, and null are rejected as non-objects; an object
    /// containing any non-string value is rejected as a whole.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::ManifestNotObject)?;

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let value = value.as_str().ok_or(ConfigError::ManifestEntryNotString)?;
            entries.insert(key.clone(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Look up the served filename for an asset identifier.
    ///
    /// Probes the manifest under each candidate produced by
    /// [`manifest_key_candidates`]; the first candidate present wins.
    pub fn lookup(&self, asset: &str) -> Option<&str> {
        manifest_key_candidates(asset)
            .into_iter()
            .find_map(|candidate| self.entries.get(&candidate))
            .map(String::as_str)
    }

    /// Exact-key lookup without candidate probing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the manifest holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, String>> for AssetManifest {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for AssetManifest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Generate the manifest keys probed for an asset identifier.
///
/// Callers and build tools disagree on whether asset names carry a leading
/// slash. The probe order keeps the caller's spelling authoritative: the
/// identifier exactly as given, then with one leading slash stripped, then
/// with a leading slash prepended. Duplicates are dropped so each key is
/// probed at most once.
pub fn manifest_key_candidates(asset: &str) -> Vec<String> {
    let stripped = asset.strip_prefix('/').unwrap_or(asset);

    let mut candidates = vec![asset.to_string()];
    for candidate in [stripped.to_string(), format!("/{stripped}")] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    candidates
}
