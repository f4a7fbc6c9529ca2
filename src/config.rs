//! Validation of untyped resolver configuration.
//!
//! Host applications usually receive resolver configuration in deserialized
//! form, a bundler-produced manifest plus helper registration settings,
//! rather than as typed values. This module is the single place such input
//! is checked and converted; the rest of the crate only ever sees the typed
//! [`LinkResolver`] and [`ResolverOptions`].

use serde_json::Value;

use crate::error::ConfigError;
use crate::manifest::AssetManifest;
use crate::resolver::{LinkResolver, ResolverOptions};

const MANIFEST_KEY: &str = "manifest";
const SILENCE_MANIFEST_ERRORS_KEY: &str = "silenceManifestErrors";

/// Validate an untyped `(url, options)` pair into a ready resolver.
///
/// Checks run in declaration order and fail fast on the first violation:
/// the URL must be a string, the options (when present) must be a plain
/// object, `silenceManifestErrors` must be a boolean, and `manifest` must
/// be an object mapping strings to strings. Omitted fields take their
/// defaults: manifest errors are not silenced and no manifest is consulted.
pub fn resolver_from_value(
    url: &Value,
    options: Option<&Value>,
) -> Result<LinkResolver, ConfigError> {
    let base_url = url.as_str().ok_or(ConfigError::UrlNotString)?;

    let options = match options {
        Some(value) => options_from_value(value)?,
        None => ResolverOptions::default(),
    };

    Ok(LinkResolver::with_options(base_url, options))
}

/// Validate an untyped options object into [`ResolverOptions`].
///
/// Keys other than `manifest` and `silenceManifestErrors` are ignored.
pub fn options_from_value(value: &Value) -> Result<ResolverOptions, ConfigError> {
    let object = value.as_object().ok_or(ConfigError::OptionsNotObject)?;

    let silence_manifest_errors = match object.get(SILENCE_MANIFEST_ERRORS_KEY) {
        Some(flag) => flag
            .as_bool()
            .ok_or(ConfigError::SilenceManifestErrorsNotBoolean)?,
        None => false,
    };

    let manifest = match object.get(MANIFEST_KEY) {
        Some(manifest) => Some(AssetManifest::from_value(manifest)?),
        None => None,
    };

    Ok(ResolverOptions {
        manifest,
        silence_manifest_errors,
    })
}
