//! Error types for resolver configuration and link resolution.

/// Errors raised while validating untyped resolver configuration.
///
/// Each variant corresponds to one shape check performed on configuration
/// that crosses the untyped boundary, typically a `serde_json::Value`
/// deserialized from a host application's helper registration settings.
/// Typed construction through [`crate::LinkResolver::with_options`] cannot
/// produce these errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL value was not a string.
    UrlNotString,
    /// The options value was not a plain key/value object.
    OptionsNotObject,
    /// `silenceManifestErrors` was present but not a boolean.
    SilenceManifestErrorsNotBoolean,
    /// `manifest` was present but not a plain key/value object.
    ManifestNotObject,
    /// `manifest` contained a key or value that was not a string.
    ManifestEntryNotString,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::UrlNotString => "url must be a string",
            Self::OptionsNotObject => "options must be a plain object",
            Self::SilenceManifestErrorsNotBoolean => {
                "options.silenceManifestErrors must be a boolean"
            }
            Self::ManifestNotObject => "options.manifest must be a plain object",
            Self::ManifestEntryNotString => {
                "options.manifest must have all keys and values of type string"
            }
        };
        f.write_str(message)
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while resolving an asset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The configured manifest had no entry for the asset under any probed
    /// key variant.
    ManifestMiss {
        /// Asset identifier exactly as passed to the resolver.
        asset: String,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManifestMiss { asset } => {
                write!(f, "Link for {asset} could not be found in the manifest.")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
