//! Link resolver construction and resolution.

use crate::error::ResolveError;
use crate::manifest::AssetManifest;

/// Behavior switches accepted when constructing a [`LinkResolver`].
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Build manifest consulted during resolution. Absent means
    /// pass-through mode: asset identifiers are used verbatim.
    pub manifest: Option<AssetManifest>,
    /// When `true`, a manifest miss falls back to the asset identifier
    /// instead of failing the resolution.
    pub silence_manifest_errors: bool,
}

/// Resolves logical asset identifiers into public URLs.
///
/// A resolver is configured once with a base URL plus optional manifest and
/// then queried repeatedly. Configuration is owned and never mutated after
/// construction, and [`LinkResolver::resolve`] takes `&self`, so a single
/// resolver can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    base_url: String,
    manifest: Option<AssetManifest>,
    silence_manifest_errors: bool,
}

impl LinkResolver {
    /// Create a pass-through resolver with default options.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    ///
    /// The base URL is normalized to end with exactly one trailing slash,
    /// so `"example.com/static"` and `"example.com/static/"` produce
    /// resolvers that behave identically.
    pub fn with_options(base_url: impl Into<String>, options: ResolverOptions) -> Self {
        Self {
            base_url: ensure_trailing_slash(&base_url.into()),
            manifest: options.manifest,
            silence_manifest_errors: options.silence_manifest_errors,
        }
    }

    /// The normalized base URL every resolved link starts with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The manifest consulted during resolution, when one is configured.
    pub fn manifest(&self) -> Option<&AssetManifest> {
        self.manifest.as_ref()
    }

    /// Returns `true` when manifest misses fall back to pass-through.
    pub fn silences_manifest_errors(&self) -> bool {
        self.silence_manifest_errors
    }

    /// Resolve an asset identifier into a public URL.
    ///
    /// Without a manifest the identifier is used verbatim. With a manifest,
    /// the identifier is looked up under each slash-convention candidate;
    /// a miss under every candidate either fails with
    /// [`ResolveError::ManifestMiss`] or, when manifest errors are
    /// silenced, falls back to the identifier itself. The selected value
    /// has a single leading slash stripped before it is appended to the
    /// base URL, so the join always contains exactly one separator.
    pub fn resolve(&self, asset: &str) -> Result<String, ResolveError> {
        let link = match &self.manifest {
            Some(manifest) => match manifest.lookup(asset) {
                Some(value) => value,
                None if self.silence_manifest_errors => asset,
                None => {
                    return Err(ResolveError::ManifestMiss {
                        asset: asset.to_string(),
                    });
                }
            },
            None => asset,
        };

        Ok(format!(
            "{}{}",
            self.base_url,
            link.strip_prefix('/').unwrap_or(link)
        ))
    }

    /// Consume the resolver and return it as a plain callable.
    ///
    /// Template-rendering systems register helpers as functions taking the
    /// asset identifier and returning the finished link; this adapter
    /// produces exactly that shape without tying the crate to any
    /// particular engine.
    pub fn into_fn(self) -> impl Fn(&str) -> Result<String, ResolveError> {
        move |asset: &str| self.resolve(asset)
    }
}

/// Normalize a URL to end with exactly one trailing slash.
fn ensure_trailing_slash(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{ensure_trailing_slash, LinkResolver, ResolverOptions};
    use crate::error::ResolveError;
    use crate::manifest::AssetManifest;

    fn manifest() -> AssetManifest {
        AssetManifest::from_iter([("foo.css", "foo-123.css"), ("bar.css", "bar-456.css")])
    }

    #[test]
    fn appends_missing_trailing_slash() {
        assert_eq!(ensure_trailing_slash("example.com/static"), "example.com/static/");
    }

    #[test]
    fn collapses_redundant_trailing_slashes() {
        assert_eq!(ensure_trailing_slash("example.com/static/"), "example.com/static/");
        assert_eq!(ensure_trailing_slash("example.com/static//"), "example.com/static/");
    }

    #[test]
    fn passes_assets_through_without_a_manifest() {
        let resolver = LinkResolver::new("example.com/static");

        assert_eq!(resolver.resolve("foo.css").unwrap(), "example.com/static/foo.css");
        assert_eq!(resolver.resolve("/foo.css").unwrap(), "example.com/static/foo.css");
    }

    #[test]
    fn resolves_through_the_manifest() {
        let resolver = LinkResolver::with_options("example.com/static", ResolverOptions {
            manifest: Some(manifest()),
            ..ResolverOptions::default()
        });

        assert_eq!(resolver.resolve("foo.css").unwrap(), "example.com/static/foo-123.css");
        assert_eq!(resolver.resolve("bar.css").unwrap(), "example.com/static/bar-456.css");
    }

    #[test]
    fn strips_leading_slashes_from_manifest_values() {
        let resolver = LinkResolver::with_options("example.com/static", ResolverOptions {
            manifest: Some(AssetManifest::from_iter([("foo.css", "/foo-123.css")])),
            ..ResolverOptions::default()
        });

        assert_eq!(resolver.resolve("foo.css").unwrap(), "example.com/static/foo-123.css");
    }

    #[test]
    fn fails_manifest_misses_by_default() {
        let resolver = LinkResolver::with_options("example.com/static", ResolverOptions {
            manifest: Some(AssetManifest::default()),
            ..ResolverOptions::default()
        });

        let err = resolver.resolve("foo.css").unwrap_err();
        assert_eq!(err, ResolveError::ManifestMiss {
            asset: "foo.css".into(),
        });
    }

    #[test]
    fn silenced_misses_fall_back_to_pass_through() {
        let resolver = LinkResolver::with_options("example.com/static", ResolverOptions {
            manifest: Some(AssetManifest::default()),
            silence_manifest_errors: true,
        });

        assert_eq!(resolver.resolve("foo.css").unwrap(), "example.com/static/foo.css");
        assert_eq!(resolver.resolve("/foo.css").unwrap(), "example.com/static/foo.css");
    }

    #[test]
    fn exposes_normalized_configuration() {
        let resolver = LinkResolver::with_options("example.com/static", ResolverOptions {
            manifest: Some(manifest()),
            silence_manifest_errors: true,
        });

        assert_eq!(resolver.base_url(), "example.com/static/");
        assert_eq!(resolver.manifest().map(AssetManifest::len), Some(2));
        assert!(resolver.silences_manifest_errors());
    }

    #[test]
    fn works_as_a_plain_callable() {
        let helper = LinkResolver::new("example.com/static").into_fn();

        assert_eq!(helper("foo.css").unwrap(), "example.com/static/foo.css");
        assert_eq!(helper("/foo.css").unwrap(), "example.com/static/foo.css");
    }
}
