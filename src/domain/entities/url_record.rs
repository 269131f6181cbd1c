//! URL record entity pairing a long URL with its alias.

/// A stored mapping from an original URL to its short alias.
///
/// Records are created once and never modified. `short_alias` is always in the
/// public `https://{token}.com` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub long_url: String,
    pub short_alias: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(long_url: impl Into<String>, short_alias: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_alias: short_alias.into(),
        }
    }

    /// Returns the bare token embedded in the alias, if it is well formed.
    pub fn token(&self) -> Option<&str> {
        crate::utils::alias_codec::parse(&self.short_alias)
    }
}
