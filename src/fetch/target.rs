//! Request target composition.
//!
//! A request target is the fully composed outbound URL for one committed search:
//! the fixed base endpoint with the submitted term appended. Targets are computed
//! only on submit, never on keystrokes, which is what keeps "what the user is
//! typing" and "what was last searched" apart.

/// Composes the outbound request target from a base endpoint and a search term.
///
/// The term is appended verbatim. No percent encoding is applied, matching the
/// search service's observed tolerance for raw query text; a term containing
/// URL-reserved characters passes through unchanged.
///
/// # Examples
///
/// ```
/// use storyfetch::fetch::compose;
///
/// let target = compose("https://hn.algolia.com/api/v1/search?query=", "rust");
/// assert_eq!(target, "https://hn.algolia.com/api/v1/search?query=rust");
/// ```
#[must_use]
pub fn compose(base: &str, term: &str) -> String {
    format!("{base}{term}")
}

/// Recovers the search term from a composed target by stripping the base prefix.
///
/// Returns `None` if the target was not composed from this base. Since
/// [`compose`] applies no encoding, the recovered term is byte-for-byte the
/// original.
#[must_use]
pub fn term_of<'a>(base: &str, target: &'a str) -> Option<&'a str> {
    target.strip_prefix(base)
}
