//! Pattern matching of identifiers against shape patterns.
//!
//! A pattern is `[type]["/"[childType]]["#"[pathKey]]`, every part optional:
//! `project`, `project/contract`, `/contract`, `project#change`, `#change`.
//! A present marker (`/` or `#`) demands the matching level, an absent one
//! forbids it; named parts must match exactly. Path values are never checked.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};
use validator::ValidationError;

use crate::error::FrnError;
use crate::id::Id;
use crate::set::IdSet;

/// Error code reported to `validator` for a failed match.
pub const VALIDATION_CODE: &str = "frn";

static PATTERN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/#]+)?(/)?([^/#]+)?(#)?([^#]+)?$").expect("pattern regex is valid")
});

/// Matches `id` against a single pattern.
///
/// The empty identifier always matches; combine with a presence check where
/// one is needed. An empty pattern only checks [`Id::is_valid`].
#[must_use]
pub fn is_match(id: &Id, pattern: &str) -> bool {
    if id.is_empty() {
        return true;
    }
    if pattern.is_empty() {
        return id.is_valid();
    }

    let Some(caps) = PATTERN_RE.captures(pattern) else {
        trace!(%id, pattern, "unparseable pattern");
        return false;
    };

    if let Some(ty) = caps.get(1) {
        if id.ty() != ty.as_str() {
            trace!(%id, pattern, "type mismatch");
            return false;
        }
    }

    let wants_child = caps.get(2).is_some();
    if wants_child != id.has_child() {
        trace!(%id, pattern, wants_child, "child presence mismatch");
        return false;
    }

    if let Some(child_type) = caps.get(3) {
        if id.child().ty() != child_type.as_str() {
            trace!(%id, pattern, "child type mismatch");
            return false;
        }
    }

    let wants_path = caps.get(4).is_some();
    if wants_path != id.has_path() {
        trace!(%id, pattern, wants_path, "path presence mismatch");
        return false;
    }

    if let Some(key) = caps.get(5) {
        if id.path_key() != key.as_str() {
            trace!(%id, pattern, "path key mismatch");
            return false;
        }
    }

    true
}

/// Requires `id` to be set and to match at least one of `patterns`.
///
/// Unlike [`is_match`], an empty identifier is an error here.
pub fn validate<S: AsRef<str>>(id: &Id, patterns: &[S]) -> Result<(), FrnError> {
    if id.is_empty() {
        return Err(FrnError::NotSet);
    }

    if patterns.iter().any(|pattern| is_match(id, pattern.as_ref())) {
        return Ok(());
    }

    let patterns: Vec<String> = patterns.iter().map(|p| p.as_ref().to_owned()).collect();
    debug!(%id, ?patterns, "identifier matched no pattern");
    Err(FrnError::NoMatch { patterns })
}

// =============================================================================
// validator integration
// =============================================================================

/// Field types that can be checked against a pattern.
pub trait FrnField {
    /// Returns true if every identifier held matches `pattern`.
    fn matches(&self, pattern: &str) -> bool;
}

impl FrnField for Id {
    fn matches(&self, pattern: &str) -> bool {
        is_match(self, pattern)
    }
}

impl<T> FrnField for &T
where
    T: FrnField + ?Sized,
{
    fn matches(&self, pattern: &str) -> bool {
        (**self).matches(pattern)
    }
}

impl FrnField for Option<Id> {
    fn matches(&self, pattern: &str) -> bool {
        self.as_ref().is_none_or(|id| is_match(id, pattern))
    }
}

impl FrnField for [Id] {
    fn matches(&self, pattern: &str) -> bool {
        self.iter().all(|id| is_match(id, pattern))
    }
}

impl FrnField for Vec<Id> {
    fn matches(&self, pattern: &str) -> bool {
        self.as_slice().matches(pattern)
    }
}

impl FrnField for IdSet {
    fn matches(&self, pattern: &str) -> bool {
        self.as_slice().matches(pattern)
    }
}

/// Checks a field against `pattern`, reporting failure the way `validator`
/// custom functions do.
///
/// The error code is [`VALIDATION_CODE`] and the pattern is attached as the
/// `pattern` parameter. Usually reached through [`frn_validator!`](crate::frn_validator).
pub fn matches_pattern<T>(value: &T, pattern: &str) -> Result<(), ValidationError>
where
    T: FrnField + ?Sized,
{
    if value.matches(pattern) {
        return Ok(());
    }

    let mut err = ValidationError::new(VALIDATION_CODE);
    err.add_param(Cow::Borrowed("pattern"), &pattern);
    err.message = Some(Cow::Owned(format!("ID does not match pattern '{pattern}'")));
    Err(err)
}
