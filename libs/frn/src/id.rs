//! The resource name value type.
//!
//! An [`Id`] is an immutable string following the grammar
//! `namespace:service:type:value[:childType:childValue][/pathKey[/pathValue]]`.
//! Fields are extracted lazily by scanning the string; nothing is split up
//! front and accessors hand out slices of the original text.

use std::borrow::Borrow;
use std::ops::Range;

use crate::error::FrnError;
use crate::namespace::Namespace;
use crate::set::IdSet;
use crate::shape::{shape_slice_value, ShapeSlice};

/// Separator between fields.
pub const FIELD_SEP: char = ':';

/// Separator introducing the optional path suffix.
pub const PATH_SEP: char = '/';

// =============================================================================
// Labels
// =============================================================================

define_label!(
    /// Short code of the subsystem that owns an identifier.
    Service
);

impl Service {
    pub const CRM: Self = Self::from_static("crm");
    pub const ONBOARDING: Self = Self::from_static("onboarding");
}

define_label!(
    /// Kind of entity an identifier (or its child) refers to.
    Type
);

impl Type {
    pub const CONTRACT: Self = Self::from_static("contract");
    /// A county.
    pub const COUNTY: Self = Self::from_static("county");
    pub const ENTITY: Self = Self::from_static("entity");
    pub const EVENT: Self = Self::from_static("event");
    pub const INVOICE_SCHEDULE: Self = Self::from_static("invoice_schedule");
    /// A physical region.
    pub const REGION: Self = Self::from_static("region");
    pub const PAYMENT: Self = Self::from_static("payment");
    pub const PROJECT: Self = Self::from_static("project");
    pub const RECEIVABLE: Self = Self::from_static("receivable");
    pub const USER: Self = Self::from_static("user");
}

// =============================================================================
// Id
// =============================================================================

/// A resource name.
///
/// The empty identifier represents "unset" and is a valid state; every
/// accessor returns an empty string or `false` for it. Malformed input never
/// panics or errors on access, use [`Id::is_valid`] before trusting an
/// identifier taken from outside.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id(String);

impl Id {
    /// The empty (unset) identifier.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Wraps a string without checking it.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parses an identifier, rejecting empty or malformed input.
    pub fn parse(s: &str) -> Result<Self, FrnError> {
        if s.is_empty() {
            return Err(FrnError::EmptyInput);
        }

        let id = Self::new(s);
        if !id.is_valid() {
            return Err(FrnError::Invalid { id: id.0 });
        }

        Ok(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Byte range of the `index`th `:`-delimited field.
    ///
    /// The scan stops at the path separator, so the last field never
    /// includes the path suffix.
    fn field(&self, index: usize) -> Option<Range<usize>> {
        let bytes = self.0.as_bytes();
        let mut remaining = index;
        let mut begin = 0;

        for (pos, &b) in bytes.iter().enumerate() {
            match b {
                b':' => {
                    if remaining == 0 {
                        return Some(begin..pos);
                    }
                    remaining -= 1;
                    begin = pos + 1;
                }
                b'/' => return (remaining == 0).then_some(begin..pos),
                _ => {}
            }
        }

        (remaining == 0).then_some(begin..bytes.len())
    }

    fn field_str(&self, index: usize) -> Option<&str> {
        self.field(index).map(|range| &self.0[range])
    }

    /// Position of the path separator, if any.
    fn path_start(&self) -> Option<usize> {
        self.0.find(PATH_SEP)
    }

    /// The identifier with any path suffix removed.
    fn base_str(&self) -> &str {
        match self.path_start() {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    /// The `env:service` prefix, or an empty namespace when fewer than two
    /// separators exist.
    #[must_use]
    pub fn namespace(&self) -> Namespace {
        match (self.field(1), self.field(2)) {
            (Some(service), Some(_)) => Namespace::from_prefix(&self.0[..service.end]),
            _ => Namespace::default(),
        }
    }

    /// The service field.
    #[must_use]
    pub fn service(&self) -> &str {
        self.field_str(1).unwrap_or_default()
    }

    /// The primary type field.
    #[must_use]
    pub fn ty(&self) -> &str {
        self.field_str(2).unwrap_or_default()
    }

    /// The primary value, without any path suffix.
    #[must_use]
    pub fn value(&self) -> &str {
        self.field_str(3).unwrap_or_default()
    }

    /// The child type field, or an empty string without a child.
    #[must_use]
    pub fn child_type(&self) -> &str {
        self.field_str(4).unwrap_or_default()
    }

    /// Returns true if a child type field is present.
    #[must_use]
    pub fn has_child(&self) -> bool {
        self.field(4).is_some()
    }

    /// The child as a standalone identifier in the same namespace, or the
    /// empty identifier if there is no child.
    #[must_use]
    pub fn child(&self) -> Id {
        let (Some(service), Some(child_type), Some(child_value)) =
            (self.field(1), self.field(4), self.field(5))
        else {
            return Id::empty();
        };

        let namespace = &self.0[..service.end];
        Id(format!(
            "{namespace}{FIELD_SEP}{}{FIELD_SEP}{}",
            &self.0[child_type],
            &self.0[child_value]
        ))
    }

    /// The primary level of the identifier.
    ///
    /// Drops the child and path when a child is present; otherwise drops only
    /// the path suffix.
    #[must_use]
    pub fn parent(&self) -> Id {
        if !self.has_child() {
            return self.base();
        }

        match self.field(3) {
            Some(value) => Id(self.0[..value.end].to_owned()),
            None => self.base(),
        }
    }

    /// The identifier without its path suffix; child structure is kept.
    #[must_use]
    pub fn base(&self) -> Id {
        Id(self.base_str().to_owned())
    }

    /// Returns true if a path suffix is present.
    #[must_use]
    pub fn has_path(&self) -> bool {
        self.path_start().is_some()
    }

    /// The path key and value, or `None` without a path suffix.
    ///
    /// The value is empty when only a key is present.
    #[must_use]
    pub fn path(&self) -> Option<(&str, &str)> {
        let tail = &self.0[self.path_start()? + 1..];
        Some(tail.split_once(PATH_SEP).unwrap_or((tail, "")))
    }

    /// The path key, or an empty string without a path suffix.
    #[must_use]
    pub fn path_key(&self) -> &str {
        self.path().map(|(key, _)| key).unwrap_or_default()
    }

    /// Returns a copy with the path suffix replaced by `key` and an optional
    /// value. An empty value is omitted.
    ///
    /// # Panics
    ///
    /// Panics if `tail` holds more than one value; a path carries a single
    /// key/value pair.
    #[must_use]
    pub fn with_path<S: AsRef<str>>(&self, key: &str, tail: &[S]) -> Id {
        assert!(
            tail.len() <= 1,
            "with_path accepts at most one path value, got {}",
            tail.len()
        );

        let mut s = String::with_capacity(self.0.len() + key.len() + 2);
        s.push_str(self.base_str());
        s.push(PATH_SEP);
        s.push_str(key);

        if let Some(value) = tail.first().map(AsRef::as_ref) {
            if !value.is_empty() {
                s.push(PATH_SEP);
                s.push_str(value);
            }
        }

        Id(s)
    }

    /// Returns a child identifier built on the primary level, replacing any
    /// existing child and dropping the path suffix.
    #[must_use]
    pub fn sub(&self, child_type: impl AsRef<str>, child_value: &str) -> Id {
        let parent = self.parent();
        Id(format!(
            "{}{FIELD_SEP}{}{FIELD_SEP}{child_value}",
            parent.0,
            child_type.as_ref()
        ))
    }

    /// Equivalent to `self.sub(other.ty(), other.value())`.
    #[must_use]
    pub fn with_child(&self, other: &Id) -> Id {
        self.sub(other.ty(), other.value())
    }

    /// The prefix every direct child of the primary level starts with.
    #[must_use]
    pub fn child_prefix(&self) -> String {
        if self.has_child() {
            return self.parent().child_prefix();
        }

        let mut prefix = self.base_str().to_owned();
        prefix.push(FIELD_SEP);
        prefix
    }

    /// Structural grammar check.
    ///
    /// Requires 4 or 6 non-empty `:`-delimited fields, optionally followed by
    /// `/key` or `/key/value` with non-empty parts. The empty identifier is
    /// not valid; test [`Id::is_empty`] first where absence is acceptable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let base = self.base_str();

        let mut count = 0;
        for field in base.split(FIELD_SEP) {
            if field.is_empty() {
                return false;
            }
            count += 1;
        }
        if count != 4 && count != 6 {
            return false;
        }

        let Some(tail) = self.0.get(base.len() + 1..) else {
            return true;
        };
        let segment_ok = |s: &str| !s.is_empty() && !s.contains([FIELD_SEP, PATH_SEP]);
        match tail.split_once(PATH_SEP) {
            Some((key, value)) => segment_ok(key) && segment_ok(value),
            None => segment_ok(tail),
        }
    }

    /// Returns true if the identifier is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the identifier is set.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns true if `set` contains this identifier.
    #[must_use]
    pub fn is_in(&self, set: &IdSet) -> bool {
        set.contains(self)
    }

    /// Returns true if the primary type equals `ty`.
    #[must_use]
    pub fn is_parent_type(&self, ty: &Type) -> bool {
        self.is_present() && self.ty() == ty.as_str()
    }

    /// Returns true if a child is present and its type equals `ty`.
    #[must_use]
    pub fn is_child_type(&self, ty: &Type) -> bool {
        self.has_child() && self.child_type() == ty.as_str()
    }

    /// Converts the unset identifier to `None`.
    #[must_use]
    pub fn non_empty(self) -> Option<Id> {
        self.is_present().then_some(self)
    }

    /// The structural shape, formatted as `type[/childType][#pathKey]`.
    #[must_use]
    pub fn shape(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        shape_slice_value(&self.shape_slice())
    }

    /// The structural shape as `[type, childType, pathKey]`.
    #[must_use]
    pub fn shape_slice(&self) -> ShapeSlice {
        [
            self.ty().to_owned(),
            self.child_type().to_owned(),
            self.path_key().to_owned(),
        ]
    }
}

/// Returns the first identifier that is set, or the empty identifier.
pub fn first<'a, I>(ids: I) -> Id
where
    I: IntoIterator<Item = &'a Id>,
{
    ids.into_iter()
        .find(|id| id.is_present())
        .cloned()
        .unwrap_or_default()
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Id {
    type Err = FrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

// =============================================================================
// Tests
// =============================================================================
