//! Collections of identifiers.
//!
//! [`IdSet`] is an ordered sequence; it only deduplicates when built through
//! [`IdSet::unique`] or [`IdSet::unique_non_empty`], which keep the first
//! occurrence of each identifier. [`IdMap`] is the unordered unique form used
//! for membership tests.

use std::collections::HashSet;

use crate::id::Id;

/// An ordered collection of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IdSet(Vec<Id>);

impl IdSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects identifiers, dropping repeats and keeping first-seen order.
    #[must_use]
    pub fn unique<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        Self::dedup(ids.into_iter().map(Into::into), false)
    }

    /// Like [`IdSet::unique`], also dropping empty identifiers.
    #[must_use]
    pub fn unique_non_empty<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Id>,
    {
        Self::dedup(ids.into_iter().map(Into::into), true)
    }

    fn dedup(ids: impl Iterator<Item = Id>, skip_empty: bool) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for id in ids {
            if skip_empty && id.is_empty() {
                continue;
            }
            if seen.insert(id.clone()) {
                kept.push(id);
            }
        }
        Self(kept)
    }

    /// Converts strings, trimming whitespace and skipping blank entries.
    /// Repeats are kept.
    #[must_use]
    pub fn from_strings<I, S>(ss: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ss.into_iter()
            .map(|s| s.as_ref().trim().to_owned())
            .filter(|s| !s.is_empty())
            .map(Id::from)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.0.contains(id)
    }

    /// Identifiers satisfying `predicate`, in order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Id) -> bool,
    {
        self.0.iter().filter(|id| predicate(id)).cloned().collect()
    }

    /// The set with empty identifiers removed.
    #[must_use]
    pub fn trim(&self) -> Self {
        self.filter(Id::is_present)
    }

    /// Exports the identifiers as strings.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(|id| id.as_str().to_owned()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, id: Id) {
        self.0.push(id);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Id> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Id] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Id> {
        self.0
    }
}

impl From<Vec<Id>> for IdSet {
    fn from(ids: Vec<Id>) -> Self {
        Self(ids)
    }
}

impl FromIterator<Id> for IdSet {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for IdSet {
    type Item = Id;
    type IntoIter = std::vec::IntoIter<Id>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = &'a Id;
    type IntoIter = std::slice::Iter<'a, Id>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serialized as `null` when no identifier is set, otherwise as the unique
/// non-empty identifiers in order.
impl serde::Serialize for IdSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let unique = IdSet::unique_non_empty(self.0.iter().cloned());
        if unique.is_empty() {
            return serializer.serialize_none();
        }
        serializer.collect_seq(unique.iter())
    }
}

impl<'de> serde::Deserialize<'de> for IdSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ids = <Option<Vec<String>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ids.map(IdSet::unique_non_empty).unwrap_or_default())
    }
}

// =============================================================================
// IdMap
// =============================================================================

/// An unordered set of unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdMap(HashSet<Id>);

impl IdMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id`, returning false if it was already present.
    pub fn insert(&mut self, id: Id) -> bool {
        self.0.insert(id)
    }

    pub fn remove(&mut self, id: &Id) -> bool {
        self.0.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.0.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapses the map into a sequence. Order is unspecified.
    #[must_use]
    pub fn to_set(&self) -> IdSet {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<Id> for IdMap {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&IdSet> for IdMap {
    fn from(set: &IdSet) -> Self {
        set.iter().cloned().collect()
    }
}

impl serde::Serialize for IdMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_set(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for IdMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let set = <IdSet as serde::Deserialize>::deserialize(deserializer)?;
        Ok(set.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ids(ss: &[&str]) -> IdSet {
        ss.iter().map(|s| Id::new(*s)).collect()
    }

    #[test]
    fn test_unique_keeps_first_seen_order() {
        let set = IdSet::unique(["c", "a", "c", "b", "a"]);
        assert_eq!(set, ids(&["c", "a", "b"]));
    }

    #[test]
    fn test_unique_non_empty() {
        let set = IdSet::unique_non_empty(["", "a", "", "a", "b"]);
        assert_eq!(set, ids(&["a", "b"]));
        assert_eq!(IdSet::unique(["", "a", ""]), ids(&["", "a"]));
    }

    #[test]
    fn test_trim() {
        let set = ids(&["a", "b", "", "", "c", ""]);
        assert_eq!(set.trim(), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_contains_and_filter() {
        let set = ids(&["fm:crm:project:1", "fm:crm:user:2", "fm:crm:project:3"]);
        assert!(set.contains(&Id::new("fm:crm:user:2")));
        assert!(!set.contains(&Id::new("fm:crm:user:9")));

        let projects = set.filter(|id| id.ty() == "project");
        assert_eq!(projects, ids(&["fm:crm:project:1", "fm:crm:project:3"]));
    }

    #[test]
    fn test_from_strings_trims_and_keeps_repeats() {
        let set = IdSet::from_strings([" a ", "", "  ", "b", "a"]);
        assert_eq!(set, ids(&["a", "b", "a"]));
        assert_eq!(set.strings(), vec!["a", "b", "a"]);
    }

    #[rstest]
    #[case::ok(&["a", "b", "c"], "[\"a\",\"b\",\"c\"]")]
    #[case::repeats(&["a", "b", "a"], "[\"a\",\"b\"]")]
    #[case::empty(&[], "null")]
    #[case::only_blank(&[""], "null")]
    fn test_serialize(#[case] set: &[&str], #[case] want: &str) {
        assert_eq!(serde_json::to_string(&ids(set)).unwrap(), want);
    }

    #[rstest]
    #[case::ok("[\"a\",\"b\",\"c\"]", &["a", "b", "c"])]
    #[case::null("null", &[])]
    #[case::blank_entries("[\"\",\"a\",\"a\"]", &["a"])]
    fn test_deserialize(#[case] json: &str, #[case] want: &[&str]) {
        let got: IdSet = serde_json::from_str(json).unwrap();
        assert_eq!(got, ids(want));
    }

    #[test]
    fn test_id_map_membership() {
        let mut map = IdMap::from(&ids(&["a", "b", "a"]));
        assert_eq!(map.len(), 2);
        assert!(map.contains(&Id::new("a")));
        assert!(!map.insert(Id::new("b")));
        assert!(map.insert(Id::new("c")));
        assert!(map.remove(&Id::new("a")));

        let mut collapsed = map.to_set().strings();
        collapsed.sort();
        assert_eq!(collapsed, vec!["b", "c"]);
    }

    #[test]
    fn test_id_map_serde() {
        let map: IdMap = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert!(map.contains(&Id::new("a")));
        assert_eq!(serde_json::to_string(&IdMap::new()).unwrap(), "null");
    }
}
