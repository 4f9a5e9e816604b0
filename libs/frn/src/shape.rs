//! Structural shapes of identifiers.
//!
//! A shape is the silhouette of an identifier with the values left out:
//! `type[/childType][#pathKey]`, e.g. `project/contract#change`. As a
//! [`ShapeSlice`] it is always three elements, empty where a level is absent.

use std::sync::LazyLock;

use regex::Regex;

use crate::id::Id;
use crate::namespace::Namespace;

/// `[primaryType, childType, pathKey]`.
pub type ShapeSlice = [String; 3];

/// Value used for the field a sample identifier introduces.
pub const SAMPLE_VALUE: &str = "_";

static SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_]+)(/([a-zA-Z0-9_]+))?(#([a-zA-Z0-9_]+))?")
        .expect("shape regex is valid")
});

/// Parses a shape string.
///
/// Returns `None` for empty input. Non-empty input the grammar does not
/// match yields three empty strings.
#[must_use]
pub fn try_shape_slice(shape: &str) -> Option<ShapeSlice> {
    if shape.is_empty() {
        return None;
    }
    let Some(caps) = SHAPE_RE.captures(shape) else {
        return Some(ShapeSlice::default());
    };
    let group = |i: usize| caps.get(i).map_or_else(String::new, |m| m.as_str().to_owned());
    Some([group(1), group(3), group(5)])
}

/// Parses a shape string; unmatched input yields three empty strings.
#[must_use]
pub fn shape_slice(shape: &str) -> ShapeSlice {
    try_shape_slice(shape).unwrap_or_default()
}

/// Formats a shape slice back into `type[/childType][#pathKey]`.
///
/// Returns an empty string unless `parts` has exactly three elements.
#[must_use]
pub fn shape_slice_value<S: AsRef<str>>(parts: &[S]) -> String {
    let [primary, child, key] = parts else {
        return String::new();
    };
    let (primary, child, key) = (primary.as_ref(), child.as_ref(), key.as_ref());

    let mut s = String::with_capacity(primary.len() + child.len() + key.len() + 2);
    s.push_str(primary);
    if !child.is_empty() {
        s.push('/');
        s.push_str(child);
    }
    if !key.is_empty() {
        s.push('#');
        s.push_str(key);
    }
    s
}

/// The shape of the immediate parent: the deepest non-empty level cleared.
#[must_use]
pub fn parent_shape(shape: &ShapeSlice) -> ShapeSlice {
    let mut parent = shape.clone();
    if let Some(last) = parent.iter_mut().rev().find(|part| !part.is_empty()) {
        last.clear();
    }
    parent
}

/// Builds a sample identifier of the given shape on top of
/// `potential_parent`.
///
/// Returns `None` when the parent's shape is not the parent shape of
/// `shape`. The level introduced gets the value [`SAMPLE_VALUE`].
#[must_use]
pub fn sample_via_shape(ns: &Namespace, potential_parent: &Id, shape: &str) -> Option<Id> {
    sample_via_shape_slice(ns, potential_parent, &shape_slice(shape))
}

/// Slice-taking variant of [`sample_via_shape`].
#[must_use]
pub fn sample_via_shape_slice(
    ns: &Namespace,
    potential_parent: &Id,
    shape: &ShapeSlice,
) -> Option<Id> {
    if potential_parent.shape_slice() != parent_shape(shape) {
        return None;
    }

    let [primary, child, key] = shape;
    if !key.is_empty() {
        Some(potential_parent.with_path(key, &[SAMPLE_VALUE]))
    } else if !child.is_empty() {
        Some(potential_parent.sub(child, SAMPLE_VALUE))
    } else if !primary.is_empty() {
        Some(ns.id(primary, SAMPLE_VALUE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::Service;

    fn slice(parts: [&str; 3]) -> ShapeSlice {
        parts.map(str::to_owned)
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::unmatched("-project", Some(["", "", ""]))]
    #[case::unary("project", Some(["project", "", ""]))]
    #[case::binary("project/contract", Some(["project", "contract", ""]))]
    #[case::tertiary("project/contract#change", Some(["project", "contract", "change"]))]
    #[case::tertiary_alt("project#change", Some(["project", "", "change"]))]
    fn test_try_shape_slice(#[case] shape: &str, #[case] want: Option<[&str; 3]>) {
        assert_eq!(try_shape_slice(shape), want.map(slice));
    }

    #[test]
    fn test_shape_slice_unmatched_is_blank() {
        assert_eq!(shape_slice(""), slice(["", "", ""]));
        assert_eq!(shape_slice("#"), slice(["", "", ""]));
    }

    #[rstest]
    #[case::unary("project", ["", "", ""])]
    #[case::binary("project/contract", ["project", "", ""])]
    #[case::tertiary("project/contract#change", ["project", "contract", ""])]
    #[case::tertiary_alt("project#change", ["project", "", ""])]
    fn test_parent_shape(#[case] shape: &str, #[case] want: [&str; 3]) {
        assert_eq!(parent_shape(&shape_slice(shape)), slice(want));
    }

    #[test]
    fn test_shape_slice_value_rejects_wrong_length() {
        assert_eq!(shape_slice_value(&["project", "contract"]), "");
        assert_eq!(shape_slice_value(&["a", "b", "c", "d"]), "");
        assert_eq!(shape_slice_value::<&str>(&[]), "");
        assert_eq!(shape_slice_value(&["project", "", "key"]), "project#key");
    }

    #[rstest]
    #[case::binary("dev:crm:project:1", "project/contract", Some("dev:crm:project:1:contract:_"))]
    #[case::tertiary(
        "dev:crm:project:1:contract:2",
        "project/contract#work_item",
        Some("dev:crm:project:1:contract:2/work_item/_")
    )]
    #[case::tertiary_alt(
        "dev:crm:project:1",
        "project#work_item",
        Some("dev:crm:project:1/work_item/_")
    )]
    #[case::primary("", "project", Some("dev:crm:project:_"))]
    #[case::bad_tertiary("dev:crm:project:1:entity:2", "project/contract#work_item", None)]
    #[case::bad_tertiary_alt("dev:crm:user:1", "project#work_item", None)]
    #[case::primary_with_parent("dev:crm:project:1", "project", None)]
    #[case::unmatched_shape("", "", None)]
    #[case::garbage_shape("", "-project", None)]
    fn test_sample_via_shape(#[case] parent: &str, #[case] shape: &str, #[case] want: Option<&str>) {
        let ns = Namespace::new("dev", Service::CRM);
        let got = sample_via_shape(&ns, &Id::new(parent), shape);
        assert_eq!(got, want.map(Id::new));
    }

    fn part() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_]{1,10}"
    }

    fn shape_string() -> impl Strategy<Value = String> {
        (part(), proptest::option::of(part()), proptest::option::of(part())).prop_map(
            |(primary, child, key)| {
                let mut s = primary;
                if let Some(child) = child {
                    s.push('/');
                    s.push_str(&child);
                }
                if let Some(key) = key {
                    s.push('#');
                    s.push_str(&key);
                }
                s
            },
        )
    }

    proptest! {
        #[test]
        fn prop_shape_round_trip(shape in shape_string()) {
            prop_assert_eq!(shape_slice_value(&shape_slice(&shape)), shape);
        }

        #[test]
        fn prop_parent_shape_twice_keeps_primary(a in part(), b in part(), c in part()) {
            let shape = [a.clone(), b, c];
            let grandparent = parent_shape(&parent_shape(&shape));
            prop_assert_eq!(grandparent, [a, String::new(), String::new()]);
        }
    }
}
