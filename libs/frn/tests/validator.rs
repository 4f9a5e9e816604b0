//! Field-level validation through `validator` derives.

use frn::{frn_validator, Id, IdSet};
use rstest::rstest;
use validator::Validate;

frn_validator!(any_frn, "");
frn_validator!(blah, "blah");
frn_validator!(child_blah, "/blah");
frn_validator!(parent_child, "parent/child");
frn_validator!(parent_child_key, "parent/child#key");
frn_validator!(parent_only, "parent");

#[derive(Debug, Validate)]
struct Required {
    #[validate(required)]
    value: Option<Id>,
}

#[derive(Debug, Validate)]
struct AnyFrn {
    #[validate(custom(function = "any_frn"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct Blah {
    #[validate(custom(function = "blah"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct ChildBlah {
    #[validate(custom(function = "child_blah"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct ParentChild {
    #[validate(custom(function = "parent_child"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct ParentChildKey {
    #[validate(custom(function = "parent_child_key"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct ParentOnly {
    #[validate(custom(function = "parent_only"))]
    value: Id,
}

#[derive(Debug, Validate)]
struct ParentOnlyPtr {
    #[validate(custom(function = "parent_only"))]
    value: Option<Id>,
}

#[derive(Debug, Validate)]
struct ParentOnlySet {
    #[validate(custom(function = "parent_only"))]
    values: IdSet,
}

#[test]
fn test_required() {
    assert!(Required { value: None }.validate().is_err());
    assert!(Required {
        value: Some(Id::new("blah"))
    }
    .validate()
    .is_ok());
}

#[rstest]
#[case::empty("", false)]
#[case::malformed("blah", true)]
#[case::ok("fm:dev:blah:123", false)]
fn test_any_frn(#[case] value: &str, #[case] want_err: bool) {
    let err = AnyFrn { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[rstest]
#[case::empty("", false)]
#[case::ok("fm:dev:blah:123", false)]
#[case::fails("fm:dev:boom:123", true)]
fn test_parent(#[case] value: &str, #[case] want_err: bool) {
    let err = Blah { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[rstest]
#[case::empty("", false)]
#[case::ok("fm:dev:do-not-matter:123:blah:456", false)]
#[case::fails("fm:dev:blah:123", true)]
fn test_child(#[case] value: &str, #[case] want_err: bool) {
    let err = ChildBlah { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[rstest]
#[case::empty("", false)]
#[case::ok("fm:dev:parent:123:child:456", false)]
#[case::bad_child("fm:dev:parent:123:other:456", true)]
#[case::bad_parent("fm:dev:other:123:child:456", true)]
#[case::missing_child("fm:dev:parent:123", true)]
#[case::unexpected_path("fm:dev:parent:123:child:456/key/value", true)]
fn test_parent_and_child(#[case] value: &str, #[case] want_err: bool) {
    let err = ParentChild { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[rstest]
#[case::empty("", false)]
#[case::ok("fm:dev:parent:123:child:456/key/value", false)]
#[case::ok_no_value("fm:dev:parent:123:child:456/key", false)]
#[case::bad_key("fm:dev:parent:123:child:456/other/value", true)]
#[case::bad_child("fm:dev:parent:123:other:456/key/value", true)]
#[case::missing_path("fm:dev:parent:123:child:456", true)]
fn test_parent_child_and_path(#[case] value: &str, #[case] want_err: bool) {
    let err = ParentChildKey { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[rstest]
#[case::ok("fm:dev:parent:123", false)]
#[case::child("fm:dev:parent:123:child:456", true)]
fn test_no_child(#[case] value: &str, #[case] want_err: bool) {
    let err = ParentOnly { value: Id::new(value) }.validate();
    assert_eq!(err.is_err(), want_err);
}

#[test]
fn test_ptr() {
    assert!(ParentOnlyPtr { value: None }.validate().is_ok());
    assert!(ParentOnlyPtr {
        value: Some(Id::new("fm:dev:parent:1"))
    }
    .validate()
    .is_ok());
    assert!(ParentOnlyPtr {
        value: Some(Id::new("fm:dev:other:1"))
    }
    .validate()
    .is_err());
}

#[test]
fn test_set() {
    let ok = ParentOnlySet {
        values: IdSet::unique(["fm:dev:parent:1", "fm:dev:parent:2"]),
    };
    assert!(ok.validate().is_ok());

    let bad = ParentOnlySet {
        values: IdSet::unique(["fm:dev:parent:1", "fm:dev:other:2"]),
    };
    let errors = bad.validate().unwrap_err();
    let field_errors = errors.field_errors();
    assert_eq!(field_errors["values"][0].code, frn::VALIDATION_CODE);
}
