//! # frn
//!
//! Resource names (FRNs): parsing, composition, and pattern matching.
//!
//! ## ID Format
//!
//! ```text
//! namespace:service:type:value[:childType:childValue][/pathKey[/pathValue]]
//! ```
//!
//! Examples:
//! - `fm:crm:project:1`
//! - `fm:crm:project:1:contract:2`
//! - `dev:crm:entity:1:card_tx:2/fund_request/2`
//!
//! ## Design Principles
//!
//! - An identifier is its string; equality is exact string equality
//! - Fields are read lazily by scanning, without splitting or allocating
//! - Composition never validates; [`Id::is_valid`] is checked on demand
//! - Services and types are open labels, never a closed enum
//! - The namespace is passed explicitly; there is no global default
//!
//! ## Shapes and Patterns
//!
//! The shape of an identifier is `type[/childType][#pathKey]`. Patterns use
//! the same syntax with every part optional and are checked with
//! [`is_match`] (absent identifiers pass) or [`validate`] (absent identifiers
//! fail). [`frn_validator!`] wires a pattern into `validator` derives.

#[macro_use]
mod macros;

mod error;
mod id;
mod namespace;
mod set;
mod shape;
mod validate;

pub use error::FrnError;
pub use id::{first, Id, Service, Type, FIELD_SEP, PATH_SEP};
pub use namespace::{
    new_value, IdFactory, Namespace, Sequence, UlidGenerator, ValueGenerator, DEFAULT_NAMESPACE,
    PRODUCTION_ENV,
};
pub use set::{IdMap, IdSet};
pub use shape::{
    parent_shape, sample_via_shape, sample_via_shape_slice, shape_slice, shape_slice_value,
    try_shape_slice, ShapeSlice, SAMPLE_VALUE,
};
pub use validate::{is_match, matches_pattern, validate, FrnField, VALIDATION_CODE};

/// Re-export for functions generated by [`frn_validator!`].
pub use validator::ValidationError;
