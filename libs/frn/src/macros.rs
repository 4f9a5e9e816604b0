//! Macros for defining label types and field validators.

/// Macro to define an open string label (service code, entity type).
///
/// This generates a newtype wrapper around `Cow<'static, str>` with:
/// - `from_static()` usable in `const` context for well-known labels
/// - `new()` for labels only known at runtime
/// - `Display`, `AsRef<str>`, and comparisons against `str`
/// - `Serialize` and `Deserialize` as the bare string
///
/// The set of labels is deliberately open: any string is accepted.
///
/// # Example
///
/// ```ignore
/// define_label!(Service);
///
/// impl Service {
///     pub const CRM: Self = Self::from_static("crm");
/// }
/// ```
macro_rules! define_label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(std::borrow::Cow<'static, str>);

        impl $name {
            /// Creates a label from a static string.
            #[must_use]
            pub const fn from_static(s: &'static str) -> Self {
                Self(std::borrow::Cow::Borrowed(s))
            }

            /// Creates a label from any string.
            #[must_use]
            pub fn new(s: impl Into<String>) -> Self {
                Self(std::borrow::Cow::Owned(s.into()))
            }

            /// Returns the label as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the label is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::new(s))
            }
        }
    };
}

/// Macro to define a `validator` custom function bound to a pattern.
///
/// The generated function accepts anything implementing
/// [`FrnField`](crate::FrnField) (an identifier, a slice of identifiers, or an
/// [`IdSet`](crate::IdSet)). On an `Option<Id>` field the derive only calls
/// it when a value is present, so absent identifiers pass; pair it with
/// `required` when presence matters.
///
/// # Example
///
/// ```ignore
/// frn::frn_validator!(project_contract, "project/contract");
///
/// #[derive(validator::Validate)]
/// struct Invoice {
///     #[validate(custom(function = "project_contract"))]
///     contract: frn::Id,
/// }
/// ```
#[macro_export]
macro_rules! frn_validator {
    ($(#[$meta:meta])* $vis:vis $name:ident, $pattern:literal) => {
        $(#[$meta])*
        $vis fn $name<T>(value: &T) -> ::core::result::Result<(), $crate::ValidationError>
        where
            T: $crate::FrnField + ?Sized,
        {
            $crate::matches_pattern(value, $pattern)
        }
    };
}
