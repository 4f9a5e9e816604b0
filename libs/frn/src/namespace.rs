//! Namespaces and identifier factories.
//!
//! A [`Namespace`] is the `env:service` prefix every identifier starts with.
//! It is always passed explicitly; there is no process-wide default.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::id::{Id, FIELD_SEP};

/// Namespace used for production and for an unset environment.
pub const DEFAULT_NAMESPACE: &str = "fm";

/// Environment name that maps onto [`DEFAULT_NAMESPACE`].
pub const PRODUCTION_ENV: &str = "prd";

/// The `env:service` prefix of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Namespace(String);

impl Namespace {
    /// Builds a namespace for `service` in the environment `env`.
    ///
    /// An empty environment or `prd` normalizes to [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn new(env: &str, service: impl AsRef<str>) -> Self {
        let env = match env {
            "" | PRODUCTION_ENV => DEFAULT_NAMESPACE,
            other => other,
        };
        Self(format!("{env}{FIELD_SEP}{}", service.as_ref()))
    }

    /// Wraps an already formatted `env:service` prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Self {
        Self(prefix.to_owned())
    }

    /// Returns the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The environment half of the prefix.
    #[must_use]
    pub fn env(&self) -> &str {
        self.0
            .split_once(FIELD_SEP)
            .map_or(self.0.as_str(), |(env, _)| env)
    }

    /// The service half of the prefix.
    #[must_use]
    pub fn service(&self) -> &str {
        self.0
            .split(FIELD_SEP)
            .nth(1)
            .unwrap_or_default()
    }

    /// Composes `namespace:type:value`. No validation is performed.
    #[must_use]
    pub fn id(&self, ty: impl AsRef<str>, value: &str) -> Id {
        Id::new(format!("{}{FIELD_SEP}{}{FIELD_SEP}{value}", self.0, ty.as_ref()))
    }

    /// Composes `namespace:type:value:childType:childValue`. No validation is
    /// performed.
    #[must_use]
    pub fn id_with_child(
        &self,
        ty: impl AsRef<str>,
        value: &str,
        child_type: impl AsRef<str>,
        child_value: &str,
    ) -> Id {
        Id::new(format!(
            "{}{FIELD_SEP}{}{FIELD_SEP}{value}{FIELD_SEP}{}{FIELD_SEP}{child_value}",
            self.0,
            ty.as_ref(),
            child_type.as_ref()
        ))
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

// =============================================================================
// Value generation
// =============================================================================

/// Produces values for freshly minted identifiers.
pub trait ValueGenerator: Send + Sync {
    /// Returns the next value.
    fn next_value(&self) -> String;
}

impl<F> ValueGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_value(&self) -> String {
        self()
    }
}

/// Generates a globally unique, time-sortable value.
#[must_use]
pub fn new_value() -> String {
    ulid::Ulid::new().to_string()
}

/// Default generator: a fresh ULID per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl ValueGenerator for UlidGenerator {
    fn next_value(&self) -> String {
        new_value()
    }
}

/// Deterministic counter for tests; every call yields the next integer.
#[derive(Debug, Default)]
pub struct Sequence {
    value: AtomicI64,
}

impl Sequence {
    /// Creates a sequence whose first value is `initial + 1`.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Advances the counter and returns the new value.
    pub fn next_int(&self) -> i64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Advances the counter and returns the new value as a string.
    pub fn next_string(&self) -> String {
        self.next_int().to_string()
    }
}

impl ValueGenerator for Sequence {
    fn next_value(&self) -> String {
        self.next_string()
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Mints identifiers of a single type within a namespace.
#[derive(Clone)]
pub struct IdFactory {
    namespace: Namespace,
    ty: crate::Type,
    generator: Arc<dyn ValueGenerator>,
}

impl IdFactory {
    /// Creates a factory backed by [`UlidGenerator`].
    #[must_use]
    pub fn new(namespace: Namespace, ty: crate::Type) -> Self {
        Self {
            namespace,
            ty,
            generator: Arc::new(UlidGenerator),
        }
    }

    /// Replaces the value generator, e.g. with a [`Sequence`] in tests.
    #[must_use]
    pub fn with_generator(mut self, generator: impl ValueGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub fn ty(&self) -> &crate::Type {
        &self.ty
    }

    /// Mints an identifier with a generated value.
    #[must_use]
    pub fn new_id(&self) -> Id {
        self.with_value(&self.generator.next_value())
    }

    /// Builds an identifier with the given value.
    #[must_use]
    pub fn with_value(&self, value: &str) -> Id {
        self.namespace.id(&self.ty, value)
    }
}

impl std::fmt::Debug for IdFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdFactory")
            .field("namespace", &self.namespace)
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}
