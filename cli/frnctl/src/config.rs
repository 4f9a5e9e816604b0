//! Configuration from the environment and logging setup.
//!
//! Handles:
//! - Default environment and service for composed identifiers
//! - Log level and format

use anyhow::{bail, Result};
use frn::{Namespace, Service};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Environment; empty or `prd` selects the default namespace.
    pub env: String,
    pub service: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("FRN_ENV").unwrap_or_default();
        check_env("FRN_ENV", &env)?;

        let service = lookup("FRN_SERVICE").unwrap_or_else(|| Service::CRM.to_string());
        check_service("FRN_SERVICE", &service)?;

        let log_level = lookup("FRN_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_json = lookup("FRN_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            env,
            service,
            log_level,
            log_json,
        })
    }

    /// The namespace for composed identifiers.
    pub fn namespace(&self) -> Namespace {
        Namespace::new(&self.env, &self.service)
    }

    /// Applies command-line overrides, checked like their variables.
    pub fn with_overrides(mut self, env: Option<String>, service: Option<String>) -> Result<Self> {
        if let Some(env) = env {
            check_env("--env", &env)?;
            self.env = env;
        }
        if let Some(service) = service {
            check_service("--service", &service)?;
            self.service = service;
        }
        Ok(self)
    }
}

fn has_separator(value: &str) -> bool {
    value.contains([frn::FIELD_SEP, frn::PATH_SEP])
}

/// An empty environment is allowed and selects the default namespace.
fn check_env(source: &str, env: &str) -> Result<()> {
    if has_separator(env) {
        bail!("{source} must not contain ':' or '/', got '{env}'");
    }
    Ok(())
}

fn check_service(source: &str, service: &str) -> Result<()> {
    if service.is_empty() || has_separator(service) {
        bail!("{source} must be a non-empty code without ':' or '/', got '{service}'");
    }
    Ok(())
}

/// Installs the stderr subscriber (prefer RUST_LOG, fall back to the
/// configured level).
pub fn init_tracing(config: &Config, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&config.log_level).to_string();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    debug!(env = %config.env, service = %config.service, "Configuration loaded");
}
