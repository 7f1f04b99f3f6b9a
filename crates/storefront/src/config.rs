//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SAFFRON_HOST` - Bind address (default: 127.0.0.1)
//! - `SAFFRON_PORT` - Listen port (default: 3000)
//! - `SHIPPING_FREE_THRESHOLD` - Subtotal above which shipping is free (default: 1999)
//! - `SHIPPING_LOCAL_REGION` - Region billed at the local rate (default: Gujarat)
//! - `SHIPPING_LOCAL_RATE_PER_KG` - Local per-kilogram rate (default: 50)
//! - `SHIPPING_REMOTE_RATE_PER_KG` - Remote per-kilogram rate (default: 80)
//! - `SHIPPING_HEAVY_CUTOFF_KG` - Weight above which the rate doubles (default: 1)
//! - `WHATSAPP_NUMBER` - Initial fulfillment handoff destination number
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use rust_decimal::Decimal;
use thiserror::Error;

use saffron_core::ShippingRates;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shipping tariff applied to every quote
    pub shipping: ShippingRates,
    /// Initial fulfillment handoff destination (seeds the settings store)
    pub handoff_number: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry trace sample rate
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or_default(lookup, "SAFFRON_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or_default(lookup, "SAFFRON_PORT", 3000_u16)?;
        let shipping = shipping_from_lookup(lookup)?;

        Ok(Self {
            host,
            port,
            shipping,
            handoff_number: lookup("WHATSAPP_NUMBER"),
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_or_default(lookup, "SENTRY_SAMPLE_RATE", 1.0_f32)?,
            sentry_traces_sample_rate: parse_or_default(lookup, "SENTRY_TRACES_SAMPLE_RATE", 0.0_f32)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build the shipping tariff, starting from the production defaults.
fn shipping_from_lookup(
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<ShippingRates, ConfigError> {
    let defaults = ShippingRates::default();

    Ok(ShippingRates {
        free_threshold: parse_or_default::<Decimal>(
            lookup,
            "SHIPPING_FREE_THRESHOLD",
            defaults.free_threshold,
        )?,
        local_region: lookup("SHIPPING_LOCAL_REGION").unwrap_or(defaults.local_region),
        local_rate_per_kg: parse_or_default(
            lookup,
            "SHIPPING_LOCAL_RATE_PER_KG",
            defaults.local_rate_per_kg,
        )?,
        remote_rate_per_kg: parse_or_default(
            lookup,
            "SHIPPING_REMOTE_RATE_PER_KG",
            defaults.remote_rate_per_kg,
        )?,
        heavy_cutoff_kg: parse_or_default(
            lookup,
            "SHIPPING_HEAVY_CUTOFF_KG",
            defaults.heavy_cutoff_kg,
        )?,
    })
}

/// Parse an optional variable, falling back to a default when absent.
fn parse_or_default<T: std::str::FromStr>(
    lookup: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
