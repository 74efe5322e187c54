//! Service configuration

use log::warn;

use crate::calculator::DEFAULT_MAX_RANGE_POINTS;
use crate::models::DEFAULT_CURRENCY;

/// Environment variable overriding the CORS origin
pub const ALLOWED_ORIGIN_VAR: &str = "NPV_ALLOWED_ORIGIN";

/// Environment variable overriding the currency used when a request omits one
pub const DEFAULT_CURRENCY_VAR: &str = "NPV_DEFAULT_CURRENCY";

/// Environment variable overriding the rate-point limit of one sweep
pub const MAX_RANGE_POINTS_VAR: &str = "NPV_MAX_RANGE_POINTS";

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Value of `Access-Control-Allow-Origin` on every response
    pub allowed_origin: String,

    /// Currency applied when the request body has no `currency` field
    pub default_currency: String,

    /// Sweeps producing more rate points than this are rejected
    pub max_range_points: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            max_range_points: DEFAULT_MAX_RANGE_POINTS,
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by any non-empty environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            allowed_origin: non_empty(ALLOWED_ORIGIN_VAR).unwrap_or(defaults.allowed_origin),
            default_currency: non_empty(DEFAULT_CURRENCY_VAR)
                .map(|c| c.trim().to_uppercase())
                .unwrap_or(defaults.default_currency),
            max_range_points: non_empty(MAX_RANGE_POINTS_VAR)
                .and_then(|v| match v.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Some(n),
                    _ => {
                        warn!("Ignoring invalid {}={:?}", MAX_RANGE_POINTS_VAR, v);
                        None
                    }
                })
                .unwrap_or(defaults.max_range_points),
        }
    }
}
