//! Result-size limits for list endpoints
//!
//! Unlike clamping, an out-of-range limit is an input error and is
//! reported before any query runs.

use configs::ReportsConfig;

use crate::errors::ServiceError;

/// Validated row limit, always within `1..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListLimit(u64);

impl ListLimit {
    /// Apply the configured default when absent; reject values outside `1..=max_limit`.
    pub fn parse(requested: Option<i64>, cfg: &ReportsConfig) -> Result<Self, ServiceError> {
        let Some(n) = requested else { return Ok(Self(cfg.default_limit)) };
        if n < 1 || n as u64 > cfg.max_limit {
            return Err(ServiceError::Validation(format!(
                "limit: must be between 1 and {} (got {n})",
                cfg.max_limit
            )));
        }
        Ok(Self(n as u64))
    }

    pub fn get(self) -> u64 { self.0 }
}

impl Default for ListLimit {
    fn default() -> Self { Self(ReportsConfig::default().default_limit) }
}
