//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_LIMIT, DEFAULT_SKIP, MAX_LIMIT};

/// Offset/limit query parameters for list endpoints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListParams {
    /// Number of items to skip, in insertion order
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl ListParams {
    /// Get limit capped at the maximum page size
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_LIMIT)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn limit_is_capped() {
        let params: ListParams = serde_json::from_str(r#"{"limit": 5000}"#).unwrap();
        assert_eq!(params.limit(), MAX_LIMIT);
    }

    #[test]
    fn explicit_params_are_kept() {
        let params: ListParams = serde_json::from_str(r#"{"skip": 3, "limit": 7}"#).unwrap();
        assert_eq!(params.skip, 3);
        assert_eq!(params.limit(), 7);
    }
}
