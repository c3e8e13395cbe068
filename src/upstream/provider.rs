//! Provider trait for searching releases on upstream registries

#[cfg(test)]
use mockall::automock;

use crate::results::{ResultSet, Status};
use crate::upstream::error::ProviderError;
use crate::upstream::types::ProviderType;

/// What a provider found for one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub status: Status,
    /// Present only when `status` is [`Status::Ok`]
    pub results: Option<ResultSet>,
}

impl SearchOutcome {
    /// A successful search with its releases
    pub fn found(results: ResultSet) -> Self {
        Self {
            status: Status::Ok,
            results: Some(results),
        }
    }

    /// A search the upstream answered without releases
    pub fn unsuccessful(status: Status) -> Self {
        Self {
            status,
            results: None,
        }
    }
}

/// Trait implemented by every upstream provider
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Returns the type of provider this implementation handles
    fn provider_type(&self) -> ProviderType;

    /// Finds all releases of a package
    ///
    /// # Arguments
    /// * `name` - The package name, forwarded to the upstream as-is
    ///
    /// # Returns
    /// * `Ok(SearchOutcome)` - The upstream answered; releases are present only for [`Status::Ok`]
    /// * `Err(ProviderError)` - The request failed or the answer could not be decoded
    async fn search(&self, name: &str) -> Result<SearchOutcome, ProviderError>;
}
