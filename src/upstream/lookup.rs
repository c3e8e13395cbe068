//! Runs one provider search per requested name

use futures::future::join_all;
use tracing::{error, info};

use crate::results::Status;
use crate::upstream::error::ProviderError;
use crate::upstream::provider::{Provider, SearchOutcome};

/// Result of searching a single name
#[derive(Debug)]
pub struct Lookup {
    pub name: String,
    pub outcome: Result<SearchOutcome, ProviderError>,
}

impl Lookup {
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Searches every name concurrently.
///
/// Lookups are returned in the order of `names`. A failed search is recorded
/// in its [`Lookup`] and does not affect the others.
pub async fn search_all(provider: &dyn Provider, names: &[String]) -> Vec<Lookup> {
    let provider_type = provider.provider_type();

    let futures = names.iter().map(|name| async move {
        let outcome = provider.search(name).await;

        match &outcome {
            Ok(SearchOutcome {
                status: Status::Ok,
                results: Some(results),
            }) => info!(
                "Found {} releases for {}/{}",
                results.len(),
                provider_type,
                name
            ),
            Ok(found) => info!("{}/{}: {}", provider_type, name, found.status),
            Err(e) => error!("Failed to search {}/{}: {}", provider_type, name, e),
        }

        Lookup {
            name: name.clone(),
            outcome,
        }
    });

    join_all(futures).await
}
