//! Provider implementations for upstream registries

pub mod cpan;

pub use cpan::CpanProvider;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::{CuppaConfig, HttpConfig};
use crate::upstream::error::ProviderError;
use crate::upstream::provider::Provider;
use crate::upstream::types::ProviderType;

/// Builds the HTTP client shared by providers
pub fn build_client(config: &HttpConfig) -> Result<Client, ProviderError> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());

    if let Some(timeout_ms) = config.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    Ok(builder.build()?)
}

/// Creates the provider for `provider_type` from configuration
pub fn create_provider(
    provider_type: ProviderType,
    config: &CuppaConfig,
    client: Client,
) -> Result<Arc<dyn Provider>, ProviderError> {
    match provider_type {
        ProviderType::Cpan => {
            let cpan = &config.providers.cpan;
            if !cpan.enabled {
                return Err(ProviderError::Disabled(provider_type.to_string()));
            }
            Ok(Arc::new(CpanProvider::from_config(client, cpan)?))
        }
    }
}
