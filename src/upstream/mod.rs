//! Upstream provider layer
//!
//! Providers query an upstream registry for every release of a package and
//! normalize the answer into [`crate::results::ResultSet`].
//!
//! # Modules
//!
//! - [`provider`]: Provider trait implemented by every upstream
//! - [`providers`]: Concrete providers (CPAN) and their factory
//! - [`lookup`]: Concurrent search over several names
//! - [`error`]: Error type for provider operations
//! - [`types`]: Common types like `ProviderType`

pub mod error;
pub mod lookup;
pub mod provider;
pub mod providers;
pub mod types;
