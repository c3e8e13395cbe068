//! Find the releases a package has published upstream.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lookup    │────▶│  Provider   │────▶│  ResultSet  │
//! │  (fan-out)  │     │   (CPAN)    │     │ (normalize) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod config;
pub mod logging;
pub mod report;
pub mod results;
pub mod upstream;
