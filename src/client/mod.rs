//! Shared HTTP client.

mod executor;

pub use executor::{ApiClient, ApiClientBuilder};
