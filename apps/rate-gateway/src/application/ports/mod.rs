//! Port definitions for external collaborators.

mod rate_provider_port;

pub use rate_provider_port::{ProviderError, RateProviderPort};
