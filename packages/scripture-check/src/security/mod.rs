//! Credential handling for remote providers.

pub mod credentials;

pub use credentials::ApiKey;
