/// Session handling
pub mod auth;
/// Endpoint implementations
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits, one per API resource
pub mod interfaces;
