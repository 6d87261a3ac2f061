/// Compression service interface
pub mod compression;
/// Download service interface
pub mod download;
/// File service interface
pub mod file;
/// User service interface
pub mod user;
