/// Configuration management and settings
pub mod config;
/// HTTP server implementation and request handling
pub mod server;
/// Static asset resolution and serving
pub mod static_files;
