//! Configuration loader and defaults for the locsrv server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields include the listening `port`
//! and the static asset directory (`public_dir`).
//!
use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Default listening port
const DEFAULT_PORT: u16 = 3000;

/// Default directory for static assets
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Application configuration
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Directory static assets are served from
    pub public_dir: PathBuf,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("LOCSRV_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),

    public_dir: env::var("LOCSRV_PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR)),
});
