//! Common utilities shared across database drivers.
//!
//! - [`tls`]: custom TLS profiles for MySQL connections
//! - [`params`]: connection-string parameter helpers

pub mod params;
pub mod tls;

pub use params::{config_error, parse_port};
pub use tls::{
    register_tls_config, requires_custom_tls, strip_tls_marker, TlsEnv, TlsError, TlsProfile,
    TlsRegistry, CUSTOM_TLS_KEY, CUSTOM_TLS_MARKER,
};
