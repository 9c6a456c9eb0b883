//! Custom TLS profiles for MySQL connections.
//!
//! A data source opts into a custom profile with the `tls=custom` query
//! marker. The profile's trust pool comes from the CA bundle named by
//! `MYSQL_CA_CERT_FILE` and its expected server name from `MYSQL_HOST`.
//! Profiles live in a [`TlsRegistry`] owned by the caller and are looked up
//! by key when the MySQL driver opens a connection.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use rustls::RootCertStore;
use thiserror::Error;
use tracing::debug;

/// Registry key of the profile requested by the `tls=custom` marker.
pub const CUSTOM_TLS_KEY: &str = "custom";

/// Data source marker requesting the custom TLS profile.
pub const CUSTOM_TLS_MARKER: &str = "tls=custom";

/// Environment variable naming the CA certificate bundle.
pub const CA_CERT_FILE_VAR: &str = "MYSQL_CA_CERT_FILE";

/// Environment variable holding the expected server name.
pub const SERVER_NAME_VAR: &str = "MYSQL_HOST";

/// TLS profile registration errors.
#[derive(Error, Debug)]
pub enum TlsError {
    /// The CA certificate file could not be read.
    #[error("cannot read CA certificate {}", path.display())]
    CertificateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CA certificate file contains a malformed PEM block.
    #[error("cannot parse CA certificate {}", path.display())]
    CertificateParse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No certificate in the file could be added to the trust pool.
    #[error("cannot append certs from PEM {}", path.display())]
    NoCertificates { path: PathBuf },
}

/// TLS inputs taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsEnv {
    /// Path to the CA certificate bundle.
    pub ca_cert_file: PathBuf,
    /// Expected server name; empty means the data source host.
    pub server_name: String,
}

impl TlsEnv {
    /// Read `MYSQL_CA_CERT_FILE` and `MYSQL_HOST`. Unset variables are empty.
    pub fn from_env() -> Self {
        Self {
            ca_cert_file: PathBuf::from(std::env::var(CA_CERT_FILE_VAR).unwrap_or_default()),
            server_name: std::env::var(SERVER_NAME_VAR).unwrap_or_default(),
        }
    }
}

/// A trust pool plus the server name it is expected to vouch for.
#[derive(Clone, PartialEq, Eq)]
pub struct TlsProfile {
    ca_pem: Vec<u8>,
    certificates: usize,
    server_name: String,
}

impl TlsProfile {
    /// Build a profile from a PEM CA bundle on disk.
    pub fn from_pem_file(path: &Path, server_name: impl Into<String>) -> Result<Self, TlsError> {
        let pem = std::fs::read(path).map_err(|source| TlsError::CertificateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_pem(pem, path, server_name)
    }

    /// Build a profile from PEM bytes. `origin` is used in error messages.
    pub fn from_pem(
        pem: Vec<u8>,
        origin: &Path,
        server_name: impl Into<String>,
    ) -> Result<Self, TlsError> {
        let certs = rustls_pemfile::certs(&mut pem.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| TlsError::CertificateParse {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(certs);
        if added == 0 {
            return Err(TlsError::NoCertificates {
                path: origin.to_path_buf(),
            });
        }
        debug!(
            "Loaded {} CA certificate(s) from {} ({} ignored)",
            added,
            origin.display(),
            ignored
        );

        Ok(Self {
            ca_pem: pem,
            certificates: added,
            server_name: server_name.into(),
        })
    }

    /// The validated PEM bundle.
    pub fn ca_pem(&self) -> &[u8] {
        &self.ca_pem
    }

    /// Number of certificates in the trust pool.
    pub fn certificate_count(&self) -> usize {
        self.certificates
    }

    /// Expected server name; empty means the data source host.
    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}

impl fmt::Debug for TlsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsProfile")
            .field("certificates", &self.certificates)
            .field("server_name", &self.server_name)
            .finish()
    }
}

/// Named TLS profiles available to the MySQL driver.
#[derive(Debug, Clone, Default)]
pub struct TlsRegistry {
    profiles: HashMap<String, TlsProfile>,
}

impl TlsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `profile` under `key`, returning the profile it replaced.
    pub fn register(&mut self, key: impl Into<String>, profile: TlsProfile) -> Option<TlsProfile> {
        let key = key.into();
        let previous = self.profiles.insert(key.clone(), profile);
        if previous.is_some() {
            debug!("Replaced TLS profile '{}'", key);
        }
        previous
    }

    /// Look up a profile by key.
    pub fn get(&self, key: &str) -> Option<&TlsProfile> {
        self.profiles.get(key)
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Whether opening `data_source` with `dialect` needs the custom TLS profile.
pub fn requires_custom_tls(dialect: &str, data_source: &str) -> bool {
    dialect == "mysql" && data_source.contains(CUSTOM_TLS_MARKER)
}

/// Load the CA bundle at `pem_path` and register it under `key`.
///
/// A later registration under the same key replaces the earlier one.
pub fn register_tls_config(
    registry: &mut TlsRegistry,
    pem_path: &Path,
    key: &str,
    server_name: &str,
) -> Result<(), TlsError> {
    let profile = TlsProfile::from_pem_file(pem_path, server_name)?;
    debug!(
        "Registered TLS profile '{}' (server name '{}')",
        key,
        profile.server_name()
    );
    registry.register(key, profile);
    Ok(())
}

/// Remove the `tls=custom` query parameter from a data source.
pub fn strip_tls_marker(data_source: &str) -> String {
    let Some((base, query)) = data_source.split_once('?') else {
        return data_source.to_string();
    };

    let params: Vec<&str> = query
        .split('&')
        .filter(|p| !p.is_empty() && *p != CUSTOM_TLS_MARKER)
        .collect();

    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}
