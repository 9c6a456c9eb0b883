//! Configuration type definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::data_source::redact_data_source;

/// Default migrations directory when an environment leaves `dir` empty.
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Default tracking table name, kept for compatibility with existing databases.
pub const DEFAULT_MIGRATION_TABLE: &str = "gorp_migrations";

/// Root configuration: environment name to environment descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    /// Environments keyed by operator-chosen name (e.g. "development").
    pub environments: BTreeMap<String, Environment>,
}

/// A named bundle of dialect, data source and migration settings.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Database dialect: sqlite3, postgres or mysql.
    #[serde(default)]
    pub dialect: String,

    /// Driver connection string. May reference environment variables.
    #[serde(default, rename = "datasource")]
    pub data_source: String,

    /// Migrations directory (default: "migrations").
    #[serde(default)]
    pub dir: String,

    /// Tracking table name.
    #[serde(default, rename = "table", skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    /// Schema holding the tracking table.
    #[serde(default, rename = "schema", skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,

    /// Tolerate applied migrations that have no file on disk.
    #[serde(default, rename = "ignoreunknown")]
    pub ignore_unknown: bool,
}

impl Environment {
    /// Migrations directory as a path.
    pub fn migrations_dir(&self) -> &Path {
        Path::new(&self.dir)
    }

    /// Settings the migration engine consumes for this environment.
    pub fn migration_settings(&self) -> MigrationSettings {
        MigrationSettings {
            table_name: non_empty(&self.table_name)
                .unwrap_or(DEFAULT_MIGRATION_TABLE)
                .to_string(),
            schema_name: non_empty(&self.schema_name).map(str::to_string),
            ignore_unknown: self.ignore_unknown,
        }
    }

    /// Data source with the password replaced, safe for logs.
    pub fn redacted_data_source(&self) -> String {
        redact_data_source(&self.data_source)
    }
}

// Custom Debug implementation to avoid exposing credentials in logs
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("dialect", &self.dialect)
            .field("data_source", &self.redacted_data_source())
            .field("dir", &self.dir)
            .field("table_name", &self.table_name)
            .field("schema_name", &self.schema_name)
            .field("ignore_unknown", &self.ignore_unknown)
            .finish()
    }
}

/// Tracking-table settings handed to the migration engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSettings {
    /// Tracking table name.
    pub table_name: String,
    /// Schema holding the tracking table, if any.
    pub schema_name: Option<String>,
    /// Tolerate applied migrations that have no file on disk.
    pub ignore_unknown: bool,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_MIGRATION_TABLE.to_string(),
            schema_name: None,
            ignore_unknown: false,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
