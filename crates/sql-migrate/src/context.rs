//! Hand-off bundle for the migration engine.

use std::path::PathBuf;

use crate::config::{Environment, MigrationSettings};
use crate::connection::{open_connection, Connection};
use crate::drivers::{DialectImpl, Driver, TlsEnv, TlsRegistry};
use crate::error::{MigrateError, Result};

/// Everything the migration engine needs to plan and apply migrations.
///
/// Built from a resolved [`Environment`]; replaces process-wide engine
/// settings with values owned by the caller.
#[derive(Debug)]
pub struct MigrationContext {
    /// Live, pinged connection.
    pub connection: Connection,
    /// Confirmed driver.
    pub driver: Driver,
    /// Dialect capability handle for `driver`.
    pub dialect: DialectImpl,
    /// Tracking-table settings.
    pub settings: MigrationSettings,
    /// Directory holding migration files.
    pub migrations_dir: PathBuf,
}

impl MigrationContext {
    /// Open the environment's connection and assemble the context.
    pub async fn open(
        env: &Environment,
        tls_env: &TlsEnv,
        registry: &mut TlsRegistry,
    ) -> Result<Self> {
        let (connection, driver) = open_connection(env, tls_env, registry).await?;
        Ok(Self {
            connection,
            driver,
            dialect: driver.dialect(),
            settings: env.migration_settings(),
            migrations_dir: env.migrations_dir().to_path_buf(),
        })
    }

    /// Close the underlying connection.
    pub async fn close(self) -> Result<()> {
        self.connection.close().await.map_err(MigrateError::Connect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::Dialect;

    #[tokio::test]
    async fn test_open_context_from_config() {
        let config = Config::from_yaml(
            r#"
test:
  dialect: sqlite3
  datasource: "${SQL_MIGRATE_CONTEXT_TEST_DB}"
  table: schema_history
  ignoreunknown: true
"#,
        )
        .unwrap();
        let env = config
            .environment_with("test", |name| {
                (name == "SQL_MIGRATE_CONTEXT_TEST_DB").then(|| "sqlite::memory:".to_string())
            })
            .unwrap();

        let mut registry = TlsRegistry::new();
        let mut context = MigrationContext::open(&env, &TlsEnv::default(), &mut registry)
            .await
            .unwrap();

        assert_eq!(context.driver, Driver::Sqlite3);
        assert_eq!(context.dialect.name(), "sqlite3");
        assert_eq!(context.settings.table_name, "schema_history");
        assert_eq!(context.settings.schema_name, None);
        assert!(context.settings.ignore_unknown);
        assert_eq!(context.migrations_dir, PathBuf::from("migrations"));

        context.connection.ping().await.unwrap();
        context.close().await.unwrap();
    }
}
