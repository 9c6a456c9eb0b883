//! Environment resolution and validation.

use tracing::debug;

use super::expand::expand_env_with;
use super::{Config, Environment, DEFAULT_MIGRATIONS_DIR};
use crate::error::{MigrateError, Result};

/// Select, validate and normalize one environment.
///
/// Dialect is checked before the data source. The data source has its
/// variable references expanded through `lookup`, and an empty `dir`
/// becomes [`DEFAULT_MIGRATIONS_DIR`].
pub fn resolve<F>(config: &Config, name: &str, lookup: F) -> Result<Environment>
where
    F: Fn(&str) -> Option<String>,
{
    let mut env = config
        .environments
        .get(name)
        .cloned()
        .ok_or_else(|| MigrateError::NoEnvironment(name.to_string()))?;

    if env.dialect.is_empty() {
        return Err(MigrateError::NoDialect);
    }

    if env.data_source.is_empty() {
        return Err(MigrateError::NoDataSource);
    }
    env.data_source = expand_env_with(&env.data_source, lookup);

    if env.dir.is_empty() {
        env.dir = DEFAULT_MIGRATIONS_DIR.to_string();
    }

    debug!(
        environment = name,
        dialect = %env.dialect,
        data_source = %env.redacted_data_source(),
        dir = %env.dir,
        "Resolved environment"
    );

    Ok(env)
}
