//! Helpers for parsing driver connection parameters.

/// A connection-string problem, reported the way sqlx reports its own.
pub fn config_error(message: impl Into<String>) -> sqlx::Error {
    sqlx::Error::Configuration(message.into().into())
}

/// Parse a TCP port number.
pub fn parse_port(value: &str) -> Result<u16, sqlx::Error> {
    value
        .parse()
        .map_err(|_| config_error(format!("invalid port {value:?}")))
}
