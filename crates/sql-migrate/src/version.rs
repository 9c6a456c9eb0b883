//! Build version reporting.

/// Version reported when no version was embedded at build time.
pub const FALLBACK_VERSION: &str = "dev";

/// The version embedded through `SQL_MIGRATE_VERSION` at build time.
///
/// Falls back to [`FALLBACK_VERSION`] when the variable was unset, empty or
/// `(devel)`.
pub fn version() -> &'static str {
    embedded_or_fallback(option_env!("SQL_MIGRATE_VERSION"))
}

fn embedded_or_fallback(embedded: Option<&'static str>) -> &'static str {
    match embedded {
        Some(v) if !v.is_empty() && v != "(devel)" => v,
        _ => FALLBACK_VERSION,
    }
}
