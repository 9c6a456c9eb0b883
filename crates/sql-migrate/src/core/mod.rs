//! Core abstractions shared by the dialect drivers.
//!
//! - [`traits`]: the [`Dialect`] capability trait handed to the migration engine

pub mod traits;

pub use traits::Dialect;
