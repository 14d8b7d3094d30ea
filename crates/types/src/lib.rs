//! Core types and traits for the layerconf workspace.
//!
//! This crate defines the shared abstractions used by the registry and by
//! section schemas: the error type, update semantics for runtime pushes, and
//! the custom reload capability a section may implement.

pub mod error;
pub mod mode;
pub mod traits;

pub use error::{ConfigError, Result};
pub use figment::value::{Dict, Value};
pub use mode::UpdateMode;
pub use traits::Reload;
