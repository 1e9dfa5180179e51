//! rc-core: shared foundation for routecolor.
//!
//! Contains:
//! - color (the `Color` value assigned to each route)
//! - error (shared error types)

pub mod color;
pub mod error;

// Re-exports: nice ergonomics for downstream crates
pub use color::Color;
pub use error::{RcError, RcResult};
