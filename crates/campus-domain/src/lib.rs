//! Domain types shared across all Campus services.
//!
//! Pure types with no framework dependencies, usable from any layer.

pub mod user;
