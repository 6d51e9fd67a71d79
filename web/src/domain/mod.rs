//! Domain layer
//!
//! Contains the blog's core types with no I/O.
//! - `entities`: posts as they are rendered on the page
//! - `ports`: trait definitions for the GitHub issue source

pub mod entities;
pub mod ports;
