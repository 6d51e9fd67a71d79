//! Page module
//!
//! Server-rendered HTML for the blog's single page.

pub mod renderer;

pub use renderer::render_index;
