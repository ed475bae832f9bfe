//! MCP tool implementations, grouped by domain
//!
//! Each tool lives in its own submodule with a dedicated implementation
//! and `description.md`; each domain module exposes a `register_*_tools`
//! function that the server calls at construction.

pub mod auth;
pub mod catalog;

pub use auth::register_auth_tools;
pub use catalog::register_catalog_tools;
