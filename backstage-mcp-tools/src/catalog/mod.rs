//! Backstage catalog access
//!
//! Everything the tool layer needs to talk to a catalog instance: the
//! environment-derived configuration, the shared credential store, the
//! single-request HTTP executor, and the entity formatting helpers.
//!
//! The executor is a trait ([`CatalogExecutor`]) so tools can be tested
//! against a scripted implementation without a running catalog.

pub mod client;
pub mod config;
pub mod credentials;
pub mod entity;
pub mod error;

pub use client::{CatalogClient, CatalogExecutor};
pub use config::CatalogConfig;
pub use credentials::CredentialStore;
pub use entity::{format_entity, AncestryNode, AncestryResponse, EntityPage, ENTITY_SEPARATOR};
pub use error::{CatalogError, Result};
