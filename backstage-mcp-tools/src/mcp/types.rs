//! Request types for the catalog tool surface

use serde::Deserialize;

/// Default page size for entity listings
pub const DEFAULT_ENTITY_LIMIT: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_ENTITY_LIMIT
}

/// Request to replace the bearer token used on catalog requests
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetBearerTokenRequest {
    /// The token to send on all subsequent catalog requests
    pub token: String,
}

/// Request to list catalog entities
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListEntitiesRequest {
    /// Restrict the listing to this entity kind (e.g. Component, API)
    pub kind: Option<String>,
    /// Restrict the listing to this namespace
    pub namespace: Option<String>,
    /// Maximum number of entities to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Request to fetch a single entity by its compound name
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetEntityRequest {
    /// The entity kind (e.g. Component, API, System)
    pub kind: String,
    /// The entity namespace
    pub namespace: String,
    /// The entity name
    pub name: String,
}

/// Request to fetch the ancestry chain of an entity
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetEntityAncestryRequest {
    /// The entity kind (e.g. Component, API, System)
    pub kind: String,
    /// The entity namespace
    pub namespace: String,
    /// The entity name
    pub name: String,
}
