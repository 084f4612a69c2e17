//! Shared response envelope types for mutation handlers.
//!
//! Mutations answer with a Spanish confirmation message (plus the new row's
//! id on creation); read endpoints serialize the entity structs directly.

use arbolado_core::types::DbId;
use serde::Serialize;

/// `{ "id": ..., "message": "..." }` returned by create endpoints with 201.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// `{ "message": "..." }` returned by update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
