//! Domain logic for the urban-tree inventory.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling.

pub mod error;
pub mod estados;
pub mod roles;
pub mod scheduling;
pub mod types;
