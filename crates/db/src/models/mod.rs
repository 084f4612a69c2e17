//! Entity structs and request DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct per read view
//! and a `Deserialize` input struct for writes. Wire field names keep the
//! legacy Spanish spelling so the existing front end stays compatible.

pub mod arbol;
pub mod catalogo;
pub mod cazuela;
pub mod mantenimiento;
pub mod ubicacion;
pub mod usuario;
