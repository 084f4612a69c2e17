//! Well-known tree status values.
//!
//! These must match the `CHECK(estado IN (...))` constraint on `arboles`;
//! the database is the enforcement boundary, these constants exist for
//! seed data and tests.

pub const ESTADO_VIVO: &str = "Vivo";
pub const ESTADO_MUERTO: &str = "Muerto";
pub const ESTADO_EXTRAIDO: &str = "Extraído";

/// Every valid `arboles.estado` value.
pub const ESTADOS_ARBOL: [&str; 3] = [ESTADO_VIVO, ESTADO_MUERTO, ESTADO_EXTRAIDO];
