//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod arbol_repo;
pub mod catalogo_repo;
pub mod cazuela_repo;
pub mod mantenimiento_repo;
pub mod ubicacion_repo;
pub mod usuario_repo;

pub use arbol_repo::ArbolRepo;
pub use catalogo_repo::CatalogoRepo;
pub use cazuela_repo::CazuelaRepo;
pub use mantenimiento_repo::MantenimientoRepo;
pub use ubicacion_repo::UbicacionRepo;
pub use usuario_repo::UsuarioRepo;
