pub mod arboles;
pub mod auth;
pub mod catalogos;
pub mod cazuelas;
pub mod mantenimientos;
pub mod ubicaciones;
pub mod uploads;

/// True when a required text field is absent or blank. Mirrors the
/// "required means non-empty" contract the front end relies on.
pub(crate) fn falta(campo: &Option<String>) -> bool {
    campo.as_deref().map_or(true, |s| s.trim().is_empty())
}
