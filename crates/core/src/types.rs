/// All database primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;

/// Row creation timestamps. SQLite's `CURRENT_TIMESTAMP` produces UTC
/// date-time text without an offset, so the naive type is the honest one.
pub type Timestamp = chrono::NaiveDateTime;

/// Calendar dates (planting, installation, maintenance). No time component.
pub type Fecha = chrono::NaiveDate;
