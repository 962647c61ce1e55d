use crate::pool::enums::database_drivers::DatabaseDrivers;

/// Opens `sqlx::AnyConnection`s for the configured engine.
#[derive(Debug, Clone)]
pub struct SqlxConnectionFactory {
    pub(crate) engine: DatabaseDrivers,
    pub(crate) dsn: String,
}
