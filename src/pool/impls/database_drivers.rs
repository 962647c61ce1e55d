use std::fmt;
use crate::pool::enums::database_drivers::DatabaseDrivers;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
            DatabaseDrivers::mysql => write!(f, "mysql"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
        }
    }
}

impl DatabaseDrivers {
    pub fn dsn_schemes(&self) -> &'static [&'static str] {
        match self {
            DatabaseDrivers::sqlite3 => &["sqlite:"],
            DatabaseDrivers::mysql => &["mysql:", "mariadb:"],
            DatabaseDrivers::pgsql => &["postgres:", "postgresql:"],
        }
    }

    pub fn matches_dsn(&self, dsn: &str) -> bool {
        self.dsn_schemes().iter().any(|scheme| dsn.starts_with(scheme))
    }
}
