use std::fmt;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_DATABASE: &str = "appdb";

/// Connection parameters for the relational backend.
///
/// Read once at startup and handed to [`crate::sql::mysql::MySqlClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseSettings {
    // Build settings from the process environment
    //
    // * `RDS_HOST` - database host (default `localhost`)
    // * `RDS_USER` - user name (default `admin`)
    // * `RDS_PASSWORD` - password (default `password`)
    // * `RDS_DB` - database name (default `appdb`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Build settings from an arbitrary key lookup, falling back to the defaults
    // for any key the lookup does not resolve
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            host: get("RDS_HOST", DEFAULT_HOST),
            user: get("RDS_USER", DEFAULT_USER),
            password: get("RDS_PASSWORD", DEFAULT_PASSWORD),
            database: get("RDS_DB", DEFAULT_DATABASE),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}
