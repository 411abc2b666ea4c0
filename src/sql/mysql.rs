use crate::sql::schema::DatabaseSettings;
use anyhow::*;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlConnection},
    ConnectOptions, Connection,
};
use std::result::Result::Ok;
use std::time::Duration;
use tracing::{debug, error};

pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct MySqlClient {
    settings: DatabaseSettings,
    port: u16,
    connect_timeout: Duration,
}

impl MySqlClient {
    // Create a new instance of MySqlClient
    //
    // No connection is opened here; every call to `probe` opens its own
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            port: DEFAULT_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.settings.host)
            .port(self.port)
            .username(&self.settings.user)
            .password(&self.settings.password)
            .database(&self.settings.database)
            .disable_statement_logging()
    }

    // Opens a single connection with the configured credentials and closes it again
    //
    // # Returns
    //
    // Ok if the server accepted the connection, otherwise the underlying error.
    // Connecting is bounded by the configured connect timeout.
    pub async fn probe(&self) -> Result<()> {
        let options = self.connect_options();

        let connection =
            match tokio::time::timeout(self.connect_timeout, MySqlConnection::connect_with(&options))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    error!(
                        "Timed out connecting to {}:{}",
                        self.settings.host, self.port
                    );
                    bail!(
                        "connection to {}:{} timed out after {}s",
                        self.settings.host,
                        self.port,
                        self.connect_timeout.as_secs_f32()
                    );
                }
            };

        connection.close().await?;
        debug!("Probe connection to {} closed", self.settings.host);

        Ok(())
    }
}
