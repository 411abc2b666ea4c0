use crate::api::route::AppState;
use crate::sql::mysql::MySqlClient;
use crate::sql::probe::DatabaseProbe;
use crate::sql::schema::DatabaseSettings;
use anyhow::Context;
use std::io;
use tokio::signal;
use tracing::info;

use tracing_subscriber::fmt::time::UtcTime;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

pub fn setup_logging() -> Result<(), anyhow::Error> {
    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN)
        .with_context(|| "Failed to parse log time format")?;

    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .flatten_event(true)
        .with_thread_ids(true)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

pub fn setup() -> Result<AppState, anyhow::Error> {
    setup_logging()?;

    // read once; handlers only see what is stored in the state
    let settings = DatabaseSettings::from_env();
    info!(
        host = %settings.host,
        user = %settings.user,
        database = %settings.database,
        "Loaded database settings"
    );

    Ok(AppState {
        db: DatabaseProbe::MySql(MySqlClient::new(settings)),
    })
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
