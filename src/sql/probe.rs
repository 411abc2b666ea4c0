use crate::sql::mysql::MySqlClient;
use anyhow::*;
use std::result::Result::Ok;

/// Canned probe outcome for tests that must not depend on a live database.
#[derive(Debug, Clone)]
pub struct MockProbe {
    failure: Option<String>,
}

impl MockProbe {
    pub fn connected() -> Self {
        Self { failure: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }

    fn probe(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DatabaseProbe {
    MySql(MySqlClient),
    Mock(MockProbe),
}

impl DatabaseProbe {
    pub async fn probe(&self) -> Result<()> {
        match self {
            Self::MySql(client) => client.probe().await,
            Self::Mock(mock) => mock.probe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_probe_outcomes() {
        let ok = DatabaseProbe::Mock(MockProbe::connected());
        assert!(ok.probe().await.is_ok());

        let failing = DatabaseProbe::Mock(MockProbe::failing("Access denied"));
        let err = failing.probe().await.unwrap_err();
        assert_eq!(err.to_string(), "Access denied");
    }
}
