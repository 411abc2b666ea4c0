use serde::Deserialize;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to 3-Tier HA Architecture";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
    pub tier: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            status: "healthy".to_string(),
            tier: "application".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DbTestResponse {
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DbTestResponse {
    pub fn connected() -> Self {
        Self {
            database: "connected".to_string(),
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            database: "error".to_string(),
            message: Some(message),
        }
    }
}
