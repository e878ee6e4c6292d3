use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Word list error: {message}")]
    WordList { message: String },

    #[error("Dictionary error: {message}")]
    Dictionary { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Interface error: {message}")]
    Interface { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GameError {
    pub fn word_list<S: Into<String>>(message: S) -> Self {
        Self::WordList {
            message: message.into(),
        }
    }

    pub fn dictionary<S: Into<String>>(message: S) -> Self {
        Self::Dictionary {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn interface<S: Into<String>>(message: S) -> Self {
        Self::Interface {
            message: message.into(),
        }
    }
}
