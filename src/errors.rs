// src/errors.rs
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed JSON-RPC response: {0}")]
    Protocol(String),

    #[error("Remote error {code}: {message}{}", detail(.data))]
    Remote {
        code: i32,
        message: String,
        data: Option<Value>,
    },

    #[error("Could not decode result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`PanelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Protocol,
    Remote,
    Config,
}

impl PanelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PanelError::Transport(_) | PanelError::HttpStatus { .. } => ErrorKind::Transport,
            PanelError::Protocol(_) | PanelError::Decode(_) => ErrorKind::Protocol,
            PanelError::Remote { .. } => ErrorKind::Remote,
            PanelError::FileRead(_) | PanelError::TomlParse(_) | PanelError::Config(_) => {
                ErrorKind::Config
            }
        }
    }
}

// String data is shown bare, anything else as compact JSON.
fn detail(data: &Option<Value>) -> String {
    match data {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => format!(" ({})", s),
        Some(other) => format!(" ({})", other),
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
