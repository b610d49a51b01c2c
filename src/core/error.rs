use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWriteError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
