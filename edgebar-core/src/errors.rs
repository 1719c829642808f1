use thiserror::Error;

pub type Result<T> = std::result::Result<T, EdgebarError>;

#[derive(Debug, Error)]
pub enum EdgebarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Settings serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("XDG error: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("No plugin registered for type \"{0}\"")]
    UnknownPlugin(String),
    #[error("Settings group \"{0}\" does not exist")]
    MissingSection(String),
    #[error("Display server error: {0}")]
    DisplayServer(String),
}
