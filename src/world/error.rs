use std::io;

/// Errors from strict registration on [`super::WorldState`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),
    #[error("duplicate object name: {0}")]
    DuplicateObject(String),
}

/// Errors raised while loading a TOML world definition.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("invalid world definition: {0}")]
    Invalid(String),
}
