//! Generation error types.
//!
//! Every variant is fatal: a run either produces the whole document or
//! nothing, since partially generated source cannot compile.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// An attribute kind carries no server/client family tag.
    #[error("attribute '{0}' must declare a server or client family")]
    UnclassifiedAttribute(String),

    /// A value kind outside the closed catalog.
    #[error("unknown value kind '{0}'")]
    UnknownValueKind(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("duplicate {axis} '{value}'")]
    DuplicateAxisValue { axis: &'static str, value: String },

    #[error("axis '{0}' has no values")]
    EmptyAxis(&'static str),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type GenResult<T> = Result<T, GenError>;
