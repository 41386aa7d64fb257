use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} not found! Make sure you run from the directory containing it.", .0.display())]
    NotFound(PathBuf),

    #[error("could not find a complete Base64 code block in the document")]
    MalformedDocument,

    #[error("invalid Base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
