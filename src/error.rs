use thiserror::Error;

pub type HrefResult<T> = Result<T, HrefError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HrefError {
    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Cannot resolve '{path}': '..' ascends above the package root")]
    RootAscent { path: String },

    #[error("Invalid resolve options: {0}")]
    Config(String),
}

impl From<std::str::Utf8Error> for HrefError {
    fn from(err: std::str::Utf8Error) -> Self {
        HrefError::Decoding(err.to_string())
    }
}

impl From<serde_yaml::Error> for HrefError {
    fn from(err: serde_yaml::Error) -> Self {
        HrefError::Config(err.to_string())
    }
}
