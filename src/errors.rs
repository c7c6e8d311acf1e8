use std::error::Error;
use std::fmt;

pub type TagResult<T> = Result<T, TagError>;

#[derive(Debug)]
pub enum TagError {
    InvalidName(String),

    Sqlx(sqlx::Error),

    Anyhow(anyhow::Error),
}

impl TagError {
    fn message(&self) -> String {
        use TagError::*;

        match self {
            InvalidName(name) => format!("invalid tag name: {:?}", name),
            Sqlx(err) => format!("storage error: {}", err),
            Anyhow(err) => format!("{:#}", err),
        }
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for TagError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use TagError::*;

        match self {
            Sqlx(err) => Some(err),
            Anyhow(err) => err.source(),
            InvalidName(_) => None,
        }
    }
}

impl From<sqlx::Error> for TagError {
    fn from(err: sqlx::Error) -> Self {
        TagError::Sqlx(err)
    }
}

impl From<anyhow::Error> for TagError {
    fn from(err: anyhow::Error) -> Self {
        TagError::Anyhow(err)
    }
}

pub fn invalid_name(name: &str) -> TagError {
    TagError::InvalidName(name.to_string())
}
