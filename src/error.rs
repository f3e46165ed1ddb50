use thiserror::Error;

pub type AriaResult<T> = Result<T, AriaError>;

#[derive(Debug, Error)]
pub enum AriaError {
    #[error("locale `{locale}` has no entry for `{path}`")]
    MissingLocaleEntry { locale: String, path: String },

    #[error("entry `{path}` is a branch, expected a template")]
    NotATemplate { path: String },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
