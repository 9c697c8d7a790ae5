use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("Unknown locale tag: {0}")]
    UnknownLocale(String),
}
