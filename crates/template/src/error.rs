use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
