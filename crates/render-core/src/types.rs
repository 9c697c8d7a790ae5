/// Metadata written to the document information dictionary. Carries no
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub producer: String,
}

impl DocumentInfo {
    pub const PRODUCER: &'static str = "billforge";

    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            producer: Self::PRODUCER.to_string(),
        }
    }
}
