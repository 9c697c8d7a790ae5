use billforge_types::DocumentKind;

/// The download name for a rendered document, e.g. `Invoice_INV-1001.pdf`.
///
/// Characters that are unsafe in file names are replaced by `-`.
pub fn suggested_file_name(kind: DocumentKind, number: &str) -> String {
    let safe: String = number
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}_{}.{}", kind.file_label(), safe, kind.file_extension())
}
