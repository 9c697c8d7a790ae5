use super::{SECTION_GAP, Section, SectionOutput};
use crate::elements::ElementRole;
use crate::env::SectionEnv;
use crate::text::{truncate_to_width, wrap_text};
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::Feature;

const LABEL_WIDTH: f32 = 110.0;
const ROW_HEIGHT: f32 = 15.0;
const DESCRIPTION_LINE: f32 = 12.0;

/// Label/value rows: number, status, dates and the project reference.
pub struct MetaBlock;

struct MetaRow {
    label: String,
    value: String,
    /// Wrapped continuation lines under the value.
    detail: Vec<String>,
}

impl MetaBlock {
    fn rows(env: &SectionEnv) -> Vec<MetaRow> {
        let data = env.data;
        let kind = data.document_kind;
        let row = |label: MessageKey, value: String| MetaRow {
            label: env.label(label),
            value,
            detail: Vec::new(),
        };

        let mut rows = vec![
            row(MessageKey::number_label_for(kind), data.document_number.clone()),
            row(MessageKey::Status, env.label(MessageKey::for_status(data.status))),
        ];

        if env.is_enabled(Feature::Dates) {
            rows.push(row(MessageKey::IssueDate, env.formatter.format_date(Some(data.issue_date))));
            if let Some(due) = data.due_or_expiry_date {
                let label = if data.is_invoice() {
                    MessageKey::DueDate
                } else {
                    MessageKey::ValidUntil
                };
                rows.push(row(label, env.formatter.format_date(Some(due))));
            }
        }

        if env.is_enabled(Feature::ProjectDetails) {
            if let Some(project) = &data.project_reference {
                let value_width = env.content_width - LABEL_WIDTH;
                let detail = project
                    .description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .map(|d| wrap_text(d, &env.muted_style(8.5), value_width))
                    .unwrap_or_default();
                rows.push(MetaRow {
                    detail,
                    ..row(MessageKey::Project, project.title.clone())
                });
            }
        }
        rows
    }

    fn row_height(row: &MetaRow) -> f32 {
        ROW_HEIGHT + DESCRIPTION_LINE * row.detail.len() as f32
    }
}

impl Section for MetaBlock {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn is_active(&self, _env: &SectionEnv) -> bool {
        true
    }

    fn measure(&self, env: &SectionEnv) -> f32 {
        Self::rows(env).iter().map(Self::row_height).sum()
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let rows = Self::rows(env);
        let height = rows.iter().map(Self::row_height).sum();
        let mut out = SectionOutput::new(height, SECTION_GAP);

        let label_style = env.muted_style(9.5).bold();
        let value_style = env.body_style(9.5);
        let detail_style = env.muted_style(8.5);
        let value_width = env.content_width - LABEL_WIDTH;

        let mut y = 0.0;
        for row in &rows {
            out.text(0.0, y, LABEL_WIDTH, &*row.label, label_style, TextAlign::Left, ElementRole::Content);
            let value = truncate_to_width(&row.value, &value_style, value_width);
            out.text(LABEL_WIDTH, y, value_width, value, value_style, TextAlign::Left, ElementRole::Content);
            y += ROW_HEIGHT;
            for line in &row.detail {
                out.text(LABEL_WIDTH, y, value_width, &**line, detail_style, TextAlign::Left, ElementRole::Content);
                y += DESCRIPTION_LINE;
            }
        }
        out
    }
}
