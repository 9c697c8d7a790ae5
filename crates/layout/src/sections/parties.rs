use super::{SECTION_GAP, Section, SectionOutput};
use crate::elements::ElementRole;
use crate::env::SectionEnv;
use crate::text::truncate_to_width;
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::Feature;
use billforge_types::PartyRecord;

const COLUMN_GAP: f32 = 24.0;
const HEADING_HEIGHT: f32 = 14.0;
const NAME_HEIGHT: f32 = 15.0;
const LINE_HEIGHT: f32 = 13.0;

/// The display lines of a party record, skipping every blank field.
///
/// The first line is always the name.
pub fn party_lines(party: &PartyRecord) -> Vec<String> {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    let mut lines = vec![party.name.trim().to_string()];
    let address = &party.address;
    lines.extend(present(&party.contact_name).map(str::to_string));
    lines.extend(present(&address.line1).map(str::to_string));
    lines.extend(present(&address.line2).map(str::to_string));

    let region = [present(&address.state), present(&address.postal_code)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let locality = match (present(&address.city), region.is_empty()) {
        (Some(city), false) => Some(format!("{city}, {region}")),
        (Some(city), true) => Some(city.to_string()),
        (None, false) => Some(region),
        (None, true) => None,
    };
    lines.extend(locality);

    lines.extend(present(&address.country).map(str::to_string));
    lines.extend(present(&party.email).map(str::to_string));
    lines.extend(present(&party.phone).map(str::to_string));
    lines.extend(present(&party.website).map(str::to_string));
    lines
}

/// Client on the left, issuer on the right.
pub struct PartiesBlock;

impl PartiesBlock {
    fn column_width(env: &SectionEnv) -> f32 {
        (env.content_width - COLUMN_GAP) / 2.0
    }

    fn column_height(lines: &[String]) -> f32 {
        HEADING_HEIGHT + NAME_HEIGHT + LINE_HEIGHT * lines.len().saturating_sub(1) as f32
    }

    fn shows_party(env: &SectionEnv) -> bool {
        env.is_enabled(Feature::ClientDetails)
    }

    fn party_heading(env: &SectionEnv) -> MessageKey {
        if env.data.is_invoice() {
            MessageKey::BillTo
        } else {
            MessageKey::PreparedFor
        }
    }

    fn draw_column(
        out: &mut SectionOutput,
        x: f32,
        heading: String,
        lines: &[String],
        align: TextAlign,
        env: &SectionEnv,
    ) {
        let width = Self::column_width(env);
        let heading_style = env.body_style(8.5).bold().colored(env.config.secondary_color);
        out.text(x, 0.0, width, heading.to_uppercase(), heading_style, align, ElementRole::Content);

        let mut y = HEADING_HEIGHT;
        for (i, line) in lines.iter().enumerate() {
            let (style, advance) = if i == 0 {
                (env.body_style(11.0).bold(), NAME_HEIGHT)
            } else {
                (env.body_style(9.5), LINE_HEIGHT)
            };
            let fitted = truncate_to_width(line, &style, width);
            out.text(x, y, width, fitted, style, align, ElementRole::Content);
            y += advance;
        }
    }
}

impl Section for PartiesBlock {
    fn name(&self) -> &'static str {
        "parties"
    }

    fn is_active(&self, _env: &SectionEnv) -> bool {
        true
    }

    fn measure(&self, env: &SectionEnv) -> f32 {
        let issuer = Self::column_height(&party_lines(&env.data.issuer));
        if Self::shows_party(env) {
            issuer.max(Self::column_height(&party_lines(&env.data.party)))
        } else {
            issuer
        }
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let mut out = SectionOutput::new(self.measure(env), SECTION_GAP);

        if Self::shows_party(env) {
            let lines = party_lines(&env.data.party);
            Self::draw_column(&mut out, 0.0, env.label(Self::party_heading(env)), &lines, TextAlign::Left, env);
        }

        let issuer = party_lines(&env.data.issuer);
        let right = env.content_width - Self::column_width(env);
        Self::draw_column(&mut out, right, env.label(MessageKey::From), &issuer, TextAlign::Right, env);
        out
    }
}
