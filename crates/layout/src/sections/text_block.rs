use super::{SECTION_GAP, Section, SectionOutput};
use crate::elements::ElementRole;
use crate::env::SectionEnv;
use crate::text::wrap_text;
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::Feature;

const HEADING_HEIGHT: f32 = 18.0;
const LINE_HEIGHT: f32 = 13.0;
const BODY_SIZE: f32 = 9.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBlockKind {
    Terms,
    Notes,
}

impl TextBlockKind {
    fn feature(self) -> Feature {
        match self {
            TextBlockKind::Terms => Feature::Terms,
            TextBlockKind::Notes => Feature::Notes,
        }
    }

    fn heading(self) -> MessageKey {
        match self {
            TextBlockKind::Terms => MessageKey::Terms,
            TextBlockKind::Notes => MessageKey::Notes,
        }
    }
}

/// A headed block of plain wrapped text: terms and conditions, or notes.
///
/// When it does not fit on the current page it splits line by line, with
/// the heading always kept together with the first line.
pub struct TextBlock {
    pub kind: TextBlockKind,
}

impl TextBlock {
    pub fn terms() -> Self {
        Self {
            kind: TextBlockKind::Terms,
        }
    }

    pub fn notes() -> Self {
        Self {
            kind: TextBlockKind::Notes,
        }
    }

    fn body<'a>(&self, env: &SectionEnv<'a>) -> Option<&'a str> {
        let text = match self.kind {
            TextBlockKind::Terms => env.data.terms.as_deref(),
            TextBlockKind::Notes => env.data.notes.as_deref(),
        };
        text.map(str::trim).filter(|t| !t.is_empty())
    }

    fn lines(&self, env: &SectionEnv) -> Vec<String> {
        self.body(env)
            .map(|text| wrap_text(text, &env.body_style(BODY_SIZE), env.content_width))
            .unwrap_or_default()
    }

    fn heading(&self, out: &mut SectionOutput, env: &SectionEnv) {
        let style = env.body_style(11.0).bold().colored(env.config.primary_color);
        out.text(
            0.0,
            0.0,
            env.content_width,
            env.label(self.kind.heading()),
            style,
            TextAlign::Left,
            ElementRole::Content,
        );
    }

    fn line(out: &mut SectionOutput, y: f32, line: &str, env: &SectionEnv) {
        out.text(
            0.0,
            y,
            env.content_width,
            line,
            env.body_style(BODY_SIZE),
            TextAlign::Left,
            ElementRole::Content,
        );
    }
}

impl Section for TextBlock {
    fn name(&self) -> &'static str {
        match self.kind {
            TextBlockKind::Terms => "terms",
            TextBlockKind::Notes => "notes",
        }
    }

    fn is_active(&self, env: &SectionEnv) -> bool {
        env.is_enabled(self.kind.feature()) && self.body(env).is_some()
    }

    fn measure(&self, env: &SectionEnv) -> f32 {
        HEADING_HEIGHT + LINE_HEIGHT * self.lines(env).len() as f32
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let lines = self.lines(env);
        let mut out = SectionOutput::new(HEADING_HEIGHT + LINE_HEIGHT * lines.len() as f32, SECTION_GAP);
        self.heading(&mut out, env);
        for (i, line) in lines.iter().enumerate() {
            Self::line(&mut out, HEADING_HEIGHT + LINE_HEIGHT * i as f32, line, env);
        }
        out
    }

    fn fragments(&self, env: &SectionEnv) -> Vec<SectionOutput> {
        let lines = self.lines(env);
        let mut fragments = Vec::with_capacity(lines.len().max(1));

        let mut first = SectionOutput::new(HEADING_HEIGHT, 0.0);
        self.heading(&mut first, env);
        let mut rest = lines.iter();
        if let Some(line) = rest.next() {
            Self::line(&mut first, HEADING_HEIGHT, line, env);
            first.height += LINE_HEIGHT;
        }
        fragments.push(first);

        for line in rest {
            let mut fragment = SectionOutput::new(LINE_HEIGHT, 0.0);
            Self::line(&mut fragment, 0.0, line, env);
            fragments.push(fragment);
        }

        if let Some(last) = fragments.last_mut() {
            last.gap_after = SECTION_GAP;
        }
        fragments
    }
}
