use super::{Section, SectionOutput, text_element};
use crate::elements::{ElementRole, LayoutElement, PositionedElement, Stroke};
use crate::env::{RULE_COLOR, SectionEnv};
use crate::page::FOOTER_BAND;
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::Feature;
use billforge_types::Rect;

/// The band stamped at the bottom of every page once pagination is done.
pub struct FooterBlock;

impl FooterBlock {
    /// Footer elements for one page, in absolute page coordinates.
    pub fn render_page(
        &self,
        page_number: usize,
        page_count: usize,
        band: Rect,
        env: &SectionEnv,
    ) -> Vec<PositionedElement> {
        let mut out = self.render(env);
        if env.footer.show_page_numbers {
            let (page, pages) = (page_number.to_string(), page_count.to_string());
            let text = env
                .translator
                .translate_with(MessageKey::PageOf, &[("page", page.as_str()), ("pages", pages.as_str())]);
            out.push(
                text_element(0.0, 12.0, band.width, text, env.muted_style(8.5), TextAlign::Right)
                    .with_role(ElementRole::Footer),
            );
        }
        out.translate(band.x, band.y);
        out.elements
    }
}

impl Section for FooterBlock {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn is_active(&self, env: &SectionEnv) -> bool {
        env.is_enabled(Feature::Footer)
    }

    fn measure(&self, _env: &SectionEnv) -> f32 {
        FOOTER_BAND
    }

    /// The page-independent part of the band, relative to its top-left.
    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let width = env.content_width;
        let mut out = SectionOutput::new(FOOTER_BAND, 0.0);
        out.push(
            PositionedElement::new(Rect::new(0.0, 6.0, width, 0.0), LayoutElement::Line(Stroke::new(RULE_COLOR, 0.5)))
                .with_role(ElementRole::Footer),
        );

        let message = match env.footer.message.as_deref().map(str::trim) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => env.label(MessageKey::FooterMessage),
        };
        out.text(0.0, 12.0, width, message, env.muted_style(8.5), TextAlign::Left, ElementRole::Footer);

        if let Some(date) = env.footer.generated_on {
            let date = env.formatter.format_date(Some(date));
            let text = env
                .translator
                .translate_with(MessageKey::GeneratedOn, &[("date", date.as_str())]);
            out.text(0.0, 23.0, width, text, env.muted_style(7.5), TextAlign::Left, ElementRole::Footer);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageGeometry;
    use crate::test_utils::{Fixture, document, texts};
    use billforge_template::TemplateConfig;
    use billforge_types::DocumentKind;
    use chrono::NaiveDate;

    #[test]
    fn page_numbers_and_default_message() {
        let fx = Fixture::new(document(DocumentKind::Invoice, 1));
        let band = PageGeometry::default().footer_rect();
        let elements = FooterBlock.render_page(2, 3, band, &fx.env());
        let t = texts(&elements);
        assert!(t.contains(&"Thank you for your business!"));
        assert!(t.contains(&"Page 2 of 3"));
        assert!(elements.iter().all(|el| el.role == ElementRole::Footer));
        assert!(elements.iter().all(|el| el.y >= band.y));
    }

    #[test]
    fn generated_on_and_custom_message() {
        let mut fx = Fixture::new(document(DocumentKind::Estimate, 1));
        fx.footer.message = Some("Licensed & insured".into());
        fx.footer.generated_on = NaiveDate::from_ymd_opt(2025, 4, 2);
        fx.footer.show_page_numbers = false;
        let elements = FooterBlock.render_page(1, 1, PageGeometry::default().footer_rect(), &fx.env());
        let t = texts(&elements);
        assert!(t.contains(&"Licensed & insured"));
        assert!(t.contains(&"Generated on April 2, 2025"));
        assert!(!t.iter().any(|s| s.starts_with("Page ")));
    }

    #[test]
    fn footer_flag_deactivates_band() {
        let fx = Fixture::with_template(
            document(DocumentKind::Invoice, 1),
            &TemplateConfig::default().with_feature(Feature::Footer, false),
        );
        assert!(!FooterBlock.is_active(&fx.env()));
    }
}
