use super::{SECTION_GAP, Section, SectionOutput};
use crate::assets::{AssetKind, AssetWarning, decode_image};
use crate::elements::{ElementRole, ImageElement, LayoutElement, PositionedElement, RectElement, Stroke};
use crate::env::SectionEnv;
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::{Feature, HeaderVariant};
use billforge_types::{Color, Rect, Size};
use std::sync::Arc;

const LOGO_BOX: Size = Size {
    width: 120.0,
    height: 48.0,
};
const GRADIENT_STRIPS: usize = 24;
const INSET: f32 = 14.0;

/// Title band with the document kind, its number and the issuer logo.
pub struct HeaderBlock;

impl HeaderBlock {
    fn variant(env: &SectionEnv) -> HeaderVariant {
        if env.is_preview() {
            HeaderVariant::Simple
        } else {
            env.config.header_variant
        }
    }

    fn height(variant: HeaderVariant) -> f32 {
        match variant {
            HeaderVariant::Simple => 56.0,
            HeaderVariant::Gradient => 84.0,
            HeaderVariant::Boxed => 72.0,
        }
    }

    fn draw_background(out: &mut SectionOutput, variant: HeaderVariant, width: f32, env: &SectionEnv) {
        let primary = env.config.primary_color;
        let height = out.height;
        match variant {
            HeaderVariant::Simple => {
                out.rule(0.0, height - 4.0, width, Stroke::new(primary, 1.5), ElementRole::Decoration);
            }
            HeaderVariant::Gradient => {
                let end = primary.lighten(0.45);
                let strip = width / GRADIENT_STRIPS as f32;
                for i in 0..GRADIENT_STRIPS {
                    let t = i as f32 / (GRADIENT_STRIPS - 1) as f32;
                    out.rect(
                        // Overlap by a hair so no seams show between strips.
                        Rect::new(i as f32 * strip, 0.0, strip + 0.5, height),
                        RectElement::filled(primary.mix(end, t)),
                        ElementRole::Decoration,
                    );
                }
            }
            HeaderVariant::Boxed => {
                out.rect(
                    Rect::new(0.0, 0.0, width, height),
                    RectElement {
                        fill: Some(primary.lighten(0.94)),
                        stroke: Some(Stroke::new(primary, 1.0)),
                    },
                    ElementRole::Decoration,
                );
            }
        }
    }

    fn draw_logo(out: &mut SectionOutput, width: f32, env: &SectionEnv) {
        let Some(source) = env.data.issuer.logo.as_ref() else {
            return;
        };
        if env.is_preview() {
            return;
        }
        let top = (out.height - LOGO_BOX.height) / 2.0;
        match decode_image(source) {
            Ok(image) => {
                let fitted = image.size().fit_within(LOGO_BOX);
                let rect = Rect::new(
                    width - INSET - fitted.width,
                    top + (LOGO_BOX.height - fitted.height) / 2.0,
                    fitted.width,
                    fitted.height,
                );
                out.push(PositionedElement::new(
                    rect,
                    LayoutElement::Image(ImageElement { image: Arc::new(image) }),
                ));
            }
            Err(error) => {
                let style = env.muted_style(8.0);
                out.text(
                    width - INSET - LOGO_BOX.width,
                    top + LOGO_BOX.height / 2.0 - style.line_height() / 2.0,
                    LOGO_BOX.width,
                    env.label(MessageKey::LogoUnavailable),
                    style,
                    TextAlign::Right,
                    ElementRole::Placeholder,
                );
                out.warnings.push(AssetWarning {
                    asset: AssetKind::Logo,
                    error,
                });
            }
        }
    }
}

impl Section for HeaderBlock {
    fn name(&self) -> &'static str {
        "header"
    }

    fn is_active(&self, env: &SectionEnv) -> bool {
        env.is_enabled(Feature::Header)
    }

    fn measure(&self, env: &SectionEnv) -> f32 {
        Self::height(Self::variant(env))
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let variant = Self::variant(env);
        let width = env.content_width;
        let mut out = SectionOutput::new(Self::height(variant), SECTION_GAP);
        Self::draw_background(&mut out, variant, width, env);

        let primary = env.config.primary_color;
        let (title_color, number_color, left, top) = match variant {
            HeaderVariant::Simple => (primary, crate::env::MUTED_COLOR, 0.0, 4.0),
            HeaderVariant::Gradient => (Color::WHITE, Color::WHITE, INSET, 18.0),
            HeaderVariant::Boxed => (primary, crate::env::TEXT_COLOR, INSET, 12.0),
        };

        let kind = env.data.document_kind;
        let title_style = env.body_style(22.0).bold().colored(title_color);
        out.text(
            left,
            top,
            width,
            env.label(MessageKey::title_for(kind)),
            title_style,
            TextAlign::Left,
            ElementRole::Content,
        );

        let number = format!(
            "{} {}",
            env.label(MessageKey::number_label_for(kind)),
            env.data.document_number
        );
        out.text(
            left,
            top + 30.0,
            width,
            number,
            env.body_style(11.0).colored(number_color),
            TextAlign::Left,
            ElementRole::Content,
        );

        Self::draw_logo(&mut out, width, env);
        out
    }
}
