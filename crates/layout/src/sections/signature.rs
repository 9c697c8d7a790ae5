use super::{Section, SectionOutput};
use crate::assets::{AssetKind, AssetWarning, decode_image};
use crate::elements::{ElementRole, ImageElement, LayoutElement, PositionedElement, Stroke};
use crate::env::{SectionEnv, TEXT_COLOR};
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_template::Feature;
use billforge_types::{Rect, Size};
use std::sync::Arc;

const HEIGHT: f32 = 76.0;
const GAP_AFTER: f32 = 14.0;
const LINE_WIDTH: f32 = 200.0;
const LINE_Y: f32 = 56.0;
const IMAGE_BOX: Size = Size {
    width: LINE_WIDTH,
    height: 48.0,
};

/// Signature line for invoices, with the signature image above it when
/// one is supplied.
pub struct SignatureBlock;

impl Section for SignatureBlock {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn is_active(&self, env: &SectionEnv) -> bool {
        env.data.is_invoice() && env.is_enabled(Feature::SignatureLine)
    }

    fn measure(&self, _env: &SectionEnv) -> f32 {
        HEIGHT
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let mut out = SectionOutput::new(HEIGHT, GAP_AFTER);

        match env.data.signature_image.as_ref() {
            Some(_) if env.is_preview() => {}
            Some(source) => match decode_image(source) {
                Ok(image) => {
                    let fitted = image.size().fit_within(IMAGE_BOX);
                    let rect = Rect::new(0.0, LINE_Y - 4.0 - fitted.height, fitted.width, fitted.height);
                    out.push(PositionedElement::new(
                        rect,
                        LayoutElement::Image(ImageElement { image: Arc::new(image) }),
                    ));
                }
                Err(error) => {
                    let style = env.muted_style(9.0);
                    out.text(
                        0.0,
                        LINE_Y - 4.0 - style.line_height(),
                        LINE_WIDTH,
                        env.label(MessageKey::SignatureUnavailable),
                        style,
                        TextAlign::Left,
                        ElementRole::Placeholder,
                    );
                    out.warnings.push(AssetWarning {
                        asset: AssetKind::Signature,
                        error,
                    });
                }
            },
            None => {}
        }

        out.rule(0.0, LINE_Y, LINE_WIDTH, Stroke::new(TEXT_COLOR, 0.75), ElementRole::Decoration);
        out.text(
            0.0,
            LINE_Y + 4.0,
            LINE_WIDTH,
            env.label(MessageKey::Signature),
            env.muted_style(8.5),
            TextAlign::Left,
            ElementRole::Content,
        );
        out
    }
}
