//! Page content drawing on top of `lopdf` content operations.

use crate::resources::ResourceNames;
use billforge_layout::{ImageElement, LayoutElement, PositionedElement, RectElement, Stroke, TextElement};
use billforge_render_core::RenderError;
use billforge_render_core::utils::{bottom_y, flip_y, text_baseline};
use billforge_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Encode text for a `WinAnsiEncoding` font.
///
/// Latin-1 maps directly; the typographic characters Windows-1252 places
/// in 0x80-0x9F are mapped explicitly. Anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    names: &'a ResourceNames,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, names: &'a ResourceNames) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            names,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => {
                self.draw_rect(rect, el);
                Ok(())
            }
            LayoutElement::Line(stroke) => {
                self.draw_line(stroke, el);
                Ok(())
            }
            LayoutElement::Image(image) => self.draw_image(image, el),
        }
    }

    fn color_operands(color: Color) -> Vec<Object> {
        color.components().iter().map(|&c| c.into()).collect()
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op("rg", Self::color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        if self.state.line_width != Some(stroke.width) {
            self.op("w", vec![stroke.width.into()]);
            self.state.line_width = Some(stroke.width);
        }
        if self.state.stroke_color != Some(stroke.color) {
            self.op("RG", Self::color_operands(stroke.color));
            self.state.stroke_color = Some(stroke.color);
        }
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let operands: Vec<Object> = vec![
            el.x.into(),
            bottom_y(el, self.page_height).into(),
            el.width.into(),
            el.height.into(),
        ];
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
            self.op("re", operands.clone());
            self.op("f", vec![]);
        }
        if let Some(stroke) = &rect.stroke {
            self.set_stroke(stroke);
            self.op("re", operands);
            self.op("S", vec![]);
        }
    }

    fn draw_line(&mut self, stroke: &Stroke, el: &PositionedElement) {
        self.set_stroke(stroke);
        self.op("m", vec![el.x.into(), flip_y(el.y, self.page_height).into()]);
        self.op(
            "l",
            vec![(el.x + el.width).into(), bottom_y(el, self.page_height).into()],
        );
        self.op("S", vec![]);
    }

    fn set_font(&mut self, text: &TextElement) -> Result<(), RenderError> {
        let style = &text.style;
        let name = self.names.font(style.family, style.weight).ok_or_else(|| {
            RenderError::Other(format!(
                "Font {} was not registered",
                style.family.postscript_name(style.weight)
            ))
        })?;
        if self.state.font_name != name || self.state.font_size != style.size {
            self.op("Tf", vec![Object::Name(name.as_bytes().to_vec()), style.size.into()]);
            self.state.font_name = name.to_string();
            self.state.font_size = style.size;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        self.op("BT", vec![]);
        self.set_font(text)?;
        self.set_fill_color(text.style.color);
        let baseline = text_baseline(el.y, text.style.size, self.page_height);
        self.op("Td", vec![el.x.into(), baseline.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) -> Result<(), RenderError> {
        let name = self
            .names
            .image(&image.image)
            .ok_or_else(|| RenderError::Other("Image was not registered".into()))?;
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![
                el.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                el.height.into(),
                el.x.into(),
                bottom_y(el, self.page_height).into(),
            ],
        );
        self.op("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.op("Q", vec![]);
        Ok(())
    }
}
