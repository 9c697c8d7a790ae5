use crate::assets::EmbeddedImage;
use billforge_style::{FontFamily, FontWeight};
use billforge_totals::BalanceState;
use billforge_types::{Color, Rect};
use std::fmt;
use std::sync::Arc;

/// A single drawable item with its absolute position on the page.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page and `y` growing downwards; the PDF backend flips them.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub role: ElementRole,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
            role: ElementRole::Content,
        }
    }

    pub fn with_role(mut self, role: ElementRole) -> Self {
        self.role = role;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The text content, if this is a text element.
    pub fn text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    /// A straight line from the element's top-left to its bottom-right corner.
    Line(Stroke),
    Image(ImageElement),
}

impl fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rectangle(_) => write!(f, "Rectangle"),
            LayoutElement::Line(_) => write!(f, "Line"),
            LayoutElement::Image(i) => write!(f, "Image({}x{})", i.image.width, i.image.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            weight: FontWeight::Regular,
            size,
            color: Color::BLACK,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Width of `text` set in this style.
    pub fn measure(&self, text: &str) -> f32 {
        billforge_style::text_width(text, self.family, self.weight, self.size)
    }

    /// Vertical space one line of this style occupies.
    pub fn line_height(&self) -> f32 {
        self.size * 1.25
    }
}

/// A single line of text. Never contains newlines.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectElement {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroked(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }
}

/// A decoded raster image, shared between every place it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub image: Arc<EmbeddedImage>,
}

/// What a drawn element means, so output can be inspected without
/// re-parsing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    Decoration,
    Content,
    TableHeader,
    TableRow { index: usize },
    Totals(TotalsLine),
    Footer,
    /// Fallback text drawn in place of an asset that failed to load.
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalsLine {
    Subtotal,
    Tax,
    Discount,
    Total,
    AmountPaid,
    BalanceDue(BalanceState),
}
