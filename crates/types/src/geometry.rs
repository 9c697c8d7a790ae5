/// An axis-aligned rectangle in points, origin at the top-left of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Scales this size down (never up) so it fits inside `bounds`, keeping the aspect ratio.
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Size::zero();
        }
        let width_scale = bounds.width / self.width;
        let height_scale = bounds.height / self.height;
        if width_scale >= 1.0 && height_scale >= 1.0 {
            return self;
        }
        // The constrained side takes the bound exactly.
        if width_scale <= height_scale {
            Size::new(bounds.width, self.height * width_scale)
        } else {
            Size::new(self.width * height_scale, bounds.height)
        }
    }
}
