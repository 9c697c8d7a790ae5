use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The x offset of a run of `text_width` inside a box of `box_width`.
    pub fn offset(self, box_width: f32, text_width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => ((box_width - text_width) / 2.0).max(0.0),
            TextAlign::Right => (box_width - text_width).max(0.0),
        }
    }
}
