use billforge_format::MessageKey;
use billforge_style::TextAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Description,
    Quantity,
    UnitPrice,
    Amount,
}

impl ColumnKind {
    pub fn heading(self) -> MessageKey {
        match self {
            ColumnKind::Description => MessageKey::Description,
            ColumnKind::Quantity => MessageKey::Quantity,
            ColumnKind::UnitPrice => MessageKey::UnitPrice,
            ColumnKind::Amount => MessageKey::Amount,
        }
    }

    pub fn align(self) -> TextAlign {
        match self {
            ColumnKind::Description => TextAlign::Left,
            _ => TextAlign::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub kind: ColumnKind,
    pub x: f32,
    pub width: f32,
}

const FULL: [(ColumnKind, f32); 4] = [
    (ColumnKind::Description, 0.50),
    (ColumnKind::Quantity, 0.12),
    (ColumnKind::UnitPrice, 0.19),
    (ColumnKind::Amount, 0.19),
];

const COLLAPSED: [(ColumnKind, f32); 2] = [(ColumnKind::Description, 0.75), (ColumnKind::Amount, 0.25)];

/// The fixed column schema across `width`. Without item details only the
/// description and amount remain.
pub fn column_layout(width: f32, item_details: bool) -> Vec<Column> {
    let shares: &[(ColumnKind, f32)] = if item_details { &FULL } else { &COLLAPSED };
    let mut x = 0.0;
    shares
        .iter()
        .map(|&(kind, share)| {
            let column = Column {
                kind,
                x,
                width: width * share,
            };
            x += column.width;
            column
        })
        .collect()
}
