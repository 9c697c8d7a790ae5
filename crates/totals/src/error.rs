use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A figure the totals arithmetic produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "figure", rename_all = "snake_case")]
pub enum Figure {
    LineAmount { index: usize },
    Subtotal,
    TaxAmount,
    DiscountAmount,
    Total,
    BalanceDue,
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::LineAmount { index } => write!(f, "line item {} amount", index + 1),
            Figure::Subtotal => f.write_str("subtotal"),
            Figure::TaxAmount => f.write_str("tax amount"),
            Figure::DiscountAmount => f.write_str("discount amount"),
            Figure::Total => f.write_str("total"),
            Figure::BalanceDue => f.write_str("balance due"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsError {
    #[error("The {0} is outside the representable decimal range")]
    Overflow(Figure),
}
