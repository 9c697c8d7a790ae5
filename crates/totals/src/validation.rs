//! Reconciles caller-supplied totals with recomputed ones.
//!
//! Divergence never blocks a render; it is reported so the caller can flag
//! a document whose printed figures do not add up.

use crate::calculator::{
    compute_discount_amount, compute_line_amount, compute_subtotal, compute_tax_amount, compute_total,
};
use crate::error::Figure;
use billforge_types::DocumentData;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// Differences up to one cent are rounding noise.
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TotalsDiscrepancy {
    Subtotal {
        supplied: Decimal,
        computed: Decimal,
    },
    Total {
        supplied: Decimal,
        computed: Decimal,
    },
    LineAmount {
        index: usize,
        supplied: Decimal,
        computed: Decimal,
    },
    /// The figure could not be recomputed within the `Decimal` range.
    Overflow {
        figure: Figure,
    },
}

impl fmt::Display for TotalsDiscrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalsDiscrepancy::Subtotal { supplied, computed } => {
                write!(f, "subtotal {} does not match line items ({})", supplied, computed)
            }
            TotalsDiscrepancy::Total { supplied, computed } => {
                write!(f, "total {} does not match recomputed total ({})", supplied, computed)
            }
            TotalsDiscrepancy::LineAmount {
                index,
                supplied,
                computed,
            } => write!(
                f,
                "line item {} amount {} does not match quantity x unit price ({})",
                index + 1,
                supplied,
                computed
            ),
            TotalsDiscrepancy::Overflow { figure } => {
                write!(f, "{} cannot be recomputed: the result is out of range", figure)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TotalsValidation {
    pub discrepancies: Vec<TotalsDiscrepancy>,
}

impl TotalsValidation {
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn diverges(supplied: Decimal, computed: Decimal) -> bool {
    supplied
        .checked_sub(computed)
        .is_none_or(|difference| difference.abs() > TOLERANCE)
}

pub fn validate_totals(data: &DocumentData) -> TotalsValidation {
    let mut discrepancies = Vec::new();

    for (index, item) in data.line_items.iter().enumerate() {
        match compute_line_amount(item) {
            Some(product) => {
                let computed = to_cents(product);
                if diverges(item.amount, computed) {
                    discrepancies.push(TotalsDiscrepancy::LineAmount {
                        index,
                        supplied: item.amount,
                        computed,
                    });
                }
            }
            None => discrepancies.push(TotalsDiscrepancy::Overflow {
                figure: Figure::LineAmount { index },
            }),
        }
    }

    match compute_subtotal(&data.line_items) {
        Some(subtotal) => {
            let subtotal = to_cents(subtotal);
            if diverges(data.subtotal, subtotal) {
                discrepancies.push(TotalsDiscrepancy::Subtotal {
                    supplied: data.subtotal,
                    computed: subtotal,
                });
            }
        }
        None => discrepancies.push(TotalsDiscrepancy::Overflow {
            figure: Figure::Subtotal,
        }),
    }

    // The total is checked against the supplied subtotal so that one bad
    // subtotal does not also report a bad total.
    let total = compute_tax_amount(data.subtotal, data.tax_rate_percent)
        .zip(compute_discount_amount(data.subtotal, data.discount_rate_percent))
        .and_then(|(tax, discount)| compute_total(data.subtotal, tax, discount));
    match total {
        Some(total) => {
            let total = to_cents(total);
            if diverges(data.total, total) {
                discrepancies.push(TotalsDiscrepancy::Total {
                    supplied: data.total,
                    computed: total,
                });
            }
        }
        None => discrepancies.push(TotalsDiscrepancy::Overflow { figure: Figure::Total }),
    }

    if !discrepancies.is_empty() {
        log::debug!(
            "Document {} has {} totals discrepancies",
            data.document_number,
            discrepancies.len()
        );
    }
    TotalsValidation { discrepancies }
}
