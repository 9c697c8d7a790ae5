use crate::calculator::{compute_discount_amount, compute_tax_amount};
use crate::error::{Figure, TotalsError};
use billforge_types::DocumentData;
use rust_decimal::Decimal;
use serde::Serialize;

/// A percentage-based adjustment line (tax or discount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub rate_percent: Decimal,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceState {
    /// Money is still owed.
    Outstanding,
    /// Paid in full, or overpaid.
    Settled,
}

impl BalanceState {
    pub fn of(balance_due: Decimal) -> Self {
        if balance_due > Decimal::ZERO {
            BalanceState::Outstanding
        } else {
            BalanceState::Settled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub amount_paid: Decimal,
    pub balance_due: Decimal,
    pub state: BalanceState,
}

/// Every figure the totals block displays, computed once per render.
///
/// Line presence is decided here: `tax`/`discount` are `None` unless their
/// rate is strictly positive, and `balance` is `None` unless the document is
/// an invoice with a nonzero payment recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    pub subtotal: Decimal,
    pub tax: Option<Adjustment>,
    pub discount: Option<Adjustment>,
    /// The caller-supplied total, displayed as-is.
    pub total: Decimal,
    pub balance: Option<Balance>,
}

impl TotalsSummary {
    /// Fails only when a derived figure is outside the `Decimal` range.
    pub fn for_document(data: &DocumentData) -> Result<Self, TotalsError> {
        let subtotal = data.subtotal;
        let tax = adjustment(subtotal, data.tax_rate_percent, compute_tax_amount, Figure::TaxAmount)?;
        let discount = adjustment(
            subtotal,
            data.discount_rate_percent,
            compute_discount_amount,
            Figure::DiscountAmount,
        )?;
        let balance = match data.amount_paid {
            Some(paid) if data.is_invoice() && !paid.is_zero() => {
                let due = data
                    .total
                    .checked_sub(paid)
                    .ok_or(TotalsError::Overflow(Figure::BalanceDue))?;
                Some(Balance {
                    amount_paid: paid,
                    balance_due: due,
                    state: BalanceState::of(due),
                })
            }
            _ => None,
        };

        Ok(Self {
            subtotal,
            tax,
            discount,
            total: data.total,
            balance,
        })
    }

    /// Number of lines the totals block will draw.
    pub fn line_count(&self) -> usize {
        2 + usize::from(self.tax.is_some())
            + usize::from(self.discount.is_some())
            + if self.balance.is_some() { 2 } else { 0 }
    }
}

fn adjustment(
    subtotal: Decimal,
    rate_percent: Decimal,
    compute: fn(Decimal, Decimal) -> Option<Decimal>,
    figure: Figure,
) -> Result<Option<Adjustment>, TotalsError> {
    if rate_percent <= Decimal::ZERO {
        return Ok(None);
    }
    let amount = compute(subtotal, rate_percent).ok_or(TotalsError::Overflow(figure))?;
    Ok(Some(Adjustment { rate_percent, amount }))
}
