//! Totals arithmetic for estimates and invoices.
//!
//! [`TotalsSummary`] is the single source of the figures printed in the
//! totals block; [`validate_totals`] checks caller-supplied figures against
//! the recomputed ones.

mod calculator;
mod error;
mod summary;
mod validation;

pub use calculator::{
    compute_discount_amount, compute_line_amount, compute_subtotal, compute_tax_amount, compute_total,
};
pub use error::{Figure, TotalsError};
pub use summary::{Adjustment, Balance, BalanceState, TotalsSummary};
pub use validation::{TOLERANCE, TotalsDiscrepancy, TotalsValidation, validate_totals};
