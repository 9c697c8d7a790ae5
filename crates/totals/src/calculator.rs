//! Running-total arithmetic.
//!
//! All functions are exact `Decimal` arithmetic with no intermediate
//! rounding; rounding to cents happens once, at display time. Each returns
//! `None` when the result does not fit in a `Decimal`.

use billforge_types::LineItem;
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn compute_subtotal(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.amount))
}

/// `quantity × unit_price`, before rounding.
pub fn compute_line_amount(item: &LineItem) -> Option<Decimal> {
    item.quantity.checked_mul(item.unit_price)
}

// The rate is scaled first so that any rate up to 100% stays in range.
fn percent_of(subtotal: Decimal, rate_percent: Decimal) -> Option<Decimal> {
    rate_percent.checked_div(HUNDRED)?.checked_mul(subtotal)
}

pub fn compute_tax_amount(subtotal: Decimal, tax_rate_percent: Decimal) -> Option<Decimal> {
    percent_of(subtotal, tax_rate_percent)
}

pub fn compute_discount_amount(subtotal: Decimal, discount_rate_percent: Decimal) -> Option<Decimal> {
    percent_of(subtotal, discount_rate_percent)
}

pub fn compute_total(subtotal: Decimal, tax_amount: Decimal, discount_amount: Decimal) -> Option<Decimal> {
    subtotal.checked_sub(discount_amount)?.checked_add(tax_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn tax_and_discount_are_percentages_of_subtotal() {
        let subtotal = dec("1000.00");
        let tax = compute_tax_amount(subtotal, dec("8")).unwrap();
        let discount = compute_discount_amount(subtotal, dec("10")).unwrap();
        assert_eq!(tax, dec("80"));
        assert_eq!(discount, dec("100"));
        assert_eq!(compute_total(subtotal, tax, discount), Some(dec("980")));
    }

    #[test]
    fn zero_rates_contribute_nothing() {
        let subtotal = dec("500");
        assert_eq!(compute_tax_amount(subtotal, Decimal::ZERO), Some(Decimal::ZERO));
        assert_eq!(compute_discount_amount(subtotal, Decimal::ZERO), Some(Decimal::ZERO));
    }

    #[test]
    fn total_identity_holds_across_rates() {
        let subtotals = ["0", "0.01", "19.99", "1234.56", "99999.99"];
        let rates = ["0", "0.5", "7.25", "8", "12.5", "100"];
        for s in subtotals {
            for tax_rate in rates {
                for discount_rate in rates {
                    let subtotal = dec(s);
                    let tax = compute_tax_amount(subtotal, dec(tax_rate)).unwrap();
                    let discount = compute_discount_amount(subtotal, dec(discount_rate)).unwrap();
                    assert_eq!(compute_total(subtotal, tax, discount), Some(subtotal + tax - discount));
                }
            }
        }
    }

    #[test]
    fn subtotal_sums_line_amounts() {
        let items = vec![
            LineItem::priced("Labor", dec("2"), dec("250")),
            LineItem::priced("Tile", dec("12.5"), dec("3.20")),
        ];
        assert_eq!(compute_subtotal(&items), Some(dec("540")));
        assert_eq!(compute_subtotal(&[]), Some(Decimal::ZERO));
        assert_eq!(compute_line_amount(&items[1]), Some(dec("40")));
    }

    #[test]
    fn results_out_of_range_are_none() {
        let mut huge = LineItem::priced("Bulk", dec("1"), dec("1"));
        huge.amount = Decimal::MAX;
        assert_eq!(compute_subtotal(&[huge.clone(), huge.clone()]), None);

        huge.quantity = dec("2");
        huge.unit_price = Decimal::MAX;
        assert_eq!(compute_line_amount(&huge), None);

        assert!(compute_tax_amount(Decimal::MAX, dec("8")).is_some());
        assert_eq!(compute_tax_amount(Decimal::MAX, dec("250")), None);
        assert_eq!(compute_total(Decimal::MAX, Decimal::ONE, Decimal::ZERO), None);
        assert_eq!(compute_total(Decimal::MAX, Decimal::ONE, Decimal::ONE), Some(Decimal::MAX));
    }
}
