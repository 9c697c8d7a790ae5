use super::{SECTION_GAP, Section, SectionOutput};
use crate::elements::{ElementRole, RectElement, Stroke, TextStyle, TotalsLine};
use crate::env::{RULE_COLOR, SectionEnv};
use billforge_format::MessageKey;
use billforge_style::TextAlign;
use billforge_totals::BalanceState;
use billforge_types::{Color, Decimal, Rect};

const BLOCK_WIDTH: f32 = 240.0;
const LINE_HEIGHT: f32 = 18.0;
const TOTAL_HEIGHT: f32 = 22.0;
const RULE_SPACE: f32 = 6.0;

pub const OUTSTANDING_COLOR: Color = Color::rgb(0xB9, 0x1C, 0x1C);
pub const SETTLED_COLOR: Color = Color::rgb(0x15, 0x80, 0x3D);

/// Right-aligned money summary under the item table.
pub struct TotalsBlock;

struct Line {
    kind: TotalsLine,
    label: String,
    value: String,
}

impl TotalsBlock {
    fn lines(env: &SectionEnv) -> Vec<Line> {
        let totals = env.totals;
        let f = env.formatter;
        let with_rate = |key: MessageKey, rate: Decimal| format!("{} ({})", env.label(key), f.format_percent(rate));

        let mut lines = vec![Line {
            kind: TotalsLine::Subtotal,
            label: env.label(MessageKey::Subtotal),
            value: f.format_currency(totals.subtotal),
        }];
        if let Some(tax) = totals.tax {
            lines.push(Line {
                kind: TotalsLine::Tax,
                label: with_rate(MessageKey::Tax, tax.rate_percent),
                value: f.format_currency(tax.amount),
            });
        }
        if let Some(discount) = totals.discount {
            lines.push(Line {
                kind: TotalsLine::Discount,
                label: with_rate(MessageKey::Discount, discount.rate_percent),
                value: f.format_currency(-discount.amount),
            });
        }
        lines.push(Line {
            kind: TotalsLine::Total,
            label: env.label(MessageKey::Total),
            value: f.format_currency(totals.total),
        });
        if let Some(balance) = totals.balance {
            lines.push(Line {
                kind: TotalsLine::AmountPaid,
                label: env.label(MessageKey::AmountPaid),
                value: f.format_currency(balance.amount_paid),
            });
            lines.push(Line {
                kind: TotalsLine::BalanceDue(balance.state),
                label: env.label(MessageKey::BalanceDue),
                value: f.format_currency(balance.balance_due),
            });
        }
        lines
    }

    fn advance(kind: TotalsLine) -> f32 {
        match kind {
            TotalsLine::Total => RULE_SPACE + TOTAL_HEIGHT,
            _ => LINE_HEIGHT,
        }
    }

    fn style(kind: TotalsLine, env: &SectionEnv) -> TextStyle {
        match kind {
            TotalsLine::Total => env.body_style(12.0).bold().colored(env.config.primary_color),
            TotalsLine::BalanceDue(state) => env.body_style(10.5).bold().colored(balance_color(state)),
            _ => env.body_style(9.5),
        }
    }
}

pub fn balance_color(state: BalanceState) -> Color {
    match state {
        BalanceState::Outstanding => OUTSTANDING_COLOR,
        BalanceState::Settled => SETTLED_COLOR,
    }
}

impl Section for TotalsBlock {
    fn name(&self) -> &'static str {
        "totals"
    }

    fn is_active(&self, _env: &SectionEnv) -> bool {
        true
    }

    fn measure(&self, env: &SectionEnv) -> f32 {
        Self::lines(env).iter().map(|l| Self::advance(l.kind)).sum()
    }

    fn render(&self, env: &SectionEnv) -> SectionOutput {
        let lines = Self::lines(env);
        let height = lines.iter().map(|l| Self::advance(l.kind)).sum();
        let mut out = SectionOutput::new(height, SECTION_GAP);

        let left = env.content_width - BLOCK_WIDTH;
        let half = BLOCK_WIDTH / 2.0;
        let mut y = 0.0;
        for line in &lines {
            let role = ElementRole::Totals(line.kind);
            let style = Self::style(line.kind, env);
            match line.kind {
                TotalsLine::Total => {
                    out.rule(left, y + 2.0, BLOCK_WIDTH, Stroke::new(RULE_COLOR, 0.75), ElementRole::Decoration);
                    y += RULE_SPACE;
                }
                TotalsLine::BalanceDue(state) => {
                    out.rect(
                        Rect::new(left - 4.0, y - 2.0, BLOCK_WIDTH + 8.0, LINE_HEIGHT),
                        RectElement::filled(balance_color(state).lighten(0.9)),
                        role,
                    );
                }
                _ => {}
            }
            out.text(left, y, half, &*line.label, style, TextAlign::Left, role);
            out.text(left + half, y, half, &*line.value, style, TextAlign::Right, role);
            y += match line.kind {
                TotalsLine::Total => TOTAL_HEIGHT,
                _ => LINE_HEIGHT,
            };
        }
        out
    }
}
