//! Dashboard rendering
//!
//! Hand-formatted terminal dashboard: headline figures, a bar chart of the
//! expense breakdown and the seven-day cash flow.

use crate::insight::FinancialReview;
use crate::reports::{DashboardSummary, DayFlow, Projection};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the full dashboard
pub fn render_dashboard(summary: &DashboardSummary, flow: &[DayFlow]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Saldo atual:      {}\n", summary.balance));
    output.push_str(&format!("Receitas:         {}\n", summary.income));
    output.push_str(&format!("Despesas:         {}\n", summary.expense));
    output.push_str(&format!("Total em contas:  {}\n", summary.account_total));
    output.push_str(&format!("Faturas abertas:  {}\n", summary.card_invoices));

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str("Gastos por categoria\n");
        let top = summary.by_category[0].percent;
        for slice in &summary.by_category {
            output.push_str(&format!(
                "  {:<14} {} {:>6}  {}\n",
                slice.category.label(),
                format_bar(slice.percent, top, 20),
                format_percentage(slice.percent),
                slice.total,
            ));
        }
    }

    if !flow.is_empty() {
        output.push('\n');
        output.push_str("Últimos 7 dias\n");
        for day in flow {
            output.push_str(&format!(
                "  {}  +{:<14} -{:<14} saldo {}\n",
                day.date.format("%d/%m"),
                day.income.to_string(),
                day.expense.to_string(),
                day.running_balance,
            ));
        }
    }

    output
}

/// Render a projection result
pub fn render_projection(current: crate::models::Money, projection: &Projection) -> String {
    let mut output = String::new();
    output.push_str(&format!("Saldo atual:         {}\n", current));
    output.push_str(&format!("Saldo projetado:     {}\n", projection.projected_balance));
    output.push_str(&format!("Capacidade livre:    {}\n", projection.free_capacity));
    output.push_str(&format!(
        "Renda comprometida:  {}\n",
        format_percentage(projection.commitment_rate)
    ));
    output
}

/// Render a financial review
pub fn render_review(review: &FinancialReview) -> String {
    let mut output = String::new();
    output.push_str(&format!("Status: {}\n\n", review.status.label()));
    output.push_str(&format!("{}\n\nDicas:\n", review.summary));
    for tip in &review.tips {
        output.push_str(&format!("  - {}\n", tip));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::{CategorySlice, Scenario};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_render_dashboard() {
        let summary = DashboardSummary {
            balance: Money::new(dec!(2600)),
            account_total: Money::new(dec!(1000)),
            income: Money::new(dec!(3000)),
            expense: Money::new(dec!(400)),
            card_invoices: Money::zero(),
            by_category: vec![CategorySlice {
                category: crate::models::Category::Food,
                total: Money::new(dec!(400)),
                percent: 100.0,
            }],
        };

        let output = render_dashboard(&summary, &[]);
        assert!(output.contains("Saldo atual:      R$ 2.600,00"));
        assert!(output.contains("Total em contas:  R$ 1.000,00"));
        assert!(output.contains("Alimentação"));
    }

    #[test]
    fn test_render_projection() {
        let projection = crate::reports::project(
            Money::new(dec!(1000)),
            Money::new(dec!(3000)),
            Money::new(dec!(2000)),
            Scenario::baseline(),
        );
        let output = render_projection(Money::new(dec!(1000)), &projection);
        assert!(output.contains("Saldo projetado:     R$ 2.000,00"));
    }

    #[test]
    fn test_render_review() {
        let output = render_review(&FinancialReview::fallback());
        assert!(output.contains("Status: Atenção"));
        assert!(output.contains("Dicas:"));
    }
}
