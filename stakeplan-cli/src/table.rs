//! Plan rendering — fixed-width text table and funding summary.

use stakeplan_core::StakingPlan;

/// Render the schedule as a fixed-width table.
///
/// Columns follow the reference layout: Trade, Wager, Profit if
/// Successful, Cumulative Loss, Total Return if Successful, Net Profit if
/// Successful, each tagged with the display currency. Column widths grow
/// with the amounts (late-schedule wagers get large fast).
pub fn render_table(plan: &StakingPlan, currency: &str) -> String {
    let headers = [
        "Trade".to_string(),
        format!("Wager ({currency})"),
        format!("Profit if Successful ({currency})"),
        format!("Cumulative Loss ({currency})"),
        format!("Total Return if Successful ({currency})"),
        format!("Net Profit if Successful ({currency})"),
    ];

    let rows: Vec<[String; 6]> = plan
        .records()
        .iter()
        .map(|r| {
            [
                r.trade_number.to_string(),
                format!("{:.2}", r.wager),
                format!("{:.2}", r.profit_if_successful),
                format!("{:.2}", r.cumulative_loss_before),
                format!("{:.2}", r.total_return_if_successful),
                format!("{:.2}", r.net_profit_if_successful),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:>width$}", header, width = widths[i]));
    }
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:>width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }

    out
}

/// Render the funding summary printed under the table.
pub fn render_summary(plan: &StakingPlan, currency: &str) -> String {
    format!(
        "Daily required amount:  {:.2} {currency}\nWeekly required amount: {:.2} {currency}\n",
        plan.daily_required(),
        plan.weekly_required()
    )
}
