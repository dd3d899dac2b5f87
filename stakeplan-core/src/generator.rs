//! Schedule generator — the Martingale staking computation.
//!
//! Each trade's wager is sized so that, if it succeeds, its profit alone
//! covers all losses accumulated from prior failed trades plus the desired
//! profit. Single pass, O(num_trades), deterministic, no I/O.

use crate::domain::{round_cents, ParamError, PlanParams, StakingPlan, TradeRecord};

/// Generate a staking plan from the given parameters.
///
/// Validation is fail-fast: on invalid inputs an error is returned before
/// any computation runs, never a partial schedule.
///
/// Record fields are rounded to 2 dp at emission; the loss carry between
/// iterations stays unrounded. The daily total sums the *rounded* wagers,
/// so it matches the printed rows to the cent.
pub fn generate_plan(params: &PlanParams) -> Result<StakingPlan, ParamError> {
    params.validate()?;

    let rate = params.rate();
    let first_wager = params.desired_profit / rate;

    let mut records = Vec::with_capacity(params.num_trades as usize);
    let mut cumulative_loss = 0.0_f64;
    let mut daily_required = 0.0_f64;

    for trade_number in 1..=params.num_trades {
        // The opening trade has nothing to recover. The general formula
        // reduces to the same value at zero loss; the branch is kept to
        // mirror the strategy's definition.
        let wager = if cumulative_loss == 0.0 {
            first_wager
        } else {
            (cumulative_loss + params.desired_profit) / rate
        };

        let profit = wager * rate;
        let total_return = wager + profit;
        let net_profit = profit - cumulative_loss;

        let rounded_wager = round_cents(wager);
        records.push(TradeRecord {
            trade_number,
            wager: rounded_wager,
            profit_if_successful: round_cents(profit),
            cumulative_loss_before: round_cents(cumulative_loss),
            total_return_if_successful: round_cents(total_return),
            net_profit_if_successful: round_cents(net_profit),
        });

        daily_required += rounded_wager;
        cumulative_loss += wager;
    }

    let daily_required = round_cents(daily_required);
    let weekly_required = round_cents(daily_required * 7.0);

    Ok(StakingPlan::new(
        *params,
        records,
        daily_required,
        weekly_required,
    ))
}
