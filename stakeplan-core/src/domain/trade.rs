//! TradeRecord — one row of the staking schedule.

use serde::{Deserialize, Serialize};

/// A single planned trade.
///
/// All monetary fields are presentation values, rounded to 2 decimal
/// places at emission time. `cumulative_loss_before` is the loss carried
/// into this trade: the sum of all prior wagers, assumed lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 1-based position in the schedule.
    pub trade_number: u32,
    /// Amount staked on this trade.
    pub wager: f64,
    pub profit_if_successful: f64,
    pub cumulative_loss_before: f64,
    pub total_return_if_successful: f64,
    pub net_profit_if_successful: f64,
}

impl TradeRecord {
    /// Whether a success on this trade nets the desired profit, to the cent.
    ///
    /// Holds for every row of a generated plan: the wager is sized so that
    /// one success recovers all prior losses plus exactly the target.
    pub fn nets_target(&self, desired_profit: f64) -> bool {
        (self.net_profit_if_successful - desired_profit).abs() < 0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TradeRecord {
        TradeRecord {
            trade_number: 2,
            wager: 11000.0,
            profit_if_successful: 1100.0,
            cumulative_loss_before: 1000.0,
            total_return_if_successful: 12100.0,
            net_profit_if_successful: 100.0,
        }
    }

    #[test]
    fn nets_target_within_a_cent() {
        let rec = sample_record();
        assert!(rec.nets_target(100.0));
        assert!(rec.nets_target(100.004));
        assert!(!rec.nets_target(100.02));
        assert!(!rec.nets_target(50.0));
    }
}
