//! Domain types for stakeplan.

pub mod params;
pub mod schedule;
pub mod trade;

pub use params::{ParamError, PlanParams};
pub use schedule::StakingPlan;
pub use trade::TradeRecord;

/// Round a monetary value to 2 decimal places for presentation.
///
/// Internal accumulation stays unrounded; only emitted record fields and
/// the funding totals go through this.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(round_cents(1.004), 1.0);
        assert_eq!(round_cents(1.006), 1.01);
        assert_eq!(round_cents(12345.6789), 12345.68);
    }

    #[test]
    fn exact_cents_pass_through() {
        assert_eq!(round_cents(0.0), 0.0);
        assert_eq!(round_cents(133000.0), 133000.0);
        assert_eq!(round_cents(0.25), 0.25);
    }
}
