//! Stakeplan Core — Martingale staking schedule generation.
//!
//! This crate contains the heart of the planner:
//! - Domain types (plan parameters, trade records, the generated plan)
//! - Single-pass Martingale schedule generator
//! - Presentation rounding (2 dp at emission, unrounded accumulation)
//!
//! Everything here is pure and synchronous: no I/O, no shared state.
//! Rendering, configuration files, and artifact export live in the CLI.

pub mod domain;
pub mod generator;

pub use domain::{round_cents, ParamError, PlanParams, StakingPlan, TradeRecord};
pub use generator::generate_plan;
