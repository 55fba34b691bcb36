//! # astromine-schedule
//!
//! Mining schedule optimization for asteroid ore extraction.
//!
//! This crate provides:
//! - Optimal mining time calculation for a given ore quantity
//! - The full plan breakdown (build sessions, robot count, mining days)
//! - Scheduling model parameters
//!
//! ## Model
//!
//! Mining starts with a single robot. Each day every robot either mines
//! (1 unit of ore per robot per day), builds (all robots spend a 2-day
//! session producing one new robot each, doubling the fleet), or rests.
//! Robots cannot collaborate to speed up a single build, and splitting
//! the fleet between mining and building never helps, so the fleet acts
//! in lockstep: building happens up front, mining after.
//!
//! ## The 5-day mining window
//!
//! Doubling the fleet costs 2 days and halves the remaining mining time.
//! Halving only recovers those 2 days when the remaining mining time
//! exceeds 4 days, so a session pays off exactly when mining would
//! otherwise overrun 5 days. The scheduler therefore runs the smallest
//! number of doubling sessions that brings mining down to at most
//! [`params::MAX_MINING_DAYS`] days.

mod error;
mod planner;

pub use error::{ScheduleError, ScheduleResult};
pub use planner::{calculate_optimal_mining_time, MiningPlan, Scheduler};

/// Scheduling model parameters.
pub mod params {
    /// Ore units a single robot mines in one day.
    pub const MINE_RATE_UNITS_PER_DAY: u64 = 1;

    /// Days one build session takes. Every robot builds one new robot
    /// during the session, doubling the fleet.
    pub const BUILD_SESSION_DAYS: u64 = 2;

    /// Mining window in days. Building another robot generation pays off
    /// only while mining would overrun this many days.
    pub const MAX_MINING_DAYS: u64 = 5;
}
