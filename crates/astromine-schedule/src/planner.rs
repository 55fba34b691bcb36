//! Mining schedule planning.
//!
//! Computes the minimum number of days to mine an asteroid dry, deciding
//! how many robot-doubling build sessions to run before mining starts.
//! The answer is derived with integer arithmetic only: a floating-point
//! `log2` formulation misclassifies quantities that land exactly on a
//! doubling boundary, so the session count is found by repeated doubling
//! instead.

use crate::params::{BUILD_SESSION_DAYS, MAX_MINING_DAYS, MINE_RATE_UNITS_PER_DAY};
use crate::{ScheduleError, ScheduleResult};
use serde::Serialize;
use tracing::debug;

/// A fully computed mining plan for one ore quantity.
///
/// All derived values are fixed by `units` and the model parameters;
/// the plan has no state beyond this snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiningPlan {
    /// Total ore to be mined.
    pub units: u64,
    /// Number of 2-day robot-doubling sessions run before mining.
    pub build_sessions: u32,
    /// Days spent building (`build_sessions * BUILD_SESSION_DAYS`).
    pub build_days: u64,
    /// Robots available once building finishes (`2^build_sessions`).
    pub bots: u64,
    /// Days the fleet mines, some robots resting on the last day if the
    /// ore runs out early.
    pub mining_days: u64,
    /// The answer: `build_days + mining_days`.
    pub total_days: u64,
}

/// Mining schedule calculator.
pub struct Scheduler {
    /// Mining window in days; build until mining fits inside it.
    mining_window_days: u64,
    /// Days per build session.
    build_session_days: u64,
    /// Ore units one robot mines per day.
    units_per_bot_day: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create a scheduler with the standard model parameters.
    pub fn new() -> Self {
        Self {
            mining_window_days: MAX_MINING_DAYS,
            build_session_days: BUILD_SESSION_DAYS,
            units_per_bot_day: MINE_RATE_UNITS_PER_DAY,
        }
    }

    /// Create with custom parameters (for testing).
    pub fn with_params(mining_window_days: u64, build_session_days: u64) -> Self {
        Self {
            // A zero-day window would demand infinitely many robots.
            mining_window_days: mining_window_days.max(1),
            build_session_days,
            units_per_bot_day: MINE_RATE_UNITS_PER_DAY,
        }
    }

    /// Compute the full mining plan for `units` of ore.
    ///
    /// # Errors
    /// Returns [`ScheduleError::InvalidUnits`] when `units` is zero.
    pub fn plan(&self, units: u64) -> ScheduleResult<MiningPlan> {
        if units == 0 {
            return Err(ScheduleError::InvalidUnits { got: units });
        }

        // Smallest number of doublings that fits mining into the window.
        // Capacity saturates rather than overflows; once it reaches
        // u64::MAX it covers any valid `units`, so the comparison stays
        // exact everywhere it matters. 63 doublings already put the bot
        // count past any u64 ore quantity.
        let mut build_sessions: u32 = 0;
        let mut window_capacity = self
            .mining_window_days
            .saturating_mul(self.units_per_bot_day);
        while units > window_capacity && build_sessions < 63 {
            build_sessions += 1;
            window_capacity = window_capacity.saturating_mul(2);
        }

        let bots = 1u64 << build_sessions;
        let build_days = u64::from(build_sessions) * self.build_session_days;
        let mining_days = units.div_ceil(bots.saturating_mul(self.units_per_bot_day));
        let total_days = build_days + mining_days;

        let plan = MiningPlan {
            units,
            build_sessions,
            build_days,
            bots,
            mining_days,
            total_days,
        };

        debug!(
            units,
            build_sessions,
            bots,
            mining_days,
            total_days,
            "Computed mining plan"
        );

        Ok(plan)
    }
}

/// Calculate the minimum number of days to mine `units` of ore.
///
/// This is a convenience function that creates a [`Scheduler`] with the
/// standard parameters and returns only the total.
pub fn calculate_optimal_mining_time(units: u64) -> ScheduleResult<u64> {
    Ok(Scheduler::new().plan(units)?.total_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_building_up_to_window() {
        // 1..=5 units: one robot mines a unit a day, no building.
        for units in 1..=5u64 {
            let plan = Scheduler::new().plan(units).unwrap();
            assert_eq!(plan.build_sessions, 0);
            assert_eq!(plan.bots, 1);
            assert_eq!(plan.total_days, units, "{} units", units);
        }
    }

    #[test]
    fn test_first_build_at_six_units() {
        // 6 units with one robot takes 6 days; one 2-day session then
        // 2 robots mining 3 days is a day faster.
        let plan = Scheduler::new().plan(6).unwrap();
        assert_eq!(plan.build_sessions, 1);
        assert_eq!(plan.bots, 2);
        assert_eq!(plan.mining_days, 3);
        assert_eq!(plan.total_days, 5);
    }

    #[test]
    fn test_exact_doubling_boundary() {
        // 10 units sits exactly on the boundary: one session, 2 robots,
        // a full 5-day mining window. The integer search must not slip
        // to a second session here.
        let plan = Scheduler::new().plan(10).unwrap();
        assert_eq!(plan.build_sessions, 1);
        assert_eq!(plan.bots, 2);
        assert_eq!(plan.mining_days, 5);
        assert_eq!(plan.total_days, 7);
    }

    #[test]
    fn test_just_past_doubling_boundary() {
        // 11 units overruns the window with 2 robots, so a second
        // session is needed: 4 days building, 4 robots, 3 days mining.
        let plan = Scheduler::new().plan(11).unwrap();
        assert_eq!(plan.build_sessions, 2);
        assert_eq!(plan.bots, 4);
        assert_eq!(plan.mining_days, 3);
        assert_eq!(plan.total_days, 7);
    }

    #[test]
    fn test_boundary_grid() {
        // At units = 5 * 2^k the k-th boundary is inclusive; one more
        // unit forces the next session.
        for k in 0..20u32 {
            let boundary = 5u64 << k;
            let at = Scheduler::new().plan(boundary).unwrap();
            assert_eq!(at.build_sessions, k, "at boundary {}", boundary);
            let past = Scheduler::new().plan(boundary + 1).unwrap();
            assert_eq!(past.build_sessions, k + 1, "past boundary {}", boundary);
        }
    }

    #[test]
    fn test_zero_units_rejected() {
        let err = Scheduler::new().plan(0).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidUnits { got: 0 });
        assert!(calculate_optimal_mining_time(0).is_err());
    }

    #[test]
    fn test_free_function_matches_plan() {
        for units in [1u64, 5, 6, 10, 11, 100, 1_000_000] {
            let plan = Scheduler::new().plan(units).unwrap();
            assert_eq!(
                calculate_optimal_mining_time(units).unwrap(),
                plan.total_days
            );
        }
    }

    #[test]
    fn test_large_quantities_do_not_overflow() {
        // u64::MAX needs 62 sessions: 2^62 robots clear it in 4 days.
        let plan = Scheduler::new().plan(u64::MAX).unwrap();
        assert_eq!(plan.build_sessions, 62);
        assert_eq!(plan.bots, 1u64 << 62);
        assert_eq!(plan.mining_days, 4);
        assert_eq!(plan.total_days, 62 * 2 + 4);
    }

    #[test]
    fn test_custom_params() {
        // A 3-day window and 1-day sessions: 7 units needs 2 sessions
        // (7 > 3 and 7 > 6), then ceil(7/4) = 2 mining days.
        let sched = Scheduler::with_params(3, 1);
        let plan = sched.plan(7).unwrap();
        assert_eq!(plan.build_sessions, 2);
        assert_eq!(plan.build_days, 2);
        assert_eq!(plan.mining_days, 2);
        assert_eq!(plan.total_days, 4);
    }

    #[test]
    fn test_plan_serializes() {
        let plan = Scheduler::new().plan(10).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"units\":10"));
        assert!(json.contains("\"total_days\":7"));
    }
}
