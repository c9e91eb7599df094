use super::types::{BreakEven, DAYS_PER_YEAR};

/// Finds where the two simple-interest curves cross: local cumulative
/// `principal * local_rate * t` against foreign net cumulative
/// `principal * effective_foreign_rate * t - total_one_time_cost`.
///
/// The rate-dominance check runs first, so the division below only ever sees
/// a strictly positive divisor. A tie on rates counts as behind: the
/// one-time cost is sunk at t = 0 and equal accrual never earns it back.
pub fn solve_break_even(
    principal: f64,
    local_rate: f64,
    effective_foreign_rate: f64,
    total_one_time_cost: f64,
) -> BreakEven {
    if effective_foreign_rate <= local_rate {
        return BreakEven::AlreadyBehind;
    }

    let years = total_one_time_cost / (principal * (effective_foreign_rate - local_rate));
    if years <= 0.0 {
        return BreakEven::AlreadyAhead;
    }

    BreakEven::BreaksEvenAt {
        days: (years * DAYS_PER_YEAR).ceil() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    #[test]
    fn equal_rates_are_classified_as_behind() {
        let result = solve_break_even(100_000.0, 0.04, 0.04, 250.0);
        assert_eq!(result, BreakEven::AlreadyBehind);
    }

    #[test]
    fn lower_effective_rate_never_catches_up() {
        let result = solve_break_even(100_000.0, 0.04, 0.0383, 250.0);
        assert_eq!(result, BreakEven::AlreadyBehind);
    }

    #[test]
    fn zero_cost_with_rate_advantage_is_ahead_from_day_zero() {
        let result = solve_break_even(100_000.0, 0.02, 0.0433, 0.0);
        assert_eq!(result, BreakEven::AlreadyAhead);
    }

    #[test]
    fn net_rebate_is_ahead_from_day_zero() {
        let result = solve_break_even(100_000.0, 0.02, 0.0433, -50.0);
        assert_eq!(result, BreakEven::AlreadyAhead);
    }

    #[test]
    fn crossover_day_count_rounds_up_to_whole_days() {
        // t* = 1000 / (100000 * 0.10) = 0.1 years = 36.5 days.
        let result = solve_break_even(100_000.0, 0.0, 0.10, 1_000.0);
        assert_eq!(result, BreakEven::BreaksEvenAt { days: 37 });
    }

    #[test]
    fn worked_example_lands_on_forty_days() {
        let fx = 7.75_f64 / 7.80 - 1.0;
        let effective = 1.05 * (1.0 + fx) - 1.0;
        let total_cost = 100_000.0 * (1.0 - (1.0 - 0.001_f64).powi(2)) + 50.0;

        let result = solve_break_even(100_000.0, 0.02, effective, total_cost);
        assert_eq!(result, BreakEven::BreaksEvenAt { days: 40 });
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_equal_rates_never_produce_a_day_count(
            rate_bp in 0u32..5_000,
            cost in 0u32..1_000_000,
        ) {
            let rate = rate_bp as f64 / 10_000.0;
            let result = solve_break_even(100_000.0, rate, rate, cost as f64);
            prop_assert!(result == BreakEven::AlreadyBehind);
        }

        #[test]
        fn prop_positive_cost_with_advantage_needs_at_least_one_day(
            cost in 1u32..1_000_000,
            local_bp in 0u32..400,
            edge_bp in 1u32..400,
        ) {
            let local = local_bp as f64 / 10_000.0;
            let effective = local + edge_bp as f64 / 10_000.0;
            match solve_break_even(100_000.0, local, effective, cost as f64) {
                BreakEven::BreaksEvenAt { days } => prop_assert!(days >= 1),
                other => prop_assert!(false, "expected a day count, got {other:?}"),
            }
        }

        #[test]
        fn prop_raising_the_cost_never_shortens_the_wait(
            cost in 0u32..500_000,
            extra in 1u32..500_000,
        ) {
            let days_for = |cost: f64| match solve_break_even(100_000.0, 0.02, 0.05, cost) {
                BreakEven::AlreadyAhead => 0,
                BreakEven::BreaksEvenAt { days } => days,
                BreakEven::AlreadyBehind => unreachable!("rates are fixed with an advantage"),
            };

            prop_assert!(days_for(cost as f64) <= days_for((cost + extra) as f64));
        }
    }
}
