use super::types::{BreakEven, CostSpec, Evaluation, Params, STRONG_SIDE_PEG};

fn count_label(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Category-axis label for a chart month index.
pub fn month_label(month_index: u32) -> String {
    if month_index == 0 {
        return "start".to_string();
    }
    if month_index % 12 == 0 {
        return count_label(month_index / 12, "year");
    }
    if month_index > 12 {
        return format!("1 year {}", count_label(month_index % 12, "month"));
    }
    count_label(month_index, "month")
}

/// "Y years D days" with zero components suppressed.
pub fn duration_label(days: u32) -> String {
    let years = days / 365;
    let remaining = days % 365;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(count_label(years, "year"));
    }
    if remaining > 0 {
        parts.push(count_label(remaining, "day"));
    }
    if parts.is_empty() {
        return "0 days".to_string();
    }
    parts.join(" ")
}

pub fn verdict(break_even: &BreakEven) -> String {
    match break_even {
        BreakEven::AlreadyBehind => "Even before one-time costs, the foreign bond's \
             risk-adjusted annual rate is at or below the local deposit rate, so it can \
             never catch up."
            .to_string(),
        BreakEven::AlreadyAhead => "Even after all conversion costs and currency risk, \
             the foreign bond's return is ahead of the local deposit from day one."
            .to_string(),
        BreakEven::BreaksEvenAt { days } => format!(
            "A holding period of about {} is needed before the foreign bond's total \
             return overtakes the local deposit.",
            duration_label(*days)
        ),
    }
}

fn conversion_cost_formula(spec: CostSpec, principal: f64, cost: f64) -> String {
    match spec {
        CostSpec::Flat(_) => format!("{cost:.2} (flat amount)"),
        CostSpec::Percent(value) => {
            format!("{principal:.2} * [1 - (1 - {value}%)^2] = {cost:.2}")
        }
    }
}

fn investment_fee_formula(spec: CostSpec, principal: f64, cost: f64) -> String {
    match spec {
        CostSpec::Flat(_) => format!("{cost:.2} (flat amount)"),
        CostSpec::Percent(value) => format!("{principal:.2} * {value}% = {cost:.2}"),
    }
}

/// The step-by-step narrative shown alongside the verdict, one-year figures
/// throughout.
pub fn calculation_steps(params: &Params, evaluation: &Evaluation) -> Vec<String> {
    let fx_pct = evaluation.risk.fx_fluctuation_rate * 100.0;
    let effective_pct = evaluation.risk.effective_foreign_rate_local * 100.0;

    vec![
        format!(
            "1. Local deposit annual return: {:.2} * {:.4}% = {:.2}",
            params.principal,
            params.local_rate * 100.0,
            evaluation.annual_local_return
        ),
        format!(
            "2. Worst-case exchange-rate move under the peg (local strengthens to \
             {STRONG_SIDE_PEG}): ({STRONG_SIDE_PEG} / {}) - 1 = {:.4}%",
            params.exchange_rate, fx_pct
        ),
        format!(
            "3. Risk-adjusted foreign annual rate in local terms: [(1 + {:.4}%) * (1 + \
             {:.4}%) - 1] = {:.4}%",
            params.foreign_rate * 100.0,
            fx_pct,
            effective_pct
        ),
        format!(
            "4. Total one-time cost: conversion {} + fee {} = {:.2}",
            conversion_cost_formula(
                params.conversion_cost,
                params.principal,
                evaluation.costs.conversion_cost
            ),
            investment_fee_formula(
                params.investment_fee,
                params.principal,
                evaluation.costs.investment_fee
            ),
            evaluation.costs.total_one_time_cost
        ),
        format!(
            "5. Foreign bond net annual return after costs: ({:.2} * {:.4}%) - {:.2} = {:.2}",
            params.principal,
            effective_pct,
            evaluation.costs.total_one_time_cost,
            evaluation.annual_foreign_net_return
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn sample_params() -> Params {
        Params {
            principal: 100_000.0,
            exchange_rate: 7.80,
            local_rate: 0.04,
            foreign_rate: 0.045,
            conversion_cost: CostSpec::Percent(0.1),
            investment_fee: CostSpec::Percent(0.05),
        }
    }

    #[test]
    fn month_labels_follow_the_axis_rule() {
        assert_eq!(month_label(0), "start");
        assert_eq!(month_label(1), "1 month");
        assert_eq!(month_label(5), "5 months");
        assert_eq!(month_label(12), "1 year");
        assert_eq!(month_label(13), "1 year 1 month");
        assert_eq!(month_label(18), "1 year 6 months");
        assert_eq!(month_label(24), "2 years");
    }

    #[test]
    fn duration_labels_suppress_zero_components() {
        assert_eq!(duration_label(40), "40 days");
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(365), "1 year");
        assert_eq!(duration_label(366), "1 year 1 day");
        assert_eq!(duration_label(400), "1 year 35 days");
        assert_eq!(duration_label(730), "2 years");
        assert_eq!(duration_label(0), "0 days");
    }

    #[test]
    fn verdict_embeds_the_break_even_duration() {
        let message = verdict(&BreakEven::BreaksEvenAt { days: 400 });
        assert!(message.contains("1 year 35 days"));
    }

    #[test]
    fn verdict_covers_the_degenerate_outcomes() {
        assert!(verdict(&BreakEven::AlreadyBehind).contains("never catch up"));
        assert!(verdict(&BreakEven::AlreadyAhead).contains("from day one"));
    }

    #[test]
    fn steps_walk_through_all_five_calculations() {
        let params = sample_params();
        let evaluation = evaluate(&params);
        let steps = calculation_steps(&params, &evaluation);

        assert_eq!(steps.len(), 5);
        assert!(steps[0].contains("4.0000%"));
        assert!(steps[0].contains("4000.00"));
        assert!(steps[1].contains("7.75"));
        assert!(steps[1].contains("-0.6410%"));
        assert!(steps[2].contains("3.8301%"));
        assert!(steps[3].contains("[1 - (1 - 0.1%)^2]"));
        assert!(steps[3].contains("249.90"));
        assert!(steps[4].contains("249.90"));
    }

    #[test]
    fn flat_cost_steps_skip_the_percentage_formula() {
        let params = Params {
            conversion_cost: CostSpec::Flat(300.0),
            investment_fee: CostSpec::Flat(25.0),
            ..sample_params()
        };
        let evaluation = evaluate(&params);
        let steps = calculation_steps(&params, &evaluation);

        assert!(steps[3].contains("300.00 (flat amount)"));
        assert!(steps[3].contains("25.00 (flat amount)"));
        assert!(steps[3].contains("325.00"));
    }
}
