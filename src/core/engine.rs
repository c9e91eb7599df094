use super::solver::solve_break_even;
use super::types::{
    CostSpec, Evaluation, NormalizedCosts, Params, ProjectionPoint, RiskAdjustedReturn,
    STRONG_SIDE_PEG,
};

pub const LOCAL_SERIES_LABEL: &str = "Local deposit cumulative return";
pub const FOREIGN_SERIES_LABEL: &str = "Foreign bond net cumulative return";

pub fn normalize_costs(params: &Params) -> NormalizedCosts {
    let conversion_cost = round_trip_conversion_cost(params.conversion_cost, params.principal);
    let investment_fee = investment_fee_cost(params.investment_fee, params.principal);

    NormalizedCosts {
        conversion_cost,
        investment_fee,
        total_one_time_cost: conversion_cost + investment_fee,
    }
}

// The conversion spread is paid twice, out and back, and the second leg
// applies to the base the first leg already shrank.
fn round_trip_conversion_cost(spec: CostSpec, principal: f64) -> f64 {
    match spec {
        CostSpec::Flat(value) => value,
        CostSpec::Percent(value) => {
            let per_leg = value / 100.0;
            principal * (1.0 - (1.0 - per_leg).powi(2))
        }
    }
}

fn investment_fee_cost(spec: CostSpec, principal: f64) -> f64 {
    match spec {
        CostSpec::Flat(value) => value,
        CostSpec::Percent(value) => principal * (value / 100.0),
    }
}

/// Worst-case currency move: the local currency strengthens to the peg's
/// strong-side bound by the time proceeds are converted back. Signed, and
/// negative whenever the current rate already trades above the bound.
pub fn fx_fluctuation(peg: f64, current_exchange_rate: f64) -> f64 {
    peg / current_exchange_rate - 1.0
}

/// One-period composite of the bond yield and the currency move.
pub fn effective_foreign_rate(foreign_rate: f64, fx_fluctuation: f64) -> f64 {
    (1.0 + foreign_rate) * (1.0 + fx_fluctuation) - 1.0
}

pub fn evaluate(params: &Params) -> Evaluation {
    let costs = normalize_costs(params);
    let fx = fx_fluctuation(STRONG_SIDE_PEG, params.exchange_rate);
    let effective = effective_foreign_rate(params.foreign_rate, fx);
    let risk = RiskAdjustedReturn {
        fx_fluctuation_rate: fx,
        effective_foreign_rate_local: effective,
    };

    let annual_local_return = params.principal * params.local_rate;
    let annual_foreign_net_return = params.principal * effective - costs.total_one_time_cost;
    let break_even = solve_break_even(
        params.principal,
        params.local_rate,
        effective,
        costs.total_one_time_cost,
    );

    Evaluation {
        costs,
        risk,
        annual_local_return,
        annual_foreign_net_return,
        break_even,
    }
}

/// Monthly cumulative-return series for both instruments. Both legs accrue
/// simple interest, the same model the break-even solver uses; the foreign
/// series is floored at zero and both series anchor at zero for month 0.
pub fn projection_series(
    principal: f64,
    local_rate: f64,
    effective_foreign_rate: f64,
    total_one_time_cost: f64,
    horizon_months: u32,
) -> Vec<ProjectionPoint> {
    (0..=horizon_months)
        .map(|month_index| {
            let t = month_index as f64 / 12.0;
            let local_cumulative = principal * local_rate * t;
            let foreign_net_cumulative = if month_index == 0 {
                0.0
            } else {
                (principal * effective_foreign_rate * t - total_one_time_cost).max(0.0)
            };

            ProjectionPoint {
                month_index,
                local_cumulative,
                foreign_net_cumulative,
            }
        })
        .collect()
}
