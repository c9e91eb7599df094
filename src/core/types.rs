use serde::Serialize;

/// Strong-side guarantee of the peg band, in local units per foreign unit.
/// Worst case for converting foreign proceeds back to local currency.
pub const STRONG_SIDE_PEG: f64 = 7.75;

pub const DAYS_PER_YEAR: f64 = 365.0;

pub const PROJECTION_HORIZON_MONTHS: u32 = 24;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CostSpec {
    /// Absolute amount in local currency.
    Flat(f64),
    /// Percentage of principal on the 0-100 scale (1.5 means 1.5%).
    Percent(f64),
}

/// Validated calculation inputs. Rates are annual fractions, already divided
/// by 100 at the boundary; cost specs keep the percent scale they were
/// entered on.
#[derive(Debug, Clone)]
pub struct Params {
    pub principal: f64,
    pub exchange_rate: f64,
    pub local_rate: f64,
    pub foreign_rate: f64,
    pub conversion_cost: CostSpec,
    pub investment_fee: CostSpec,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCosts {
    pub conversion_cost: f64,
    pub investment_fee: f64,
    pub total_one_time_cost: f64,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAdjustedReturn {
    pub fx_fluctuation_rate: f64,
    pub effective_foreign_rate_local: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum BreakEven {
    /// The foreign rate never exceeds the local rate; with a sunk one-time
    /// cost on top it can never catch up.
    AlreadyBehind,
    /// No net one-time cost; the foreign option dominates from day zero.
    AlreadyAhead,
    #[serde(rename_all = "camelCase")]
    BreaksEvenAt { days: u32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionPoint {
    pub month_index: u32,
    pub local_cumulative: f64,
    pub foreign_net_cumulative: f64,
}

/// Everything the presentation layer needs from one calculation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub costs: NormalizedCosts,
    pub risk: RiskAdjustedReturn,
    pub annual_local_return: f64,
    pub annual_foreign_net_return: f64,
    pub break_even: BreakEven,
}
