mod engine;
mod report;
mod solver;
mod types;

pub use engine::{
    FOREIGN_SERIES_LABEL, LOCAL_SERIES_LABEL, effective_foreign_rate, evaluate, fx_fluctuation,
    normalize_costs, projection_series,
};
pub use report::{calculation_steps, duration_label, month_label, verdict};
pub use solver::solve_break_even;
pub use types::{
    BreakEven, CostSpec, DAYS_PER_YEAR, Evaluation, NormalizedCosts, PROJECTION_HORIZON_MONTHS,
    Params, ProjectionPoint, RiskAdjustedReturn, STRONG_SIDE_PEG,
};
