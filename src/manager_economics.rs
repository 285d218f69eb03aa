use crate::models::Economics;

/// Denominator floor, in currency units, that keeps the payback period
/// finite when annual savings round down to nothing
const SAVINGS_FLOOR: f64 = 1.0;

/// Returns install cost, annual savings and payback period
///
/// The subsidy is modelled as added annual revenue rather than a reduction
/// of the install cost, matching the estimates this service replaces.
/// Payback is `install_cost / max(annual_savings, 1)`, so a zero-savings
/// system reports a very long but finite payback instead of dividing by
/// zero.
///
/// # Arguments
///
/// * 'capacity_kw' - installed DC capacity
/// * 'annual_energy_kwh' - forecast yearly production
/// * 'cost_per_kw' - installation cost per kW in local currency
/// * 'tariff_per_kwh' - electricity tariff in local currency
/// * 'subsidy_pct' - subsidy percentage, clamped to [0, 100]
pub fn evaluate(
    capacity_kw: f64,
    annual_energy_kwh: f64,
    cost_per_kw: f64,
    tariff_per_kwh: f64,
    subsidy_pct: f64,
) -> Economics {
    let install_cost = capacity_kw * cost_per_kw;

    let gross_annual_value = annual_energy_kwh * tariff_per_kwh;
    let subsidy_value = gross_annual_value * subsidy_pct.clamp(0.0, 100.0) / 100.0;
    let annual_savings = gross_annual_value + subsidy_value;

    let payback_years = install_cost / annual_savings.max(SAVINGS_FLOOR);

    Economics { install_cost, annual_savings, payback_years }
}
