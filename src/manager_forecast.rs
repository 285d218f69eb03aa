use chrono::NaiveDate;
use crate::models::{ForecastSeries, MonthEnergy, MonthlyResource, MONTH_NAMES};

/// Reference year for day counts when the caller does not supply one
const DEFAULT_YEAR: i32 = 2024;

/// Derating floor applied when panel tilt is far from the latitude-optimal
/// angle. The floor keeps extreme mismatches from zeroing the estimate.
const TILT_FACTOR_FLOOR: f64 = 0.5;

/// Returns the estimated monthly energy series and its annual total
///
/// Per-month energy in kWh is
/// `capacity_kw * psh * days * performance_ratio * (1 - shading) * tilt_factor`
/// where psh is the month's peak sun hours in kWh/m2/day. The annual total
/// is the exact sum of the monthly values, rounding is left to presentation.
///
/// # Arguments
///
/// * 'capacity_kw' - installed DC capacity
/// * 'resource' - peak sun hours per calendar month
/// * 'performance_ratio' - system loss factor, clamped to [0, 1]
/// * 'shading_factor' - fractional shading loss, clamped to [0, 1]
/// * 'tilt_deg' - panel tilt from horizontal in degrees
/// * 'latitude' - site latitude in degrees, sign is ignored
/// * 'year' - year for calendar day counts, defaults to 2024
pub fn forecast(
    capacity_kw: f64,
    resource: &MonthlyResource,
    performance_ratio: f64,
    shading_factor: f64,
    tilt_deg: f64,
    latitude: f64,
    year: Option<i32>,
) -> ForecastSeries {
    let year = year.unwrap_or(DEFAULT_YEAR);
    let performance_ratio = performance_ratio.clamp(0.0, 1.0);
    let shading_factor = shading_factor.clamp(0.0, 1.0);
    let tilt = tilt_factor(tilt_deg, latitude);

    let mut monthly: Vec<MonthEnergy> = Vec::with_capacity(12);
    let mut annual_total_kwh = 0.0;

    for month in 1..=12u32 {
        let days = days_in_month(month, year) as f64;
        let energy_kwh = capacity_kw
            * resource.get(month)
            * days
            * performance_ratio
            * (1.0 - shading_factor)
            * tilt;

        annual_total_kwh += energy_kwh;
        monthly.push(MonthEnergy { month: MONTH_NAMES[(month - 1) as usize], energy_kwh });
    }

    ForecastSeries { monthly, annual_total_kwh }
}

/// Multiplicative derating for tilt deviating from the latitude-optimal
/// angle, `max(0.5, cos(tilt - |latitude|))`
pub fn tilt_factor(tilt_deg: f64, latitude: f64) -> f64 {
    (tilt_deg - latitude.abs()).to_radians().cos().max(TILT_FACTOR_FLOOR)
}

/// Number of days in the given calendar month, leap years included
///
/// # Arguments
///
/// * 'month' - calendar month, 1..=12
/// * 'year' - year the month belongs to
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };

    next.signed_duration_since(first).num_days() as u32
}
