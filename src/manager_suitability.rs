use crate::models::MonthlyResource;

/// Weights for the resource, area, shading and tilt sub-scores. Policy
/// constants kept for output compatibility with earlier estimates.
const WEIGHTS: [f64; 4] = [0.35, 0.25, 0.20, 0.20];

/// Neutral resource sub-score used when no solar data is available
const RESOURCE_SCORE_DEFAULT: f64 = 50.0;

/// Returns a 0..100 suitability score for the site
///
/// Four independently clamped sub-scores are combined with fixed weights:
/// solar resource quality, roof area, shading, and how close the tilt is
/// to the latitude-optimal angle. The result is rounded to one decimal.
///
/// # Arguments
///
/// * 'roof_area_m2' - usable rooftop area
/// * 'resource' - monthly peak sun hours, None when unavailable
/// * 'shading_factor' - fractional shading loss
/// * 'tilt_deg' - panel tilt from horizontal in degrees
/// * 'latitude' - site latitude in degrees, sign is ignored
pub fn score(
    roof_area_m2: f64,
    resource: Option<&MonthlyResource>,
    shading_factor: f64,
    tilt_deg: f64,
    latitude: f64,
) -> f64 {
    let resource_score = match resource {
        Some(r) => (20.0 + (r.mean() - 3.0) * 18.0).clamp(20.0, 95.0),
        None => RESOURCE_SCORE_DEFAULT,
    };

    let area_score = (30.0 + (roof_area_m2 - 10.0) * 1.5).clamp(30.0, 95.0);
    let shade_score = (100.0 - shading_factor * 100.0).clamp(10.0, 100.0);
    let tilt_score = (100.0 - (tilt_deg - latitude.abs()).abs() * 2.2).clamp(40.0, 100.0);

    let weighted = resource_score * WEIGHTS[0]
        + area_score * WEIGHTS[1]
        + shade_score * WEIGHTS[2]
        + tilt_score * WEIGHTS[3];

    (weighted * 10.0).round() / 10.0
}
