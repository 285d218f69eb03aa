use std::fmt;
use std::fmt::Formatter;
use crate::models::GeoPoint;

/// Meters per degree of latitude
const METERS_PER_DEG_LAT: f64 = 110_540.0;

/// Meters per degree of longitude at the equator
const METERS_PER_DEG_LON: f64 = 111_320.0;

/// Returns the planar area in square meters enclosed by a geographic polygon
///
/// The polygon is projected onto a local plane by scaling longitude offsets
/// with the cosine of the mean latitude (equirectangular approximation) and
/// the shoelace formula is applied to the projected coordinates. The
/// approximation only holds for extents up to a few kilometers, which covers
/// any rooftop; it is not valid for large polygons.
///
/// The boundary is implicitly closed, the last point connects back to the
/// first. Collinear or coincident points give an area of 0, not an error.
///
/// # Arguments
///
/// * 'points' - ordered polygon boundary, at least 3 points
pub fn area_m2(points: &[GeoPoint]) -> Result<f64, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError(format!("polygon needs at least 3 points, got {}", points.len())));
    }

    let mean_lat = points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64;
    let lon_scale = METERS_PER_DEG_LON * mean_lat.to_radians().cos();

    // Project relative to the first point to keep the coordinates small
    let origin = points[0];
    let projected = points
        .iter()
        .map(|p| ((p.lon - origin.lon) * lon_scale, (p.lat - origin.lat) * METERS_PER_DEG_LAT))
        .collect::<Vec<(f64, f64)>>();

    let mut cross_sum = 0.0;
    for i in 0..projected.len() {
        let (x1, y1) = projected[i];
        let (x2, y2) = projected[(i + 1) % projected.len()];
        cross_sum += x1 * y2 - x2 * y1;
    }

    Ok(cross_sum.abs() / 2.0)
}

#[derive(Debug, PartialEq)]
pub struct GeometryError(pub String);
impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GeometryError: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle(lat0: f64, lon0: f64, width_m: f64, height_m: f64) -> Vec<GeoPoint> {
        let d_lon = width_m / (METERS_PER_DEG_LON * lat0.to_radians().cos());
        let d_lat = height_m / METERS_PER_DEG_LAT;
        vec![
            GeoPoint { lon: lon0, lat: lat0 },
            GeoPoint { lon: lon0 + d_lon, lat: lat0 },
            GeoPoint { lon: lon0 + d_lon, lat: lat0 + d_lat },
            GeoPoint { lon: lon0, lat: lat0 + d_lat },
        ]
    }

    #[test]
    fn rectangle_area_matches_projected_dimensions() {
        let polygon = rectangle(21.2514, 81.6296, 100.0, 80.0);
        let area = area_m2(&polygon).unwrap();
        let expected = 100.0 * 80.0;
        assert!(
            (area - expected).abs() / expected < 0.01,
            "area {} should be within 1% of {}",
            area,
            expected
        );
    }

    #[test]
    fn triangle_area() {
        // Right triangle, legs 30 m and 40 m, at a high latitude
        let lat0: f64 = 59.3;
        let d_lon = 30.0 / (METERS_PER_DEG_LON * lat0.to_radians().cos());
        let d_lat = 40.0 / METERS_PER_DEG_LAT;
        let polygon = vec![
            GeoPoint { lon: 18.0, lat: lat0 },
            GeoPoint { lon: 18.0 + d_lon, lat: lat0 },
            GeoPoint { lon: 18.0, lat: lat0 + d_lat },
        ];
        let area = area_m2(&polygon).unwrap();
        assert!((area - 600.0).abs() < 6.0, "area {} should be ~600", area);
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut polygon = rectangle(21.0, 81.0, 50.0, 20.0);
        let ccw = area_m2(&polygon).unwrap();
        polygon.reverse();
        let cw = area_m2(&polygon).unwrap();
        assert!((ccw - cw).abs() < 1e-9);
    }

    #[test]
    fn fewer_than_three_points_is_rejected() {
        let two = vec![GeoPoint { lon: 0.0, lat: 0.0 }, GeoPoint { lon: 0.1, lat: 0.1 }];
        assert!(area_m2(&two).is_err());
        assert!(area_m2(&[]).is_err());
    }

    #[test]
    fn collinear_points_give_zero_area() {
        let line = vec![
            GeoPoint { lon: 10.0, lat: 50.0 },
            GeoPoint { lon: 10.001, lat: 50.001 },
            GeoPoint { lon: 10.002, lat: 50.002 },
        ];
        let area = area_m2(&line).unwrap();
        assert!(area < 1e-3, "collinear polygon area {} should be ~0", area);
    }

    #[test]
    fn coincident_points_give_zero_area() {
        let point = GeoPoint { lon: 10.0, lat: 50.0 };
        let area = area_m2(&[point, point, point]).unwrap();
        assert_eq!(area, 0.0);
    }
}
