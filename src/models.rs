use serde::{Deserialize, Serialize};

/// Month names in calendar order, used both for normalizing fetched data
/// and for labelling chart series.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A geographic point as supplied by the map UI, in decimal degrees
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Rectangular rooftop approximation used when no polygon is drawn
#[derive(Clone, Copy, Debug)]
pub struct RectSurface {
    pub width_m: f64,
    pub height_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Physical panel dimensions and rating
#[derive(Clone, Copy, Debug)]
pub struct PanelSpec {
    pub width_m: f64,
    pub height_m: f64,
    pub wattage_w: f64,
    pub orientation: Orientation,
}

/// Result of fitting panels on a rectangular surface, count == rows * cols
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PackingResult {
    pub count: u32,
    pub rows: u32,
    pub cols: u32,
}

/// Peak sun hours per calendar month, kWh/m2/day, index 0 = January.
/// Always carries exactly 12 values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyResource {
    psh: [f64; 12],
}

impl MonthlyResource {
    pub fn new(psh: [f64; 12]) -> Self {
        Self { psh }
    }

    /// The same value for every month, used as the guaranteed fallback
    pub fn uniform(value: f64) -> Self {
        Self { psh: [value; 12] }
    }

    /// Peak sun hours for the given calendar month (1..=12)
    pub fn get(&self, month: u32) -> f64 {
        self.psh[(month - 1) as usize]
    }

    pub fn values(&self) -> &[f64; 12] {
        &self.psh
    }

    pub fn mean(&self) -> f64 {
        self.psh.iter().sum::<f64>() / 12.0
    }
}

/// One month of forecast energy
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MonthEnergy {
    pub month: &'static str,
    pub energy_kwh: f64,
}

/// Twelve monthly energy values plus their exact sum
#[derive(Clone, Debug, Serialize)]
pub struct ForecastSeries {
    pub monthly: Vec<MonthEnergy>,
    pub annual_total_kwh: f64,
}

/// Financial outcome of an installation
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Economics {
    pub install_cost: f64,
    pub annual_savings: f64,
    pub payback_years: f64,
}
