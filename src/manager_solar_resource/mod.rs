pub mod errors;
mod models;

use std::collections::HashMap;
use std::time::Duration;
use log::{info, warn};
use reqwest::Client;
use crate::cache::{read_cache_data, store_cache_data, CachedResource};
use crate::initialization::SolarApi;
use crate::manager_solar_resource::errors::ResourceError;
use crate::manager_solar_resource::models::{PowerResponse, PvgisResponse};
use crate::models::{MonthlyResource, MONTH_NAMES};

const CACHE_PREFIX: &str = "psh";

/// PVGIS reports monthly averages; dividing by a nominal 30-day month
/// converts them to daily peak sun hours
const PVGIS_DAYS_PER_MONTH: f64 = 30.0;

/// Solar resource manager
///
/// Supplies monthly peak sun hours for a location. Fetches NASA POWER
/// climatology first, falls back to PVGIS, and finally to a configured
/// uniform value, so callers always receive 12 usable entries.
pub struct SolarResource {
    client: Client,
    power_url: String,
    pvgis_url: String,
    fallback_psh: f64,
}

impl SolarResource {

    /// Returns a new instance of SolarResource
    ///
    /// # Arguments
    ///
    /// * 'config' - solar API configuration struct
    pub fn new(config: &SolarApi) -> Result<Self, ResourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            power_url: config.power_url.to_string(),
            pvgis_url: config.pvgis_url.to_string(),
            fallback_psh: config.fallback_psh,
        })
    }

    /// Returns the monthly peak sun hours for the given location together
    /// with a tag naming the source the data came from. Never fails; any
    /// fetch problem degrades to the next source and is only logged.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude in decimal degrees
    /// * 'long' - longitude in decimal degrees
    /// * 'cache_dir' - directory to store/fetch existing data to/from
    pub async fn monthly_resource(&self, lat: f64, long: f64, cache_dir: &str) -> (MonthlyResource, String) {
        let key = format!("{:.2}_{:.2}", lat, long);

        match read_cache_data(cache_dir, CACHE_PREFIX, &key).await {
            Ok(Some(cached)) => return (cached.resource, cached.source),
            Ok(None) => (),
            Err(e) => warn!("failed reading resource cache: {}", e),
        }

        match self.fetch_nasa_power(lat, long).await {
            Ok(resource) => {
                store_resource(cache_dir, &key, "NASA POWER", &resource).await;
                return (resource, "NASA POWER".to_string());
            }
            Err(e) => warn!("NASA POWER fetch failed: {}", e),
        }

        match self.fetch_pvgis(lat, long).await {
            Ok(resource) => {
                store_resource(cache_dir, &key, "PVGIS", &resource).await;
                return (resource, "PVGIS".to_string());
            }
            Err(e) => warn!("PVGIS fetch failed: {}", e),
        }

        info!("could not fetch live solar data, using default average of {} kWh/m2/day", self.fallback_psh);
        (MonthlyResource::uniform(self.fallback_psh), "default average".to_string())
    }

    /// Monthly average GHI from the NASA POWER climatology endpoint
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude in decimal degrees
    /// * 'long' - longitude in decimal degrees
    async fn fetch_nasa_power(&self, lat: f64, long: f64) -> Result<MonthlyResource, ResourceError> {
        let req = self.client.get(&self.power_url)
            .query(&[
                ("parameters", "ALLSKY_SFC_SW_DWN".to_string()),
                ("community", "RE".to_string()),
                ("longitude", long.to_string()),
                ("latitude", lat.to_string()),
                ("format", "JSON".to_string()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(ResourceError(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let power: PowerResponse = serde_json::from_str(&json)?;

        from_keyed(&power.properties.parameter.ghi)
    }

    /// Monthly daily energy per kWp from PVGIS, converted to peak sun hours
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude in decimal degrees
    /// * 'long' - longitude in decimal degrees
    async fn fetch_pvgis(&self, lat: f64, long: f64) -> Result<MonthlyResource, ResourceError> {
        let req = self.client.get(&self.pvgis_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", long.to_string()),
                ("outputformat", "json".to_string()),
            ])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(ResourceError(format!("{:?}", status)));
        }

        let json = req.text().await?;
        let pvgis: PvgisResponse = serde_json::from_str(&json)?;

        let monthly = pvgis.outputs.monthly.fixed.e_d;
        if monthly.len() != 12 {
            return Err(ResourceError(format!("expected 12 monthly values, got {}", monthly.len())));
        }

        let mut psh = [0.0; 12];
        for (i, value) in monthly.iter().enumerate() {
            let daily = value / PVGIS_DAYS_PER_MONTH;
            if daily < 0.0 {
                return Err(ResourceError(format!("negative irradiation for month {}: {}", i + 1, value)));
            }
            psh[i] = daily;
        }

        Ok(MonthlyResource::new(psh))
    }
}

/// Caches a successfully fetched resource, failures are only logged
async fn store_resource(cache_dir: &str, key: &str, source: &str, resource: &MonthlyResource) {
    let cached = CachedResource { source: source.to_string(), resource: resource.clone() };
    if let Err(e) = store_cache_data(cache_dir, CACHE_PREFIX, key, &cached).await {
        warn!("failed writing resource cache: {}", e);
    }
}

/// Normalizes a month-keyed map into the 12-entry ordered resource
///
/// Accepts two-digit ("01") or bare ("1") month numbers as well as month
/// names ("Jan", "JANUARY"). Non-month keys such as NASA's "ANN" annual
/// aggregate are skipped. Negative values and missing months are rejected
/// so the caller moves on to the next source.
///
/// # Arguments
///
/// * 'values' - mapping from month key to peak sun hours
pub fn from_keyed(values: &HashMap<String, f64>) -> Result<MonthlyResource, ResourceError> {
    let mut psh = [f64::NAN; 12];

    for (key, value) in values {
        let Some(idx) = month_index(key) else { continue };
        if *value < 0.0 {
            return Err(ResourceError(format!("negative irradiance for {}: {}", key, value)));
        }
        psh[idx] = *value;
    }

    if psh.iter().any(|v| v.is_nan()) {
        return Err(ResourceError("incomplete monthly data".into()));
    }

    Ok(MonthlyResource::new(psh))
}

/// Zero-based month index for a numeric or named month key
fn month_index(key: &str) -> Option<usize> {
    if let Ok(number) = key.parse::<usize>() {
        return (1..=12).contains(&number).then(|| number - 1);
    }

    let prefix = key.get(..3)?;
    MONTH_NAMES.iter().position(|name| name.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed<const N: usize>(entries: [(&str, f64); N]) -> HashMap<String, f64> {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn two_digit_month_numbers_are_normalized() {
        let mut entries = HashMap::new();
        for m in 1..=12u32 {
            entries.insert(format!("{:02}", m), m as f64);
        }
        // NASA includes an annual aggregate alongside the months
        entries.insert("ANN".to_string(), 6.5);

        let resource = from_keyed(&entries).unwrap();
        assert_eq!(resource.get(1), 1.0);
        assert_eq!(resource.get(12), 12.0);
    }

    #[test]
    fn bare_month_numbers_are_normalized() {
        let mut entries = HashMap::new();
        for m in 1..=12u32 {
            entries.insert(m.to_string(), 5.0);
        }
        let resource = from_keyed(&entries).unwrap();
        assert_eq!(resource, MonthlyResource::uniform(5.0));
    }

    #[test]
    fn month_names_are_normalized_case_insensitively() {
        let entries = keyed([
            ("JAN", 4.1), ("feb", 4.7), ("Mar", 5.6), ("April", 6.2),
            ("may", 6.6), ("Jun", 6.4), ("Jul", 5.4), ("Aug", 5.0),
            ("September", 5.1), ("Oct", 5.0), ("Nov", 4.4), ("Dec", 3.9),
        ]);
        let resource = from_keyed(&entries).unwrap();
        assert_eq!(resource.get(1), 4.1);
        assert_eq!(resource.get(4), 6.2);
        assert_eq!(resource.get(9), 5.1);
    }

    #[test]
    fn incomplete_months_are_rejected() {
        let entries = keyed([("01", 5.0), ("02", 5.0), ("03", 5.0)]);
        assert!(from_keyed(&entries).is_err());
    }

    #[test]
    fn negative_fill_values_are_rejected() {
        let mut entries = HashMap::new();
        for m in 1..=12u32 {
            entries.insert(format!("{:02}", m), 5.0);
        }
        // NASA POWER uses large negative numbers as fill for missing data
        entries.insert("07".to_string(), -999.0);
        assert!(from_keyed(&entries).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut entries = HashMap::new();
        for m in 1..=12u32 {
            entries.insert(format!("{:02}", m), 5.0);
        }
        entries.insert("ANN".to_string(), 5.0);
        entries.insert("13".to_string(), 99.0);
        entries.insert("units".to_string(), 0.0);
        assert!(from_keyed(&entries).is_ok());
    }

    #[test]
    fn uniform_fallback_has_twelve_equal_entries() {
        let fallback = MonthlyResource::uniform(5.0);
        assert!((1..=12).all(|m| fallback.get(m) == 5.0));
        assert_eq!(fallback.mean(), 5.0);
    }
}
