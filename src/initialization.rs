use serde::Deserialize;
use crate::errors::UnrecoverableError;
use crate::logging::setup_logging;

const CONFIG_PATH: &str = "./config.json";

#[derive(Deserialize, Clone)]
pub struct Config {
    pub web_server: WebServer,
    pub files: Files,
    pub geo_ref: GeoRef,
    pub solar_api: SolarApi,
}

#[derive(Deserialize, Clone)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct Files {
    pub cache_dir: String,
}

/// Reference location used for first-run defaults before the user has
/// picked a point on the map
#[derive(Deserialize, Clone)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize, Clone)]
pub struct SolarApi {
    pub power_url: String,
    pub pvgis_url: String,
    pub timeout_secs: u64,
    pub fallback_psh: f64,
}

/// Sets up logging and returns the service configuration
pub fn config() -> Result<Config, UnrecoverableError> {
    setup_logging();

    let json = std::fs::read_to_string(CONFIG_PATH)?;
    let config: Config = serde_json::from_str(&json)?;

    Ok(config)
}
