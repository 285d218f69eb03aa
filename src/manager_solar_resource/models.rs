use std::collections::HashMap;
use serde::Deserialize;

/// NASA POWER climatology point response, reduced to the one parameter
/// this service requests. Keys of the inner map are two-digit month
/// numbers plus an "ANN" annual aggregate.
#[derive(Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Deserialize)]
pub struct PowerProperties {
    pub parameter: PowerParameter,
}

#[derive(Deserialize)]
pub struct PowerParameter {
    #[serde(rename = "ALLSKY_SFC_SW_DWN")]
    pub ghi: HashMap<String, f64>,
}

/// PVGIS response, reduced to the fixed-mount monthly daily-energy list
#[derive(Deserialize)]
pub struct PvgisResponse {
    pub outputs: PvgisOutputs,
}

#[derive(Deserialize)]
pub struct PvgisOutputs {
    pub monthly: PvgisMonthly,
}

#[derive(Deserialize)]
pub struct PvgisMonthly {
    pub fixed: PvgisFixed,
}

#[derive(Deserialize)]
pub struct PvgisFixed {
    #[serde(rename = "E_d")]
    pub e_d: Vec<f64>,
}
