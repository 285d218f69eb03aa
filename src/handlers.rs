use actix_web::{get, post, web, HttpResponse, Responder};
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::fs::{read_to_string, write};
use crate::AppState;
use crate::initialization::GeoRef;
use crate::manager_economics::evaluate;
use crate::manager_forecast::forecast;
use crate::manager_geometry::area_m2;
use crate::manager_packing::pack;
use crate::manager_suitability::score;
use crate::models::{Economics, GeoPoint, Orientation, PackingResult, PanelSpec, RectSurface, MONTH_NAMES};

#[derive(Deserialize, Serialize)]
pub struct Params {
    pub lat: f64,
    pub lon: f64,
    pub roof_w: f64,
    pub roof_h: f64,
    pub clearance: f64,
    pub panel_w: f64,
    pub panel_h: f64,
    pub panel_watt: f64,
    pub orientation: Orientation,
    pub performance_ratio: f64,
    pub shading_factor: f64,
    pub tilt_deg: f64,
    pub cost_per_kw: f64,
    pub tariff: f64,
    pub subsidy_pct: f64,
    /// Area reported back by the map-drawing UI, overrides the
    /// rectangular width x height area when present
    pub roof_area_m2: Option<f64>,
}

impl Params {
    /// First-run defaults centered on the configured reference location
    fn defaults(geo: &GeoRef) -> Self {
        Self {
            lat: geo.lat,
            lon: geo.long,
            roof_w: 10.0,
            roof_h: 8.0,
            clearance: 0.4,
            panel_w: 1.1,
            panel_h: 1.75,
            panel_watt: 400.0,
            orientation: Orientation::Portrait,
            performance_ratio: 0.75,
            shading_factor: 0.1,
            tilt_deg: geo.lat.abs().round(),
            cost_per_kw: 55_000.0,
            tariff: 8.0,
            subsidy_pct: 0.0,
            roof_area_m2: None,
        }
    }
}

#[derive(Deserialize)]
pub struct PolygonRequest {
    pub points: Vec<GeoPoint>,
}

#[get("/get_estimate")]
pub async fn get_estimate(data: web::Data<AppState>, params: web::Query<Params>) -> impl Responder {
    let json = get_web_data(&data, &params).await;
    save_parameters(&data.config.files.cache_dir, &params).await;

    HttpResponse::Ok().body(json)
}

#[get("/get_start")]
pub async fn get_start(data: web::Data<AppState>) -> impl Responder {
    let params = load_parameters(&data.config.files.cache_dir, &data.config.geo_ref).await;
    let json = get_web_data(&data, &params).await;

    HttpResponse::Ok().body(json)
}

/// Planar area of a polygon drawn on the map. The drawing UI calls this
/// when a boundary is finalized and feeds the result back as roof_area_m2.
#[post("/get_area")]
pub async fn get_area(body: web::Json<PolygonRequest>) -> impl Responder {
    match area_m2(&body.points) {
        Ok(area) => HttpResponse::Ok().json(serde_json::json!({ "area_m2": round1(area) })),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

async fn load_parameters(cache_dir: &str, geo: &GeoRef) -> Params {
    let path = format!("{}parameters.json", cache_dir);

    if let Ok(json) = read_to_string(path).await {
        if let Ok(params) = serde_json::from_str(&json) {
            return params;
        }
    }

    Params::defaults(geo)
}

async fn save_parameters(cache_dir: &str, params: &Params) {
    let path = format!("{}parameters.json", cache_dir);

    match serde_json::to_string(&params) {
        Ok(json) => {
            if let Err(e) = write(path, json).await {
                warn!("failed persisting parameters: {}", e);
            }
        }
        Err(e) => warn!("failed serializing parameters: {}", e),
    }
}

/// Runs the whole estimation pipeline and returns the dashboard document
/// as json. All rounding happens here, the managers return exact values.
async fn get_web_data(state: &AppState, params: &Params) -> String {
    let surface = RectSurface { width_m: params.roof_w, height_m: params.roof_h };
    let panel = PanelSpec {
        width_m: params.panel_w,
        height_m: params.panel_h,
        wattage_w: params.panel_watt,
        orientation: params.orientation,
    };

    let packing = pack(&surface, &panel, params.clearance);
    let capacity_kw = packing.count as f64 * panel.wattage_w / 1000.0;
    let roof_area_m2 = params.roof_area_m2.unwrap_or(params.roof_w * params.roof_h);

    let (resource, resource_source) = state
        .solar
        .monthly_resource(params.lat, params.lon, &state.config.files.cache_dir)
        .await;

    let series = forecast(
        capacity_kw,
        &resource,
        params.performance_ratio,
        params.shading_factor,
        params.tilt_deg,
        params.lat,
        None,
    );

    let economics = evaluate(
        capacity_kw,
        series.annual_total_kwh,
        params.cost_per_kw,
        params.tariff,
        params.subsidy_pct,
    );

    let suitability_score = score(
        roof_area_m2,
        Some(&resource),
        params.shading_factor,
        params.tilt_deg,
        params.lat,
    );

    #[derive(Serialize)]
    pub struct Series {
        pub name: String,
        #[serde(rename(serialize = "type"))]
        pub chart_type: String,
        pub data: Vec<SeriesPoint>,
    }
    #[derive(Serialize)]
    pub struct SeriesPoint {
        pub x: &'static str,
        pub y: f64,
    }
    #[derive(Serialize)]
    struct WebData<'a> {
        params: &'a Params,
        roof_area_m2: f64,
        packing: PackingResult,
        capacity_kw: f64,
        resource_source: String,
        forecast_diagram: (Series, Series),
        annual_energy_kwh: f64,
        economics: Economics,
        suitability_score: f64,
    }

    let psh_series = Series {
        name: "PSH".to_string(),
        chart_type: "line".to_string(),
        data: MONTH_NAMES
            .iter()
            .zip(resource.values())
            .map(|(month, psh)| SeriesPoint { x: month, y: round2(*psh) })
            .collect(),
    };
    let energy_series = Series {
        name: "Energy".to_string(),
        chart_type: "bar".to_string(),
        data: series
            .monthly
            .iter()
            .map(|m| SeriesPoint { x: m.month, y: round1(m.energy_kwh) })
            .collect(),
    };

    let web_data = WebData {
        params,
        roof_area_m2: round1(roof_area_m2),
        packing,
        capacity_kw: round2(capacity_kw),
        resource_source,
        forecast_diagram: (psh_series, energy_series),
        annual_energy_kwh: round1(series.annual_total_kwh),
        economics: Economics {
            install_cost: economics.install_cost.round(),
            annual_savings: economics.annual_savings.round(),
            payback_years: round1(economics.payback_years),
        },
        suitability_score,
    };

    serde_json::to_string(&web_data).unwrap_or_else(|e| {
        warn!("failed serializing web data: {}", e);
        "{}".to_string()
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
