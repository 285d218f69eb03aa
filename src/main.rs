mod errors;
mod logging;
mod initialization;
mod handlers;
mod manager_geometry;
mod manager_packing;
mod manager_forecast;
mod manager_economics;
mod manager_suitability;
mod manager_solar_resource;
mod models;
mod cache;

use actix_web::{middleware, web, App, HttpServer};
use actix_files::Files;
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{get_area, get_estimate, get_start};
use crate::initialization::{config, Config};
use crate::manager_solar_resource::SolarResource;

struct AppState {
    pub config: Config,
    pub solar: SolarResource,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let solar = SolarResource::new(&config.solar_api)?;
    let web_data = web::Data::new(AppState { config: config.clone(), solar });

    info!("starting web server");
    HttpServer::new(move || {
        App::new()
            .app_data(web_data.clone())
            .service(get_estimate)
            .service(get_start)
            .service(get_area)
            .service(
                web::scope("")
                    .wrap(middleware::DefaultHeaders::new().add(("Cache-Control", "no-cache")))
                    .service(Files::new("/", "./static").index_file("index.html"))
            )
    })
        .bind((config.web_server.bind_address.as_str(), config.web_server.bind_port))?
        .disable_signals()
        .run()
        .await?;

    Ok(())
}
