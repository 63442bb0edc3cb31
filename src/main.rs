use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

mod models;
mod routes;
mod services;

use services::providers::{build_provider, ProviderConfig};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let config = ProviderConfig::from_env();
    let provider = build_provider(&config);
    println!("Itinerary provider: {}", provider.name());

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // The frontend is served from a different origin.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(provider.clone()))
            .route("/", web::get().to(routes::health::api_info))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/generate-itinerary", web::post().to(routes::itinerary::generate)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
