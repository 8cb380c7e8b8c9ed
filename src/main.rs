mod config;
mod handlers;
mod models;
mod utils;
mod db;
mod errors;

use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use log::{info, warn};
use env_logger::Env;
use actix_web::middleware::Logger;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use crate::config::{Config, StorageBackend};
use crate::db::{ActivityStore, MemoryActivityStore, PgActivityStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load configuration
    let config = Config::from_env().map_err(io::Error::other)?;

    // The Postgres store is kept separately so its pool can be closed on shutdown
    let pg_store = match config.storage_backend {
        StorageBackend::Postgres => Some(Arc::new(
            PgActivityStore::connect(&config.database_url)
                .await
                .map_err(io::Error::other)?,
        )),
        StorageBackend::Memory => {
            warn!("Using in-memory storage, activities will not survive a restart");
            None
        }
    };
    let store: Arc<dyn ActivityStore> = match &pg_store {
        Some(pg) => pg.clone() as Arc<dyn ActivityStore>,
        None => Arc::new(MemoryActivityStore::new()),
    };

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "activity_tracker".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(io::Error::other)?;

    let bind_address = config.bind_address();
    info!("Server is running on {}:{}", bind_address.0, bind_address.1);

    // Start the HTTP server
    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(prometheus.clone()) // Prometheus metrics middleware
            .wrap(handlers::cors(&cors_origin)) // Single-origin CORS
            .wrap(Logger::default()) // Logging middleware
            .app_data(web::Data::from(store.clone())) // Activity store
            .configure(handlers::configure)
    })
    .workers(config.workers)
    .bind(bind_address)?
    .run()
    .await?;

    // Release the database pool once the server has stopped
    if let Some(pg) = pg_store {
        pg.close().await;
    }
    info!("Server stopped");
    Ok(())
}
