#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate log;

mod api;
mod config;
mod db;
mod dto;
mod error;
mod models;
mod repository;
mod schema;
mod services;
mod store;
mod unit_of_work;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::SocketAddr;

use self::config::{Config, Database};
use self::db::Backend;
use self::store::{postgres, MemoryStore};

async fn serve<B: Backend>(backend: B, listen_addr: SocketAddr) -> std::io::Result<()> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(backend.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(api::configure::<B>)
    })
    .bind(listen_addr)?;

    info!("Listening on {}", listen_addr);

    server.run().await
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    match config.database {
        Database::Memory => {
            warn!("Using the in-memory store; nothing will outlive this process");
            serve(MemoryStore::new(), config.listen_addr).await
        }
        Database::Postgres(ref url) => match postgres::connect(url, config.pool_size) {
            Ok(pool) => serve(pool, config.listen_addr).await,
            Err(e) => {
                error!("Failed to create database connection pool: {}", e);
                std::process::exit(1);
            }
        },
    }
}
