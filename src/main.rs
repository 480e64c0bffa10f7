use actix_web::{self, middleware::Logger, web, App, HttpServer};
use clap::Parser;
use std::sync::{Arc, LazyLock};

use crate::modules::{
    feed::{model::UploadConfig, repository_sqlite::FeedSqliteRepository, service::FeedService},
    pages::engine::PageEngine,
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[derive(Parser)]
#[command(name = "inkpot")]
struct Cli {
    /// Port of webserver, defaults to 8000
    #[arg(short = 'p', default_value_t = 8000)]
    port: u16,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let db_pool = configs::connect_database().await.map_err(std::io::Error::other)?;

    let engine = PageEngine::from_dir(&ENV.templates_dir).map_err(std::io::Error::other)?;

    let feed_repo = FeedSqliteRepository::new(db_pool);
    let upload_config =
        UploadConfig { max_file_size: ENV.max_upload_size, upload_dir: ENV.upload_dir.clone() };
    let feed_service = FeedService::new(Arc::new(feed_repo), upload_config);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), cli.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(feed_service.clone()))
            .app_data(web::Data::new(engine.clone()))
            .configure(modules::pages::route::configure)
            .configure(modules::feed::route::configure::<FeedSqliteRepository>)
            .configure(modules::statics::route::configure)
    })
    .bind((ENV.ip.as_str(), cli.port))?
    .workers(2)
    .run()
    .await
}
