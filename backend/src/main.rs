use std::sync::Arc;

use anyhow::Result;
use log::info;

mod api;
mod config;
mod gateway;
mod query;
mod store;
mod utils;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::Config::from_env()?;
    let store = Arc::new(store::SnapshotStore::new());

    api::new_http_server(&config, store).await?;

    info!("shut down");
    Ok(())
}
