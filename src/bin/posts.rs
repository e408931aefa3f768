use clap::Parser;
use log::info;
use roa_posts::{bind, Config, StdError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    pretty_env_logger::init();
    let config = Config::parse();
    info!("Opening database {}", config.database_url);
    let server = bind(&config, &|addr| info!("Server is listening on {}", addr))?;
    server.await.map_err(|e| e as Box<dyn StdError>)?;
    Ok(())
}
