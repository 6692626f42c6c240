use std::process;

use clap::Parser;
use embassy_scraper::{config::usage, load, Args, CountryPair, MongoStore, Scraper, StoreConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn setup() {
    let env_result = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("embassy_scraper=info")),
        )
        .init();

    if let Err(err) = env_result {
        warn!("failed to load .env file: {}", err);
    }
}

#[tokio::main]
async fn main() {
    setup();

    let pair = match CountryPair::try_from(Args::parse()) {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", usage());
            process::exit(err.exit_code());
        }
    };

    info!("Countries: home {}, host {}", pair.home(), pair.host());

    let store = match StoreConfig::from_env() {
        Ok(config) => MongoStore::connect(&config).await,
        Err(err) => Err(err),
    };

    let store = match store {
        Ok(store) => store,
        Err(err) => {
            error!("{}", err);
            process::exit(err.exit_code());
        }
    };

    let records = Scraper::default().scrape(&pair).await;

    match load(&store, &records).await {
        Ok(count) => info!("Inserted {} embassies", count),
        Err(err) => error!("{}", err),
    }
}
