use std::env;

use clap::{CommandFactory, Parser};

use crate::error::{EmbassyError, Result};

pub const MONGO_URI: &str = "MONGO_URI";
pub const MONGO_DB: &str = "MONGO_DB";
pub const MONGO_COLLECTION: &str = "MONGO_COLLECTION";

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape an embassy listing into MongoDB", long_about = None)]
pub struct Args {
    /// The country where the embassy is located
    #[arg(long, default_value = "")]
    pub home: String,

    /// The country represented by the embassy
    #[arg(long, default_value = "")]
    pub host: String,
}

/// Help text listing both flags, printed when validation rejects them.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// A validated home/host pair, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPair {
    home: String,
    host: String,
}

impl CountryPair {
    pub fn new(home: impl Into<String>, host: impl Into<String>) -> Result<Self> {
        let home = home.into();
        let host = host.into();

        if home.is_empty() || host.is_empty() {
            return Err(EmbassyError::MissingCountry);
        }

        if home == host {
            return Err(EmbassyError::SameCountry);
        }

        Ok(Self { home, host })
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl TryFrom<Args> for CountryPair {
    type Error = EmbassyError;

    fn try_from(args: Args) -> Result<Self> {
        Self::new(args.home, args.host)
    }
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(EmbassyError::MissingEnv(name))
        };

        Ok(Self {
            uri: required(MONGO_URI)?,
            database: required(MONGO_DB)?,
            collection: required(MONGO_COLLECTION)?,
        })
    }
}
