pub mod city;
pub mod config;
pub mod error;
pub mod loader;
pub mod record;
pub mod scraper;
pub mod store;

pub use city::derive_city;
pub use config::{Args, CountryPair, StoreConfig};
pub use error::{EmbassyError, Result};
pub use loader::load;
pub use record::EmbassyRecord;
pub use scraper::{build_records, extract_listing, Listing, Scraper};
pub use store::{EmbassyStore, MongoStore};
