use serde::{Deserialize, Serialize};

/// One embassy entry scraped from a listing page, stored as a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbassyRecord {
    pub home_country: String,
    pub host_country: String,
    pub name: String,
    pub map_link: String,
    pub city: String,
}
