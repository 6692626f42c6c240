use reqwest::Client;
use select::document::Document;
use select::node::Node;
use select::predicate::{Class, Name, Predicate};
use tracing::{debug, info, warn};

use crate::city::derive_city;
use crate::config::CountryPair;
use crate::error::{EmbassyError, Result};
use crate::record::EmbassyRecord;

pub const VISAHQ_BASE_URL: &str = "https://www.visahq.de";

/// Names and map links as they appear on a listing page, index-aligned.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    pub names: Vec<String>,
    pub map_links: Vec<String>,
}

pub struct Scraper {
    base_url: String,
    client: Client,
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(VISAHQ_BASE_URL.to_owned())
    }
}

impl Scraper {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn listing_url(&self, pair: &CountryPair) -> String {
        format!(
            "{}/en/{}/embassy/{}/",
            self.base_url.trim_end_matches('/'),
            pair.home(),
            pair.host()
        )
    }

    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Visiting {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(EmbassyError::Fetch {
                url: url.to_owned(),
                reason: format!("response status {}", response.status()),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches the listing for `pair` and builds its records.
    ///
    /// A failed fetch is logged and produces no records.
    pub async fn scrape(&self, pair: &CountryPair) -> Vec<EmbassyRecord> {
        let url = self.listing_url(pair);

        let listing = match self.fetch_page(&url).await {
            Ok(body) => extract_listing(&body),
            Err(err) => {
                warn!("Error: {}", err);
                Listing::default()
            }
        };

        build_records(pair, &listing)
    }
}

pub fn extract_listing(html: &str) -> Listing {
    let document = Document::from(html);
    let headings = document.find(Name("h2")).collect::<Vec<_>>();

    let names = headings.iter().map(heading_name).collect::<Vec<_>>();

    let scoped = headings.iter().map(entry_map_link).collect::<Vec<_>>();

    let map_links: Vec<String> = if scoped.iter().any(Option::is_some) {
        scoped.into_iter().map(Option::unwrap_or_default).collect()
    } else {
        // No heading owns a map container, so the page is flat: pair by document order.
        debug!("falling back to document-order map links");
        document
            .find(Name("div").and(Class("embassy__map")))
            .map(|container| container_link(&container))
            .collect()
    };

    debug!(
        "extracted {} names and {} map links",
        names.len(),
        map_links.len()
    );

    Listing { names, map_links }
}

fn heading_name(heading: &Node) -> String {
    heading.text().replace("\n ", "").trim().to_owned()
}

fn container_link(container: &Node) -> String {
    container
        .find(Name("a").and(Class("embassy__map-link")))
        .next()
        .and_then(|anchor| anchor.attr("href"))
        .map(|href| href.replace('\n', ""))
        .unwrap_or_default()
}

/// Looks for the map container inside the entry block of `heading`: the nearest
/// ancestor holding a map container and no other heading.
fn entry_map_link(heading: &Node) -> Option<String> {
    let mut scope = heading.parent();

    while let Some(block) = scope {
        if block.find(Name("h2")).nth(1).is_some() {
            return None;
        }

        if let Some(container) = block.find(Name("div").and(Class("embassy__map"))).next() {
            return Some(container_link(&container));
        }

        scope = block.parent();
    }

    None
}

/// Pairs the i-th name with the i-th map link.
///
/// The result always holds one slot per name; slots without a map link stay zero-valued.
pub fn build_records(pair: &CountryPair, listing: &Listing) -> Vec<EmbassyRecord> {
    let mut records = vec![EmbassyRecord::default(); listing.names.len()];

    for (i, (slot, name)) in records.iter_mut().zip(&listing.names).enumerate() {
        let Some(map_link) = listing.map_links.get(i) else {
            warn!("No map link for {:?}, leaving record {} empty", name, i);
            continue;
        };

        let city = derive_city(name).unwrap_or_else(|err| {
            warn!("Error getting city name: {}", err);
            String::new()
        });

        *slot = EmbassyRecord {
            home_country: pair.home().to_owned(),
            host_country: pair.host().to_owned(),
            name: name.clone(),
            map_link: map_link.clone(),
            city,
        };
    }

    records
}
