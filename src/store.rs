use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{EmbassyError, Result};
use crate::record::EmbassyRecord;

/// Destination for scraped records.
#[async_trait]
pub trait EmbassyStore: Send + Sync {
    async fn insert(&self, record: &EmbassyRecord) -> Result<()>;
}

pub struct MongoStore {
    collection: Collection<EmbassyRecord>,
}

impl MongoStore {
    /// Opens the client and pings the deployment.
    ///
    /// Both a bad connection string and a failed ping come back as
    /// [`EmbassyError::StoreUnavailable`].
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|err| EmbassyError::StoreUnavailable(err.to_string()))?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)
            .map_err(|err| EmbassyError::StoreUnavailable(err.to_string()))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|err| EmbassyError::StoreUnavailable(err.to_string()))?;

        info!(
            "Connected to MongoDB, using {}.{}",
            config.database, config.collection
        );

        let collection = client
            .database(&config.database)
            .collection::<EmbassyRecord>(&config.collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl EmbassyStore for MongoStore {
    async fn insert(&self, record: &EmbassyRecord) -> Result<()> {
        let result = self
            .collection
            .insert_one(record, None)
            .await
            .map_err(|err| EmbassyError::Insert(err.to_string()))?;

        debug!("inserted document {}", result.inserted_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_uri_is_unavailable() {
        let config = StoreConfig {
            uri: "not-a-mongo-uri".to_owned(),
            database: "visas".to_owned(),
            collection: "embassies".to_owned(),
        };

        let err = MongoStore::connect(&config).await.err().unwrap();

        assert!(matches!(err, EmbassyError::StoreUnavailable(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
