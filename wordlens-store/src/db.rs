//! MongoDB access for translation records

use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use wordlens_common::TranslationRecord;

use crate::config::Config;

pub struct TranslationStore {
    db: Database,
    collection: Collection<TranslationRecord>,
}

impl TranslationStore {
    /// Build a store handle. The driver connects lazily, so this only
    /// fails on a malformed connection string; use [`ping`](Self::ping)
    /// to verify reachability.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let db = client.database(&config.database);
        let collection = db.collection::<TranslationRecord>(&config.collection);
        Ok(Self { db, collection })
    }

    /// Round-trip to the server to verify the connection
    pub async fn ping(&self) -> anyhow::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub async fn insert(&self, record: TranslationRecord) -> anyhow::Result<()> {
        self.collection.insert_one(record).await?;
        Ok(())
    }
}
