use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::config::Config;
use crate::models::Item;
use crate::store::ItemStore;

/// Collection every handler reads and writes.
pub const ITEMS_COLLECTION: &str = "items";

/// MongoDB-backed item store
///
/// Cheap to clone: the driver's `Database` and `Collection` share one
/// connection pool internally.
#[derive(Clone)]
pub struct MongoItemStore {
    database: Database,
    items: Collection<Item>,
}

impl MongoItemStore {
    /// Connect to the configured database and verify it answers a `ping`.
    ///
    /// Creating a driver client does not open a connection by itself, so the
    /// ping is what actually proves the server is reachable.
    pub async fn connect(config: &Config) -> Result<Self> {
        tracing::info!("Connecting to MongoDB at: {}", config.mongo_uri);

        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;
        let database = client.database(&config.mongo_database);
        let store = Self::with_collection(database, ITEMS_COLLECTION);

        store.ping().await?;

        tracing::info!(
            "Successfully connected to MongoDB database: {}",
            config.mongo_database
        );
        Ok(store)
    }

    /// Wrap an existing database handle, targeting `collection`.
    pub fn with_collection(database: Database, collection: &str) -> Self {
        let items = database.collection::<Item>(collection);
        Self { database, items }
    }

    fn by_name(name: &str) -> Document {
        doc! { "name": name }
    }

    async fn collect(&self, filter: Document) -> Result<Vec<Item>> {
        let cursor = self
            .items
            .find(filter)
            .await
            .context("Failed to query items")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read items from cursor")
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn insert(&self, item: Item) -> Result<()> {
        self.items
            .insert_one(&item)
            .await
            .context("Failed to insert item into MongoDB")?;

        tracing::debug!("Inserted item with name: {}", item.name);
        Ok(())
    }

    async fn delete_one(&self, name: &str) -> Result<u64> {
        let result = self
            .items
            .delete_one(Self::by_name(name))
            .await
            .context("Failed to delete item from MongoDB")?;

        tracing::debug!("Deleted {} item(s) with name: {}", result.deleted_count, name);
        Ok(result.deleted_count)
    }

    async fn update_one(&self, name: &str, replacement: Item) -> Result<u64> {
        let update = doc! {
            "$set": {
                "name": replacement.name.as_str(),
                "description": replacement.description.as_str(),
            }
        };

        let result = self
            .items
            .update_one(Self::by_name(name), update)
            .await
            .context("Failed to update item in MongoDB")?;

        tracing::debug!(
            "Updated {} item(s) with name: {} -> {}",
            result.matched_count,
            name,
            replacement.name
        );
        Ok(result.matched_count)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>> {
        let items = self.collect(Self::by_name(name)).await?;
        tracing::debug!("Found {} item(s) with name: {}", items.len(), name);
        Ok(items)
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        let items = self.collect(doc! {}).await?;
        tracing::debug!("Listed {} item(s)", items.len());
        Ok(items)
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB")?;

        tracing::debug!("Ping succeeded");
        Ok(())
    }
}
