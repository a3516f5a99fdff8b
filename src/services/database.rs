use crate::error::AppError;
use crate::models::Task;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct TodoDb {
    client: MongoClient,
    db: Database,
}

impl TodoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn tasks(&self) -> Collection<Task> {
        self.db.collection("tasks")
    }

    /// All tasks in the collection, in the driver's natural order.
    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        let cursor = self.tasks().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn insert(&self, task: &Task) -> Result<(), AppError> {
        self.tasks().insert_one(task, None).await?;
        Ok(())
    }

    /// Sets the completion flag and returns the post-update document,
    /// or `None` when no document matched the identifier.
    pub async fn set_completed(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<Option<Task>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .tasks()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "isCompleted": completed } },
                options,
            )
            .await?;
        Ok(updated)
    }

    /// Deletes by identifier. Deleting an unknown identifier is a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.tasks().delete_one(doc! { "_id": id }, None).await?;
        Ok(())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
