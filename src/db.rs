// src/db.rs

use mongodb::{Client, Database, bson::doc};
use std::time::Duration;

const MAX_RETRIES: u32 = 5;

/// Builds a client and verifies the deployment answers a ping before
/// returning, retrying a bounded number of times.
///
/// The ping is the readiness gate: nothing downstream runs against a
/// database that has not come up yet.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    let mut retry_count = 0;
    loop {
        match client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            Ok(_) => break,
            Err(e) => {
                retry_count += 1;
                if retry_count > MAX_RETRIES {
                    return Err(e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }

    tracing::info!("Database connected...");
    Ok(client)
}

/// Looks the given name up in the database's collection registry.
pub async fn collection_exists(
    database: &Database,
    name: &str,
) -> Result<bool, mongodb::error::Error> {
    let names = database.list_collection_names().await?;
    Ok(names.iter().any(|n| n == name))
}
