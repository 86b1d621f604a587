// src/seed.rs

use mongodb::Database;

use crate::{db, error::SeedError, models::question::Question};

pub const QUESTIONS_COLLECTION: &str = "questions";

/// The packaged source data set, fixed at build time.
const QUESTION_DATA: &str = include_str!("../data/python_questions.json");

/// Parses the packaged question data.
pub fn load_questions() -> Result<Vec<Question>, serde_json::Error> {
    serde_json::from_str(QUESTION_DATA)
}

/// What a completed seed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Whether a pre-existing questions collection was dropped.
    pub dropped: bool,
    /// Number of records written by the bulk insert.
    pub inserted: usize,
}

/// Replaces the questions collection with the given records.
///
/// Drops the existing collection if there is one, then writes all records in
/// a single bulk insert. Full-replace semantics: prior contents are gone for
/// good. No retry and no rollback; a failed insert can leave the collection
/// empty or absent. Assumes a single invocation at a time; there is no guard
/// against two runs racing on the same collection.
pub async fn seed_questions(
    database: &Database,
    questions: &[Question],
) -> Result<SeedOutcome, SeedError> {
    let collection = database.collection::<Question>(QUESTIONS_COLLECTION);

    // Clean the collection if it exists
    let dropped = db::collection_exists(database, QUESTIONS_COLLECTION).await?;
    if dropped {
        collection.drop().await?;
        tracing::info!("Questions collection dropped");
    }

    // Insert new data
    let result = collection.insert_many(questions).await?;

    Ok(SeedOutcome {
        dropped,
        inserted: result.inserted_ids.len(),
    })
}
