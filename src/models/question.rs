// src/models/question.rs

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Represents a document in the 'questions' collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Assigned by the store on insert; absent in the packaged data set.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// The prompt text shown to the player.
    pub question: String,

    /// List of answer options (e.g., ["Option A", "Option B"]).
    pub options: Vec<String>,

    /// The correct option, verbatim.
    pub answer: String,
}
