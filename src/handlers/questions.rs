// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use futures::stream::TryStreamExt;
use mongodb::{
    Database,
    bson::{doc, oid::ObjectId},
};

use crate::{error::AppError, models::question::Question, seed::QUESTIONS_COLLECTION};

/// Returns every question, in insertion order.
///
/// The quiz front-end fetches the full set once and manages its own
/// presentation and scoring, so the answer field is included.
pub async fn list_questions(
    State(database): State<Database>,
) -> Result<impl IntoResponse, AppError> {
    let collection = database.collection::<Question>(QUESTIONS_COLLECTION);

    let mut cursor = collection.find(doc! {}).await.map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let mut questions = Vec::new();
    while let Some(question) = cursor.try_next().await.map_err(|e| {
        tracing::error!("Failed to read questions cursor: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })? {
        questions.push(question);
    }

    Ok(Json(questions))
}

/// Fetches a single question by id. Malformed and unknown ids both map to 404.
pub async fn get_question(
    State(database): State<Database>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::NotFound(format!("Question {} not found", id)))?;

    let question = database
        .collection::<Question>(QUESTIONS_COLLECTION)
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

    Ok(Json(question))
}
