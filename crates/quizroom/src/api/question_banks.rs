//! Quiz question bank operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A multiple-choice question in a quiz's question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: ResourceId,
    pub quiz_id: ResourceId,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub answer_index: u32,
}

/// Payload for creating or updating a question.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub quiz_id: ResourceId,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: u32,
}

/// Question bank operations, obtained via [`Session::question_banks()`].
pub struct QuestionBanks<'a> {
    session: &'a Session,
}

impl<'a> QuestionBanks<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all questions in a quiz's bank.
    #[instrument(skip(self), fields(%quiz))]
    pub async fn list_for_quiz(&self, quiz: &ResourceId) -> Result<Vec<Question>, Error> {
        debug!("Listing quiz questions");
        self.session
            .send(
                ApiRequest::get(endpoints::QUESTION_GET_ALL)
                    .with_query(serde_json::json!({ "quizId": quiz.as_str() })),
            )
            .await
    }

    /// Fetch a single question by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Question, Error> {
        self.session
            .send(ApiRequest::get(endpoints::QUESTION_GET).with_query(id_query(id)))
            .await
    }

    /// Add a question to a quiz's bank.
    #[instrument(skip(self, question), fields(quiz = %question.quiz_id))]
    pub async fn create(&self, question: &NewQuestion) -> Result<Question, Error> {
        debug!("Creating question");
        self.session
            .send(ApiRequest::post(endpoints::QUESTION_CREATE).with_body(to_body(question)?))
            .await
    }

    /// Update an existing question.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewQuestion) -> Result<Question, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::QUESTION_UPDATE).with_body(body))
            .await
    }

    /// Delete a question by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting question");
        self.session
            .send_unit(ApiRequest::delete(endpoints::QUESTION_DELETE).with_query(id_query(id)))
            .await
    }
}
