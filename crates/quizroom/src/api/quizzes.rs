//! Quiz operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A quiz definition: a titled set of questions attached to a course.
///
/// The questions themselves live in the question bank
/// (see [`QuestionBanks`](crate::api::QuestionBanks)); a quiz references
/// them by its own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub course_id: Option<ResourceId>,
    /// Time limit in minutes; `None` means untimed.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub question_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for creating or updating a quiz.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// Quiz operations, obtained via [`Session::quizzes()`].
pub struct Quizzes<'a> {
    session: &'a Session,
}

impl<'a> Quizzes<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all quizzes.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Quiz>, Error> {
        debug!("Listing quizzes");
        self.session
            .send(ApiRequest::get(endpoints::QUIZ_GET_ALL))
            .await
    }

    /// Fetch all quizzes belonging to a course.
    #[instrument(skip(self), fields(%course))]
    pub async fn list_by_course(&self, course: &ResourceId) -> Result<Vec<Quiz>, Error> {
        debug!("Listing quizzes by course");
        self.session
            .send(
                ApiRequest::get(endpoints::QUIZ_GET_ALL)
                    .with_query(serde_json::json!({ "courseId": course.as_str() })),
            )
            .await
    }

    /// Fetch a single quiz by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Quiz, Error> {
        self.session
            .send(ApiRequest::get(endpoints::QUIZ_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new quiz.
    #[instrument(skip(self, quiz))]
    pub async fn create(&self, quiz: &NewQuiz) -> Result<Quiz, Error> {
        debug!(title = %quiz.title, "Creating quiz");
        self.session
            .send(ApiRequest::post(endpoints::QUIZ_CREATE).with_body(to_body(quiz)?))
            .await
    }

    /// Update an existing quiz.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewQuiz) -> Result<Quiz, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::QUIZ_UPDATE).with_body(body))
            .await
    }

    /// Delete a quiz by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting quiz");
        self.session
            .send_unit(ApiRequest::delete(endpoints::QUIZ_DELETE).with_query(id_query(id)))
            .await
    }
}
