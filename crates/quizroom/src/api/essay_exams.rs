//! Essay exam operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A free-form written exam attached to a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayExam {
    pub id: ResourceId,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub course_id: Option<ResourceId>,
    #[serde(default)]
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for creating or updating an essay exam.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEssayExam {
    pub title: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Essay exam operations, obtained via [`Session::essay_exams()`].
pub struct EssayExams<'a> {
    session: &'a Session,
}

impl<'a> EssayExams<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all essay exams.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<EssayExam>, Error> {
        debug!("Listing essay exams");
        self.session
            .send(ApiRequest::get(endpoints::ESSAY_EXAM_GET_ALL))
            .await
    }

    /// Fetch a single essay exam by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<EssayExam, Error> {
        self.session
            .send(ApiRequest::get(endpoints::ESSAY_EXAM_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new essay exam.
    #[instrument(skip(self, exam))]
    pub async fn create(&self, exam: &NewEssayExam) -> Result<EssayExam, Error> {
        debug!(title = %exam.title, "Creating essay exam");
        self.session
            .send(ApiRequest::post(endpoints::ESSAY_EXAM_CREATE).with_body(to_body(exam)?))
            .await
    }

    /// Update an existing essay exam.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewEssayExam) -> Result<EssayExam, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::ESSAY_EXAM_UPDATE).with_body(body))
            .await
    }

    /// Delete an essay exam by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting essay exam");
        self.session
            .send_unit(ApiRequest::delete(endpoints::ESSAY_EXAM_DELETE).with_query(id_query(id)))
            .await
    }
}
