//! Student operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A student account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Courses the student is enrolled in.
    #[serde(default)]
    pub course_ids: Vec<ResourceId>,
}

/// Payload for creating or updating a student.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub course_ids: Vec<ResourceId>,
}

/// Student operations, obtained via [`Session::students()`].
pub struct Students<'a> {
    session: &'a Session,
}

impl<'a> Students<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all students.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Student>, Error> {
        debug!("Listing students");
        self.session
            .send(ApiRequest::get(endpoints::STUDENT_GET_ALL))
            .await
    }

    /// Fetch a single student by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Student, Error> {
        self.session
            .send(ApiRequest::get(endpoints::STUDENT_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new student.
    #[instrument(skip(self, student))]
    pub async fn create(&self, student: &NewStudent) -> Result<Student, Error> {
        debug!(name = %student.name, "Creating student");
        self.session
            .send(ApiRequest::post(endpoints::STUDENT_CREATE).with_body(to_body(student)?))
            .await
    }

    /// Update an existing student.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewStudent) -> Result<Student, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::STUDENT_UPDATE).with_body(body))
            .await
    }

    /// Delete a student by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting student");
        self.session
            .send_unit(ApiRequest::delete(endpoints::STUDENT_DELETE).with_query(id_query(id)))
            .await
    }
}
