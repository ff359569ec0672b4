//! Teacher operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A teacher account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Payload for creating or updating a teacher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Teacher operations, obtained via [`Session::teachers()`].
pub struct Teachers<'a> {
    session: &'a Session,
}

impl<'a> Teachers<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all teachers.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Teacher>, Error> {
        debug!("Listing teachers");
        self.session
            .send(ApiRequest::get(endpoints::TEACHER_GET_ALL))
            .await
    }

    /// Fetch a single teacher by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Teacher, Error> {
        self.session
            .send(ApiRequest::get(endpoints::TEACHER_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new teacher.
    #[instrument(skip(self, teacher))]
    pub async fn create(&self, teacher: &NewTeacher) -> Result<Teacher, Error> {
        debug!(name = %teacher.name, "Creating teacher");
        self.session
            .send(ApiRequest::post(endpoints::TEACHER_CREATE).with_body(to_body(teacher)?))
            .await
    }

    /// Update an existing teacher.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewTeacher) -> Result<Teacher, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::TEACHER_UPDATE).with_body(body))
            .await
    }

    /// Delete a teacher by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting teacher");
        self.session
            .send_unit(ApiRequest::delete(endpoints::TEACHER_DELETE).with_query(id_query(id)))
            .await
    }
}
