//! Course operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A course offered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Category the course is filed under.
    #[serde(default)]
    pub category_id: Option<ResourceId>,
    /// Teacher responsible for the course.
    #[serde(default)]
    pub teacher_id: Option<ResourceId>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for creating or updating a course.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<ResourceId>,
}

/// Course operations, obtained via [`Session::courses()`].
pub struct Courses<'a> {
    session: &'a Session,
}

impl<'a> Courses<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all courses.
    ///
    /// The backend returns the full list; paging, sorting, and filtering
    /// happen client-side (see [`TableState`](crate::table::TableState)).
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Course>, Error> {
        debug!("Listing courses");
        self.session
            .send(ApiRequest::get(endpoints::COURSE_GET_ALL))
            .await
    }

    /// Fetch all courses in a category.
    #[instrument(skip(self), fields(%category))]
    pub async fn list_by_category(&self, category: &ResourceId) -> Result<Vec<Course>, Error> {
        debug!("Listing courses by category");
        self.session
            .send(
                ApiRequest::get(endpoints::COURSE_GET_ALL)
                    .with_query(serde_json::json!({ "categoryId": category.as_str() })),
            )
            .await
    }

    /// Fetch a single course by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Course, Error> {
        self.session
            .send(ApiRequest::get(endpoints::COURSE_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new course.
    #[instrument(skip(self, course))]
    pub async fn create(&self, course: &NewCourse) -> Result<Course, Error> {
        debug!(name = %course.name, "Creating course");
        self.session
            .send(ApiRequest::post(endpoints::COURSE_CREATE).with_body(to_body(course)?))
            .await
    }

    /// Update an existing course.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewCourse) -> Result<Course, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::COURSE_UPDATE).with_body(body))
            .await
    }

    /// Delete a course by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting course");
        self.session
            .send_unit(ApiRequest::delete(endpoints::COURSE_DELETE).with_query(id_query(id)))
            .await
    }
}
