//! Quiz/course category operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{body_with_id, endpoints, id_query};

/// A category grouping courses and quizzes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Category operations, obtained via [`Session::categories()`].
pub struct Categories<'a> {
    session: &'a Session,
}

impl<'a> Categories<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all categories.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        debug!("Listing categories");
        self.session
            .send(ApiRequest::get(endpoints::CATEGORY_GET_ALL))
            .await
    }

    /// Fetch a single category by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<Category, Error> {
        self.session
            .send(ApiRequest::get(endpoints::CATEGORY_GET).with_query(id_query(id)))
            .await
    }

    /// Create a new category.
    #[instrument(skip(self, category))]
    pub async fn create(&self, category: &NewCategory) -> Result<Category, Error> {
        debug!(name = %category.name, "Creating category");
        self.session
            .send(ApiRequest::post(endpoints::CATEGORY_CREATE).with_body(to_body(category)?))
            .await
    }

    /// Update an existing category.
    #[instrument(skip(self, changes), fields(%id))]
    pub async fn update(&self, id: &ResourceId, changes: &NewCategory) -> Result<Category, Error> {
        let body = body_with_id(to_body(changes)?, id);
        self.session
            .send(ApiRequest::post(endpoints::CATEGORY_UPDATE).with_body(body))
            .await
    }

    /// Delete a category by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting category");
        self.session
            .send_unit(ApiRequest::delete(endpoints::CATEGORY_DELETE).with_query(id_query(id)))
            .await
    }
}
