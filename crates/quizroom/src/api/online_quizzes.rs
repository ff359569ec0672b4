//! Online (live) quiz operations.
//!
//! An online quiz is a scheduled live run of a quiz. Students gather in
//! its waiting room (see [`crate::live`]) before the host starts it.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::{to_body, ApiRequest};
use crate::types::ResourceId;
use crate::Session;

use super::{endpoints, id_query};

/// Lifecycle state of an online quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineQuizStatus {
    /// Scheduled, waiting room open.
    Waiting,
    /// Currently running.
    Running,
    /// Finished or cancelled.
    Closed,
}

/// A scheduled live run of a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineQuiz {
    pub id: ResourceId,
    pub quiz_id: ResourceId,
    /// Join code students enter to reach the waiting room.
    pub pin: String,
    pub status: OnlineQuizStatus,
    #[serde(default)]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Payload for scheduling an online quiz. The backend assigns the pin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOnlineQuiz {
    pub quiz_id: ResourceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Online quiz operations, obtained via [`Session::online_quizzes()`].
///
/// Online quizzes are scheduled and torn down, never edited in place, so
/// there is no update operation.
pub struct OnlineQuizzes<'a> {
    session: &'a Session,
}

impl<'a> OnlineQuizzes<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch all online quizzes.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<OnlineQuiz>, Error> {
        debug!("Listing online quizzes");
        self.session
            .send(ApiRequest::get(endpoints::ONLINE_QUIZ_GET_ALL))
            .await
    }

    /// Fetch a single online quiz by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &ResourceId) -> Result<OnlineQuiz, Error> {
        self.session
            .send(ApiRequest::get(endpoints::ONLINE_QUIZ_GET).with_query(id_query(id)))
            .await
    }

    /// Schedule a live run of a quiz.
    #[instrument(skip(self, online_quiz), fields(quiz = %online_quiz.quiz_id))]
    pub async fn schedule(&self, online_quiz: &NewOnlineQuiz) -> Result<OnlineQuiz, Error> {
        debug!("Scheduling online quiz");
        self.session
            .send(ApiRequest::post(endpoints::ONLINE_QUIZ_CREATE).with_body(to_body(online_quiz)?))
            .await
    }

    /// Delete an online quiz by id.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &ResourceId) -> Result<(), Error> {
        debug!("Deleting online quiz");
        self.session
            .send_unit(ApiRequest::delete(endpoints::ONLINE_QUIZ_DELETE).with_query(id_query(id)))
            .await
    }
}
