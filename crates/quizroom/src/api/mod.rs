//! Typed backend resource operations.
//!
//! Each admin screen of the platform maps to one resource module here:
//! categories, courses, students, teachers, quizzes, question banks,
//! online quizzes, and essay exams. Operations are reached through
//! accessor methods on [`Session`](crate::Session) and all flow through
//! the authenticated request pipeline.

pub(crate) mod endpoints;

mod categories;
mod courses;
mod essay_exams;
mod online_quizzes;
mod question_banks;
mod quizzes;
mod students;
mod teachers;

pub use categories::{Categories, Category, NewCategory};
pub use courses::{Course, Courses, NewCourse};
pub use essay_exams::{EssayExam, EssayExams, NewEssayExam};
pub use online_quizzes::{NewOnlineQuiz, OnlineQuiz, OnlineQuizStatus, OnlineQuizzes};
pub use question_banks::{NewQuestion, Question, QuestionBanks};
pub use quizzes::{NewQuiz, Quiz, Quizzes};
pub use students::{NewStudent, Student, Students};
pub use teachers::{NewTeacher, Teacher, Teachers};

use serde_json::Value;

use crate::types::ResourceId;

/// Merge a resource id into an update payload.
///
/// Update endpoints expect the id inside the body next to the changed
/// fields.
pub(crate) fn body_with_id(mut body: Value, id: &ResourceId) -> Value {
    if let Value::Object(ref mut map) = body {
        map.insert("id".to_string(), Value::String(id.as_str().to_string()));
    }
    body
}

/// Query string selecting a single resource by id.
pub(crate) fn id_query(id: &ResourceId) -> Value {
    serde_json::json!({ "id": id.as_str() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_with_id_inserts_id() {
        let id = ResourceId::new("c1").unwrap();
        let body = body_with_id(json!({"name": "Algebra"}), &id);
        assert_eq!(body, json!({"id": "c1", "name": "Algebra"}));
    }

    #[test]
    fn id_query_shape() {
        let id = ResourceId::new("s9").unwrap();
        assert_eq!(id_query(&id), json!({"id": "s9"}));
    }
}
