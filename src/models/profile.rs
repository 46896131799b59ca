use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Exam;

/// Top-level persisted user state: display name, optional contact email
/// and the ordered exam list. This is the whole document written by the
/// persistence gateway; nothing derived is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

impl UserProfile {
    pub fn exam(&self, exam_id: Uuid) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == exam_id)
    }

    pub fn exam_mut(&mut self, exam_id: Uuid) -> Option<&mut Exam> {
        self.exams.iter_mut().find(|e| e.id == exam_id)
    }
}
