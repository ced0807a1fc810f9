use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchStatus, PlanStatus, SessionKind, SessionStatus};

/// Insert payload for a match row, produced by a committed right swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMatch {
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub tutor_id: String,
    pub status: MatchStatus,
}

impl NewMatch {
    pub fn pending(student_id: impl Into<String>, tutor_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            tutor_id: tutor_id.into(),
            status: MatchStatus::Pending,
        }
    }
}

/// Insert payload for a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMessage {
    #[validate(length(min = 1))]
    pub conversation_id: String,
    #[validate(length(min = 1))]
    pub sender_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

/// Insert payload for a study plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewStudyPlan {
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub tutor_id: String,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    pub status: PlanStatus,
}

/// Partial update for a study plan; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudyPlanUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 100))]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<chrono::NaiveDate>,
}

/// Insert payload for a tutoring session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSession {
    #[validate(length(min = 1))]
    pub study_plan_id: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update for a session
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
