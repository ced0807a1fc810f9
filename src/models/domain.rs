use serde::{Deserialize, Serialize};

/// Tutor profile eligible for display in the swipe stack.
///
/// Parsed from the backend row at the client boundary; raw JSON never
/// crosses into feed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, rename = "tutor_subjects")]
    pub subjects: Vec<TaughtSubject>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Candidate {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Rating with missing values treated as unrated (0.0)
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Names of the subjects this tutor teaches
    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects
            .iter()
            .filter_map(|s| s.subject.as_ref())
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// One row of the backend's `tutor_subjects` embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaughtSubject {
    pub proficiency_level: Proficiency,
    #[serde(default, rename = "subjects")]
    pub subject: Option<SubjectInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Client-side filter predicates applied on top of the server's coarse query.
///
/// Owned entirely by the discovery screen; no persistence beyond the
/// current session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub verified_only: bool,
    pub min_rating: f64,
    pub max_price: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            verified_only: false,
            min_rating: 0.0,
            max_price: 200.0,
        }
    }
}

/// Match record linking a student and a tutor after a right swipe.
///
/// Owned by the backend; the client keeps only a transient echo for the
/// "It's a match" banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub student_id: String,
    pub tutor_id: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Matched,
    Rejected,
}

/// Conversation opened for a matched pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub match_id: String,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Study plan agreed between a student and a tutor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    pub id: String,
    pub student_id: String,
    pub tutor_id: String,
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub progress: u8,
    pub status: PlanStatus,
    #[serde(default)]
    pub due_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl StudyPlan {
    pub fn is_active(&self) -> bool {
        self.status == PlanStatus::Active
    }

    /// Completion fraction clamped to [0, 1]
    pub fn completion(&self) -> f64 {
        f64::from(self.progress.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Completed,
    Paused,
}

/// Scheduled tutoring session under a study plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub study_plan_id: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    #[serde(default)]
    pub location: Option<String>,
    pub status: SessionStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Session {
    pub fn ends_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.scheduled_at + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Two sessions overlap when their scheduled windows intersect
    pub fn overlaps(&self, other: &Session) -> bool {
        self.scheduled_at < other.ends_at() && other.scheduled_at < self.ends_at()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Video,
    InPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}
