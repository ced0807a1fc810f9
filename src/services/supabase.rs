use crate::models::{
    Candidate, Conversation, Match, MatchStatus, Message, NewMatch, NewMessage, NewSession,
    NewStudyPlan, Session, SessionUpdate, StudyPlan, StudyPlanUpdate,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the Supabase backend
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),
}

/// Supabase REST client (PostgREST conventions).
///
/// Covers every table the app touches:
/// - tutor profiles for the discovery feed
/// - matches created by right swipes
/// - conversations and messages
/// - study plans and tutoring sessions
///
/// Reads return row arrays; writes ask for `return=representation` and
/// hand back the created/updated row. No call retries on failure.
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            anon_key,
            client,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    async fn check(response: Response) -> Result<Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status.as_u16() {
            401 | 403 => Err(SupabaseError::Unauthorized),
            404 => Err(SupabaseError::NotFound(format!(
                "Resource not found: {}",
                status
            ))),
            _ => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unable to read body".to_string());
                Err(SupabaseError::ApiError(format!("{}: {}", status, body)))
            }
        }
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, SupabaseError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let response = Self::check(response).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse rows: {}", e)))
    }

    async fn insert_row<T, B>(&self, table: &str, body: &B) -> Result<T, SupabaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.rest_url(table);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        let response = Self::check(response).await?;

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse row: {}", e)))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| SupabaseError::InvalidResponse("Empty representation".into()))
    }

    async fn update_row<T, B>(&self, table: &str, id: &str, body: &B) -> Result<T, SupabaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}?id=eq.{}", self.rest_url(table), urlencoding::encode(id));

        let response = self
            .client
            .patch(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        let response = Self::check(response).await?;

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse row: {}", e)))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("No {} row with id {}", table, id)))
    }

    /// Fetch candidate tutor profiles with their taught subjects embedded.
    ///
    /// The server applies the coarse filters (role, limit); the client-side
    /// filter predicates run afterwards in `core::filters`.
    pub async fn list_tutors(&self, limit: usize) -> Result<Vec<Candidate>, SupabaseError> {
        let select = "id,first_name,last_name,university,major,bio,avatar_url,rating,hourly_rate,verified,created_at,tutor_subjects(proficiency_level,subjects(name,category))";
        let url = format!(
            "{}?select={}&role=eq.tutor&limit={}",
            self.rest_url("profiles"),
            urlencoding::encode(select),
            limit
        );

        tracing::debug!("Fetching tutors from: {}", url);

        let tutors: Vec<Candidate> = self.fetch_rows(&url).await?;

        tracing::debug!("Fetched {} tutor profiles", tutors.len());

        Ok(tutors)
    }

    /// Create a pending match row for a right swipe
    pub async fn create_match(
        &self,
        student_id: &str,
        tutor_id: &str,
    ) -> Result<Match, SupabaseError> {
        let payload = NewMatch::pending(student_id, tutor_id);
        payload.validate()?;

        let created: Match = self.insert_row("matches", &payload).await?;

        tracing::debug!(
            "Created match {}: {} -> {}",
            created.id,
            student_id,
            tutor_id
        );

        Ok(created)
    }

    /// All matches the user participates in, newest first
    pub async fn list_matches(&self, user_id: &str) -> Result<Vec<Match>, SupabaseError> {
        let or_filter = format!("(student_id.eq.{},tutor_id.eq.{})", user_id, user_id);
        let url = format!(
            "{}?select=*&or={}&order=created_at.desc",
            self.rest_url("matches"),
            urlencoding::encode(&or_filter)
        );

        self.fetch_rows(&url).await
    }

    pub async fn update_match_status(
        &self,
        match_id: &str,
        status: MatchStatus,
    ) -> Result<Match, SupabaseError> {
        self.update_row("matches", match_id, &serde_json::json!({ "status": status }))
            .await
    }

    /// Conversations for the user's matched pairs, most recently active first.
    ///
    /// Two-step read: matched match ids first, then their conversations.
    pub async fn list_conversations(
        &self,
        user_id: &str,
    ) -> Result<Vec<Conversation>, SupabaseError> {
        let matches = self.list_matches(user_id).await?;
        let matched_ids: Vec<&str> = matches
            .iter()
            .filter(|m| m.status == MatchStatus::Matched)
            .map(|m| m.id.as_str())
            .collect();

        if matched_ids.is_empty() {
            return Ok(Vec::new());
        }

        let in_filter = format!("in.({})", matched_ids.join(","));
        let url = format!(
            "{}?select=*&match_id={}&order=updated_at.desc",
            self.rest_url("conversations"),
            urlencoding::encode(&in_filter)
        );

        self.fetch_rows(&url).await
    }

    /// Messages of one conversation, oldest first
    pub async fn list_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Message>, SupabaseError> {
        let url = format!(
            "{}?select=*&conversation_id=eq.{}&order=created_at.asc",
            self.rest_url("messages"),
            urlencoding::encode(conversation_id)
        );

        self.fetch_rows(&url).await
    }

    /// Append a message and touch the conversation so inbox ordering
    /// follows the latest activity
    pub async fn send_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<Message, SupabaseError> {
        let payload = NewMessage {
            conversation_id: conversation_id.to_string(),
            sender_id: sender_id.to_string(),
            content: content.to_string(),
        };
        payload.validate()?;

        let message: Message = self.insert_row("messages", &payload).await?;

        let touch = serde_json::json!({ "updated_at": chrono::Utc::now() });
        if let Err(e) = self
            .update_row::<Conversation, _>("conversations", conversation_id, &touch)
            .await
        {
            tracing::warn!("Failed to touch conversation {}: {}", conversation_id, e);
        }

        Ok(message)
    }

    /// Study plans the user participates in, newest first
    pub async fn list_study_plans(&self, user_id: &str) -> Result<Vec<StudyPlan>, SupabaseError> {
        let or_filter = format!("(student_id.eq.{},tutor_id.eq.{})", user_id, user_id);
        let url = format!(
            "{}?select=*&or={}&order=created_at.desc",
            self.rest_url("study_plans"),
            urlencoding::encode(&or_filter)
        );

        self.fetch_rows(&url).await
    }

    pub async fn create_study_plan(&self, plan: &NewStudyPlan) -> Result<StudyPlan, SupabaseError> {
        plan.validate()?;
        self.insert_row("study_plans", plan).await
    }

    pub async fn update_study_plan(
        &self,
        plan_id: &str,
        update: &StudyPlanUpdate,
    ) -> Result<StudyPlan, SupabaseError> {
        update.validate()?;
        self.update_row("study_plans", plan_id, update).await
    }

    /// Sessions under the user's study plans, soonest first
    pub async fn list_sessions(&self, user_id: &str) -> Result<Vec<Session>, SupabaseError> {
        let plans = self.list_study_plans(user_id).await?;
        if plans.is_empty() {
            return Ok(Vec::new());
        }

        let plan_ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        let in_filter = format!("in.({})", plan_ids.join(","));
        let url = format!(
            "{}?select=*&study_plan_id={}&order=scheduled_at.asc",
            self.rest_url("sessions"),
            urlencoding::encode(&in_filter)
        );

        self.fetch_rows(&url).await
    }

    pub async fn create_session(&self, session: &NewSession) -> Result<Session, SupabaseError> {
        session.validate()?;
        self.insert_row("sessions", session).await
    }

    pub async fn update_session(
        &self,
        session_id: &str,
        update: &SessionUpdate,
    ) -> Result<Session, SupabaseError> {
        update.validate()?;
        self.update_row("sessions", session_id, update).await
    }
}
