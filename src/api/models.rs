//! Wire models for the SurveyX REST API
//!
//! The backend serializes entities with camelCase field names and zone-less
//! `LocalDateTime` timestamps, so everything here renames accordingly and
//! uses `NaiveDateTime`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Survey lifecycle status. The backend creates surveys as `draft`;
/// publishing transitions them to `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Active,
    Closed,
}

impl SurveyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SurveyStatus::Draft => "Draft",
            SurveyStatus::Active => "Active",
            SurveyStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    MultipleChoice,
    Rating,
    Dropdown,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Text => "Text",
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::Rating => "Rating",
            QuestionType::Dropdown => "Dropdown",
        }
    }

    /// Choice-bearing types carry an answer-options list.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::Dropdown)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub survey_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: SurveyStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub expires_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub survey_link: Option<String>,
    #[serde(default)]
    pub response_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub answer_options: Option<Vec<String>>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn default_required() -> bool {
    true
}

impl Question {
    pub fn options(&self) -> &[String] {
        self.answer_options.as_deref().unwrap_or(&[])
    }
}

/// One flat response row as returned by `GET /api/responses/survey/{id}`.
/// `respondent_id` is absent for anonymous submissions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRow {
    pub response_id: i64,
    #[serde(default)]
    pub respondent_id: Option<String>,
    pub question: QuestionRef,
    #[serde(default)]
    pub answer_text: String,
    pub submitted_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRef {
    pub question_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRef {
    pub survey_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: i64,
}

/// Body for survey create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyUpsert {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDateTime>,
    pub creator: UserRef,
}

/// Body for question create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpsert {
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_options: Option<Vec<String>>,
    pub required: bool,
    pub survey: SurveyRef,
}

/// One item of the response batch posted by a respondent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResponse {
    pub question: QuestionRef,
    pub survey: SurveyRef,
    pub answer_text: String,
}

/// Payload of the public shareable-link endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicSurvey {
    pub survey: Survey,
    pub questions: Vec<Question>,
}

/// Analytics record; `insights` is a JSON-encoded string produced
/// server-side and parsed by [`crate::view::insights`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRecord {
    pub analytics_id: i64,
    #[serde(default)]
    pub analysis_summary: Option<String>,
    #[serde(default)]
    pub insights: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_deserializes_backend_shape() {
        let raw = r#"{
            "surveyId": 3,
            "creator": {"userId": 1, "username": "alice"},
            "title": "Customer feedback",
            "description": null,
            "createdAt": "2024-01-15T10:30:00",
            "expiresAt": null,
            "surveyLink": "a1b2c3",
            "status": "active",
            "responseCount": 12,
            "updatedAt": "2024-01-16T08:00:00"
        }"#;
        let survey: Survey = serde_json::from_str(raw).unwrap();
        assert_eq!(survey.survey_id, 3);
        assert_eq!(survey.status, SurveyStatus::Active);
        assert_eq!(survey.survey_link.as_deref(), Some("a1b2c3"));
        assert_eq!(survey.response_count, 12);
        assert!(survey.description.is_none());
    }

    #[test]
    fn survey_status_defaults_to_draft() {
        let raw = r#"{"surveyId": 1, "title": "t"}"#;
        let survey: Survey = serde_json::from_str(raw).unwrap();
        assert_eq!(survey.status, SurveyStatus::Draft);
        assert_eq!(survey.response_count, 0);
    }

    #[test]
    fn question_types_use_snake_case_wire_values() {
        let raw = r#"{
            "questionId": 10,
            "questionText": "How did you hear about us?",
            "questionType": "multiple_choice",
            "answerOptions": ["Web", "Friend"],
            "required": true
        }"#;
        let question: Question = serde_json::from_str(raw).unwrap();
        assert_eq!(question.question_type, QuestionType::MultipleChoice);
        assert!(question.question_type.is_choice());
        assert_eq!(question.options(), ["Web", "Friend"]);
    }

    #[test]
    fn response_row_tolerates_null_respondent_and_nested_question() {
        let raw = r#"{
            "responseId": 55,
            "survey": {"surveyId": 3, "title": "t"},
            "respondentId": null,
            "question": {"questionId": 10, "questionText": "Q", "questionType": "text"},
            "answerText": "yes",
            "submittedAt": "2024-02-01T09:15:00"
        }"#;
        let row: ResponseRow = serde_json::from_str(raw).unwrap();
        assert!(row.respondent_id.is_none());
        assert_eq!(row.question.question_id, 10);
        assert_eq!(row.answer_text, "yes");
    }

    #[test]
    fn response_batch_serializes_nested_refs() {
        let item = NewResponse {
            question: QuestionRef { question_id: 10 },
            survey: SurveyRef { survey_id: 3 },
            answer_text: "maybe".to_string(),
        };
        let raw = serde_json::to_value(&item).unwrap();
        assert_eq!(raw["question"]["questionId"], 10);
        assert_eq!(raw["survey"]["surveyId"], 3);
        assert_eq!(raw["answerText"], "maybe");
    }

    #[test]
    fn login_response_shape() {
        let raw = r#"{"id": 7, "username": "alice", "email": "a@b.c", "token": "jwt", "type": "Bearer"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.id, 7);
        assert_eq!(response.token, "jwt");
    }
}
