//! Draft validation for surveys and questions
//!
//! Validation runs before any network call; a failure aborts the submission
//! with a user-visible message.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;

use crate::api::models::QuestionType;

#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    pub title: String,
    pub description: Option<String>,
    pub expires_at: Option<NaiveDateTime>,
}

impl SurveyDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("Survey title is required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            bail!("Question text is required");
        }
        if self.question_type.is_choice() && !self.options.iter().any(|o| !o.trim().is_empty()) {
            bail!("At least one answer option is required");
        }
        Ok(())
    }

    /// Options with blank entries dropped, as sent to the backend.
    pub fn clean_options(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| !o.trim().is_empty())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_title_is_rejected() {
        let draft = SurveyDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Survey title is required");
    }

    #[test]
    fn titled_survey_passes() {
        let draft = SurveyDraft {
            title: "Customer feedback".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_question_text_is_rejected() {
        let draft = QuestionDraft {
            text: " \t".to_string(),
            question_type: QuestionType::Text,
            options: vec![],
            required: true,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "Question text is required");
    }

    #[test]
    fn choice_question_needs_a_non_blank_option() {
        let mut draft = QuestionDraft {
            text: "Pick one".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec!["".to_string(), "  ".to_string()],
            required: true,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "At least one answer option is required");

        draft.options.push("Option A".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn rating_question_needs_no_options() {
        let draft = QuestionDraft {
            text: "Rate us".to_string(),
            question_type: QuestionType::Rating,
            options: vec![],
            required: false,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_options_are_dropped_before_submission() {
        let draft = QuestionDraft {
            text: "Pick one".to_string(),
            question_type: QuestionType::Dropdown,
            options: vec!["A".to_string(), " ".to_string(), "B".to_string(), "".to_string()],
            required: true,
        };
        assert_eq!(draft.clean_options(), ["A", "B"]);
    }
}
