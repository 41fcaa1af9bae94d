//! Response aggregation
//!
//! Turns the flat response rows of a survey into a respondent-indexed matrix
//! for tabular display. Grouping only runs once both the response set and the
//! question set are loaded; callers render an explicit empty state otherwise.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::api::models::{Question, ResponseRow};

/// Key used for responses submitted without a respondent id.
pub const ANONYMOUS_RESPONDENT: &str = "anonymous";

/// All answers submitted by one respondent to one survey.
///
/// `submitted_at` is taken from the first-seen response of the respondent in
/// input order. `answers` may hold entries for question ids that are no
/// longer part of the survey; the renderer iterates known questions, so such
/// answers are retained here but never displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct RespondentGroup {
    pub respondent: String,
    pub submitted_at: NaiveDateTime,
    pub answers: HashMap<i64, String>,
}

impl RespondentGroup {
    pub fn is_anonymous(&self) -> bool {
        self.respondent == ANONYMOUS_RESPONDENT
    }

    pub fn display_name(&self) -> &str {
        if self.is_anonymous() {
            "Anonymous"
        } else {
            &self.respondent
        }
    }

    /// Answer text for one question, `-` when the respondent skipped it.
    pub fn answer_for(&self, question_id: i64) -> &str {
        self.answers
            .get(&question_id)
            .map(String::as_str)
            .unwrap_or("-")
    }
}

/// Group responses by respondent, newest submission first.
///
/// Every response lands in exactly one group. A later response for the same
/// (respondent, question) pair silently overwrites the earlier answer. Ties
/// in `submitted_at` keep first-seen respondent order (the sort is stable).
pub fn group_responses(responses: &[ResponseRow], questions: &[Question]) -> Vec<RespondentGroup> {
    if responses.is_empty() || questions.is_empty() {
        return Vec::new();
    }

    let mut by_respondent: HashMap<String, RespondentGroup> = HashMap::new();
    let mut seen_order: Vec<String> = Vec::new();

    for response in responses {
        let key = response
            .respondent_id
            .clone()
            .unwrap_or_else(|| ANONYMOUS_RESPONDENT.to_string());

        let group = by_respondent.entry(key.clone()).or_insert_with(|| {
            seen_order.push(key.clone());
            RespondentGroup {
                respondent: key.clone(),
                submitted_at: response.submitted_at,
                answers: HashMap::new(),
            }
        });

        group
            .answers
            .insert(response.question.question_id, response.answer_text.clone());
    }

    let mut groups: Vec<RespondentGroup> = seen_order
        .into_iter()
        .filter_map(|key| by_respondent.remove(&key))
        .collect();
    groups.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    groups
}
