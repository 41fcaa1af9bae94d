//! Integration tests for the response aggregation and analytics display
//! pipeline: grouping laws, insights parsing, and draft validation working
//! against the wire models.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

use surveyx_cli::api::models::{Question, QuestionRef, QuestionType, ResponseRow};
use surveyx_cli::view::aggregate::{ANONYMOUS_RESPONDENT, group_responses};
use surveyx_cli::view::forms::SurveyDraft;
use surveyx_cli::view::insights::Insights;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn response(
    id: i64,
    respondent: Option<&str>,
    question_id: i64,
    answer: &str,
    submitted_at: NaiveDateTime,
) -> ResponseRow {
    ResponseRow {
        response_id: id,
        respondent_id: respondent.map(String::from),
        question: QuestionRef { question_id },
        answer_text: answer.to_string(),
        submitted_at,
    }
}

fn question(id: i64, text: &str) -> Question {
    Question {
        question_id: id,
        question_text: text.to_string(),
        question_type: QuestionType::Text,
        answer_options: None,
        required: true,
        created_at: None,
    }
}

/// The number of groups equals the number of distinct respondent keys,
/// including the anonymous sentinel, and every response is accounted for.
#[test]
fn grouping_partitions_by_distinct_respondent_key() {
    let responses = vec![
        response(1, Some("u1"), 10, "a", at(1, 9)),
        response(2, Some("u2"), 10, "b", at(1, 9)),
        response(3, None, 10, "c", at(1, 9)),
        response(4, None, 11, "d", at(1, 9)),
        response(5, Some("u1"), 11, "e", at(1, 9)),
    ];
    let questions = vec![question(10, "Q10"), question(11, "Q11")];

    let groups = group_responses(&responses, &questions);

    let distinct: HashSet<String> = responses
        .iter()
        .map(|r| {
            r.respondent_id
                .clone()
                .unwrap_or_else(|| ANONYMOUS_RESPONDENT.to_string())
        })
        .collect();
    assert_eq!(groups.len(), distinct.len());

    let total_answers: usize = groups.iter().map(|g| g.answers.len()).sum();
    assert_eq!(total_answers, responses.len());
}

/// The documented three-row scenario: an anonymous respondent submitting
/// later sorts above an identified one, and answers land per question.
#[test]
fn mixed_anonymous_scenario_matches_expected_matrix() {
    let t1 = at(1, 9);
    let t2 = at(2, 9);
    let responses = vec![
        response(1, Some("u1"), 10, "yes", t1),
        response(2, Some("u1"), 11, "no", t1),
        response(3, None, 10, "maybe", t2),
    ];
    let questions = vec![question(10, "Q10"), question(11, "Q11")];

    let groups = group_responses(&responses, &questions);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].respondent, ANONYMOUS_RESPONDENT);
    assert_eq!(groups[0].answer_for(10), "maybe");
    assert_eq!(groups[0].answer_for(11), "-");

    assert_eq!(groups[1].respondent, "u1");
    assert_eq!(groups[1].answer_for(10), "yes");
    assert_eq!(groups[1].answer_for(11), "no");
}

#[test]
fn sort_law_holds_for_all_adjacent_pairs() {
    let responses = vec![
        response(1, Some("a"), 10, "1", at(3, 8)),
        response(2, Some("b"), 10, "2", at(1, 8)),
        response(3, Some("c"), 10, "3", at(5, 8)),
        response(4, Some("d"), 10, "4", at(2, 8)),
    ];
    let groups = group_responses(&responses, &[question(10, "Q")]);

    for pair in groups.windows(2) {
        assert!(pair[0].submitted_at >= pair[1].submitted_at);
    }
}

#[test]
fn overwrite_law_keeps_the_later_answer_by_input_order() {
    let responses = vec![
        response(1, Some("u1"), 10, "first", at(2, 8)),
        response(2, Some("u1"), 10, "second", at(1, 8)),
    ];
    let groups = group_responses(&responses, &[question(10, "Q")]);

    // Input order wins, not chronology.
    assert_eq!(groups[0].answer_for(10), "second");
}

#[test]
fn empty_response_set_skips_aggregation() {
    let questions = vec![question(10, "Q")];
    assert!(group_responses(&[], &questions).is_empty());
}

#[test]
fn insights_vectors_from_the_data_contract() {
    let parsed =
        Insights::parse(Some(r#"{"question":"Q1","response_count":2,"responses":["a","b"]}"#));
    assert_eq!(parsed.question(), "Q1");
    assert_eq!(parsed.response_count(), 2);
    assert_eq!(parsed.responses(), ["a", "b"]);

    let malformed = Insights::parse(Some("not json"));
    assert!(malformed.is_malformed());
    assert_eq!(malformed.question(), "N/A");
    assert_eq!(malformed.response_count(), 0);
    assert!(malformed.responses().is_empty());
}

#[test]
fn whitespace_title_blocks_submission() {
    let draft = SurveyDraft {
        title: "   ".to_string(),
        description: None,
        expires_at: None,
    };
    let err = draft.validate().unwrap_err();
    assert_eq!(err.to_string(), "Survey title is required");
}

/// Rows straight off the wire aggregate the same as hand-built ones.
#[test]
fn aggregation_works_on_deserialized_rows() {
    let raw = r#"[
        {
            "responseId": 1,
            "respondentId": "u1",
            "question": {"questionId": 10},
            "answerText": "yes",
            "submittedAt": "2024-03-01T09:00:00"
        },
        {
            "responseId": 2,
            "respondentId": null,
            "question": {"questionId": 10},
            "answerText": "maybe",
            "submittedAt": "2024-03-02T09:00:00"
        }
    ]"#;
    let responses: Vec<ResponseRow> = serde_json::from_str(raw).unwrap();
    let groups = group_responses(&responses, &[question(10, "Q")]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].respondent, ANONYMOUS_RESPONDENT);
    assert_eq!(groups[1].respondent, "u1");
}
