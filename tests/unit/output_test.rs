//! Tests for output conversions and JSON shape

use qna::models::{Answer, DeleteHistory, QuestionId, UserId};
use qna::ports::QuestionRepository;
use qna::output::{
    AnswerInfo, HistoryInfo, OperationResult, OutputMode, QuestionInfo, UserInfo,
};

use super::common::Fixture;

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_user_info_omits_password() {
    let f = Fixture::new();
    let info = UserInfo::from(&f.user);
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["user_id"], "javajigi");
    assert_eq!(json["email"], "javajigi@slipp.net");
    assert!(json.get("password").is_none());
}

#[test]
fn test_question_info_counts_answers() {
    let f = Fixture::new();
    let question = f.db.questions().find_by_id(f.question.id.unwrap()).unwrap().unwrap();

    let info = QuestionInfo::from(&question);
    assert_eq!(info.id, Some(f.question.id.unwrap().get()));
    assert_eq!(info.answer_count, 1);
    assert!(!info.deleted);
}

#[test]
fn test_answer_info_fields() {
    let f = Fixture::new();
    let mut answer: Answer = f.answer.clone();
    answer.delete(&f.user).unwrap();

    let info = AnswerInfo::from(&answer);
    assert!(info.deleted);
    assert_eq!(info.contents, "Answers Contents1");
    assert_eq!(info.question_id, f.question.id.unwrap().get());
}

#[test]
fn test_history_info_json() {
    let history = DeleteHistory::for_question(QuestionId(4), UserId(1));
    let json = serde_json::to_value(HistoryInfo::from(&history)).unwrap();

    assert_eq!(json["content_type"], "question");
    assert_eq!(json["content_id"], 4);
    assert_eq!(json["deleted_by"], 1);
}

#[test]
fn test_operation_result_skips_missing_id() {
    let json = serde_json::to_value(OperationResult::ok("done", None)).unwrap();
    assert_eq!(json["success"], true);
    assert!(json.get("id").is_none());

    let json = serde_json::to_value(OperationResult::ok("done", Some(3))).unwrap();
    assert_eq!(json["id"], 3);
}
