//! Tests for the Q&A service

use qna::DomainError;
use qna::models::{ContentType, User};
use qna::ports::{AnswerRepository, QuestionRepository};
use qna::services::QnaService;
use qna::storage::Database;

use super::common::{RecordingHistoryRepository, javajigi, sanjigi};

fn domain_error(err: &anyhow::Error) -> &DomainError {
    err.downcast_ref::<DomainError>().expect("domain error")
}

fn register(service: &QnaService<'_>) -> (User, User) {
    (service.register_user(&javajigi()).unwrap(), service.register_user(&sanjigi()).unwrap())
}

// =============================================================================
// ASK / ANSWER
// =============================================================================

#[test]
fn test_ask_and_answer() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, sanjigi) = register(&service);

    let question = service.ask(&javajigi, "title1", "contents1").unwrap();
    let qid = question.id.unwrap();
    let answer = service.answer(&sanjigi, qid, "Answers Contents1").unwrap();

    assert_eq!(answer.question_id, qid);
    assert_eq!(service.find_question(qid).unwrap().answers, vec![answer.id.unwrap()]);
    assert_eq!(service.active_answers(qid).unwrap(), vec![answer]);
    assert_eq!(service.active_questions().unwrap().len(), 1);
}

#[test]
fn test_register_duplicate_handle_fails() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    register(&service);

    assert!(service.register_user(&javajigi()).is_err());
    assert_eq!(service.users().unwrap().len(), 2);
}

#[test]
fn test_find_unknown_user() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);

    let err = service.find_user("nobody").unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::NotFound(_)));
}

#[test]
fn test_unregistered_user_cannot_answer() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, _) = register(&service);
    let question = service.ask(&javajigi, "title1", "contents1").unwrap();

    let err = service.answer(&User::guest(), question.id.unwrap(), "x").unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::Unauthorized(_)));
}

#[test]
fn test_cannot_answer_deleted_question() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, _) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    service.delete_question(&javajigi, qid).unwrap();

    let err = service.answer(&javajigi, qid, "late").unwrap_err();
    assert!(matches!(domain_error(&err), DomainError::NotFound(_)));
}

// =============================================================================
// DELETE ANSWER
// =============================================================================

#[test]
fn test_delete_answer_scenario() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, _) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    let aid = service.answer(&javajigi, qid, "Answers Contents1").unwrap().id.unwrap();

    service.delete_answer(&javajigi, aid).unwrap();

    assert!(db.answers().find_by_id_and_deleted_false(aid).unwrap().is_none());
    let stored = db.answers().find_by_id(aid).unwrap().unwrap();
    assert!(stored.deleted);
    assert!(service.active_answers(qid).unwrap().is_empty());
}

#[test]
fn test_delete_answer_by_non_owner() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, sanjigi) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    let aid = service.answer(&javajigi, qid, "Answers Contents1").unwrap().id.unwrap();

    let err = service.delete_answer(&sanjigi, aid).unwrap_err();

    assert!(domain_error(&err).is_cannot_delete());
    assert!(!db.answers().find_by_id(aid).unwrap().unwrap().deleted);
    assert!(service.delete_histories().unwrap().is_empty());
}

// =============================================================================
// DELETE QUESTION
// =============================================================================

#[test]
fn test_delete_question_cascades() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, _) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    let a1 = service.answer(&javajigi, qid, "first").unwrap().id.unwrap();
    let a2 = service.answer(&javajigi, qid, "second").unwrap().id.unwrap();

    let histories = service.delete_question(&javajigi, qid).unwrap();

    let events: Vec<_> = histories.iter().map(|h| (h.content_type, h.content_id)).collect();
    assert_eq!(
        events,
        vec![
            (ContentType::Question, qid.get()),
            (ContentType::Answer, a1.get()),
            (ContentType::Answer, a2.get()),
        ]
    );
    assert!(db.questions().find_by_id_and_deleted_false(qid).unwrap().is_none());
    assert!(db.answers().find_by_question_id_and_deleted_false(qid).unwrap().is_empty());
    assert_eq!(db.answers().find_by_question_id(qid).unwrap().len(), 2);
    assert_eq!(service.delete_histories().unwrap().len(), 3);
}

#[test]
fn test_delete_question_with_deleted_foreign_answer() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, sanjigi) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    let foreign = service.answer(&sanjigi, qid, "theirs").unwrap().id.unwrap();
    service.delete_answer(&sanjigi, foreign).unwrap();

    let histories = service.delete_question(&javajigi, qid).unwrap();

    assert_eq!(histories.len(), 1);
    assert_eq!(service.delete_histories().unwrap().len(), 2);
}

#[test]
fn test_delete_question_by_non_owner() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, sanjigi) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();

    let err = service.delete_question(&sanjigi, qid).unwrap_err();

    assert!(domain_error(&err).is_cannot_delete());
    assert!(service.find_question(qid).is_ok());
}

#[test]
fn test_histories_go_to_configured_repository() {
    let db = Database::in_memory();
    let histories = RecordingHistoryRepository::new();
    let service = QnaService::new(
        Box::new(db.users()),
        Box::new(db.questions()),
        Box::new(db.answers()),
        Box::new(&histories),
    );
    let (javajigi, _) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    service.answer(&javajigi, qid, "first").unwrap();

    service.delete_question(&javajigi, qid).unwrap();

    assert_eq!(histories.saved().len(), 2);
    assert!(db.snapshot().unwrap().delete_histories.is_empty());
}

// =============================================================================
// MAINTENANCE
// =============================================================================

#[test]
fn test_remove_answer() {
    let db = Database::in_memory();
    let service = QnaService::with_database(&db);
    let (javajigi, _) = register(&service);
    let qid = service.ask(&javajigi, "title1", "contents1").unwrap().id.unwrap();
    let aid = service.answer(&javajigi, qid, "first").unwrap().id.unwrap();

    assert!(service.remove_answer(qid, aid).unwrap());
    assert!(!service.remove_answer(qid, aid).unwrap());
    assert!(db.answers().find_all().unwrap().is_empty());
    assert!(service.delete_histories().unwrap().is_empty());
}
