//! Tests for storage backends

use qna::config::StorageConfig;
use qna::ports::{AnswerRepository, DeleteHistoryRepository, QuestionRepository, UserRepository};
use qna::services::QnaService;
use qna::storage::{Backend, Database};
use tempfile::TempDir;

use super::common::Fixture;

// =============================================================================
// BACKEND TESTS
// =============================================================================

#[test]
fn test_backend_from_str_memory() {
    assert_eq!("memory".parse::<Backend>().unwrap(), Backend::Memory);
    assert_eq!("mem".parse::<Backend>().unwrap(), Backend::Memory);
    assert_eq!("MEMORY".parse::<Backend>().unwrap(), Backend::Memory);
}

#[test]
fn test_backend_from_str_file() {
    assert_eq!("file".parse::<Backend>().unwrap(), Backend::File);
    assert_eq!("json".parse::<Backend>().unwrap(), Backend::File);
    assert_eq!("FILES".parse::<Backend>().unwrap(), Backend::File);
}

#[test]
fn test_backend_from_str_unknown() {
    let result = "sqlite".parse::<Backend>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown backend"));
}

#[test]
fn test_backend_default_and_display() {
    assert_eq!(Backend::default(), Backend::File);
    assert_eq!(Backend::Memory.to_string(), "memory");
    assert_eq!(Backend::File.to_string(), "file");
}

// =============================================================================
// FILE BACKEND
// =============================================================================

#[test]
fn test_file_backend_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");

    let (answer_id, question_id) = {
        let f = Fixture::with_db(Database::open(&path).unwrap());
        let mut answer = f.answer.clone();
        answer.delete(&f.user).unwrap();
        f.db.answers().save(&answer).unwrap();
        f.finish();
        (answer.id.unwrap(), f.question.id.unwrap())
    };

    let db = Database::open(&path).unwrap();
    assert_eq!(db.users().find_all().unwrap().len(), 1);
    assert!(db.answers().find_by_id_and_deleted_false(answer_id).unwrap().is_none());
    assert!(db.answers().find_by_id(answer_id).unwrap().unwrap().deleted);
    assert!(db.answers().find_by_question_id_and_deleted_false(question_id).unwrap().is_empty());
}

#[test]
fn test_unflushed_changes_are_lost() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");

    {
        let f = Fixture::with_db(Database::open(&path).unwrap());
        f.finish();
        f.add_answer(&f.user, "never flushed");
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.answers().find_all().unwrap().len(), 1);
}

#[test]
fn test_ids_continue_after_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");

    let last_id = {
        let f = Fixture::with_db(Database::open(&path).unwrap());
        f.finish();
        f.answer.id.unwrap().get()
    };

    let db = Database::open(&path).unwrap();
    let question = db.questions().find_all().unwrap().remove(0);
    let user = db.users().find_all().unwrap().remove(0);
    let answer = db
        .answers()
        .save(&qna::models::Answer::new(&user, &question, "after reopen").unwrap())
        .unwrap();
    assert_eq!(answer.id.unwrap().get(), last_id + 1);
}

#[test]
fn test_history_persisted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");

    {
        let f = Fixture::with_db(Database::open(&path).unwrap());
        let service = QnaService::with_database(&f.db);
        service.delete_question(&f.user, f.question.id.unwrap()).unwrap();
        service.flush().unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.delete_histories().find_all().unwrap().len(), 2);
}

#[test]
fn test_corrupt_file_fails_to_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Database::open(&path).unwrap_err();
    assert!(err.to_string().contains("qna.json"));
}

#[test]
fn test_empty_file_opens_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("qna.json");
    std::fs::write(&path, "").unwrap();

    let db = Database::open(&path).unwrap();
    assert!(db.snapshot().unwrap().questions.is_empty());
}

#[test]
fn test_from_config() {
    let temp = TempDir::new().unwrap();

    let memory = Database::from_config(&StorageConfig::memory()).unwrap();
    assert!(memory.path().is_none());

    let path = temp.path().join("data.json");
    let file = Database::from_config(&StorageConfig::file(&path)).unwrap();
    assert_eq!(file.path(), Some(path.as_path()));
}
