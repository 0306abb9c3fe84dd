use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use trivia_core::db::open_db_in_memory;
use trivia_core::{
    CatalogError, ErrorKind, NewQuestion, QuestionId, QuestionStore, QuizOutcome, QuizRequest,
    QuizService, SqliteQuestionStore, ALL_CATEGORIES,
};

fn seed(store: &SqliteQuestionStore<'_>, category: i64, count: usize) -> Vec<QuestionId> {
    (0..count)
        .map(|n| {
            store
                .insert(&NewQuestion::new(
                    format!("Category {category} question {n}?"),
                    format!("Answer {n}"),
                    category,
                    1,
                ))
                .unwrap()
        })
        .collect()
}

#[test]
fn fully_asked_pool_signals_exhaustion_promptly() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let ids = seed(&store, 1, 5);
    let mut quiz = QuizService::with_rng(store, StdRng::seed_from_u64(3));

    let started = Instant::now();
    let outcome = quiz.next_question(&QuizRequest::new(1, ids)).unwrap();
    assert_eq!(outcome, QuizOutcome::Exhausted);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn last_unseen_question_is_returned_every_time() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let ids = seed(&store, 2, 5);
    let mut quiz = QuizService::new(store);

    let asked = vec![ids[0], ids[1], ids[3], ids[4]];
    for _ in 0..100 {
        match quiz.next_question(&QuizRequest::new(2, asked.clone())).unwrap() {
            QuizOutcome::Question(question) => assert_eq!(question.id, ids[2]),
            QuizOutcome::Exhausted => panic!("pool still has an unseen question"),
        }
    }
}

#[test]
fn category_scope_limits_the_pool() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let history = seed(&store, 4, 3).into_iter().collect::<HashSet<_>>();
    seed(&store, 5, 3);
    let mut quiz = QuizService::with_rng(store, StdRng::seed_from_u64(11));

    for _ in 0..50 {
        match quiz.next_question(&QuizRequest::new(4, Vec::new())).unwrap() {
            QuizOutcome::Question(question) => {
                assert_eq!(question.category, 4);
                assert!(history.contains(&question.id));
            }
            QuizOutcome::Exhausted => panic!("history pool is not exhausted"),
        }
    }
}

#[test]
fn category_zero_draws_from_the_whole_catalog() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let science = seed(&store, 1, 2);
    let art = seed(&store, 2, 1);
    let mut quiz = QuizService::with_rng(store, StdRng::seed_from_u64(5));

    let outcome = quiz
        .next_question(&QuizRequest::new(ALL_CATEGORIES, science.clone()))
        .unwrap();
    match outcome {
        QuizOutcome::Question(question) => assert_eq!(question.id, art[0]),
        QuizOutcome::Exhausted => panic!("catalog still has an unseen question"),
    }
}

#[test]
fn walking_a_quiz_visits_each_question_once_then_exhausts() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let ids = seed(&store, 3, 6);
    let mut quiz = QuizService::with_rng(store, StdRng::seed_from_u64(99));

    let mut asked = Vec::new();
    loop {
        match quiz.next_question(&QuizRequest::new(3, asked.clone())).unwrap() {
            QuizOutcome::Question(question) => {
                assert!(!asked.contains(&question.id));
                asked.push(question.id);
            }
            QuizOutcome::Exhausted => break,
        }
        assert!(asked.len() <= ids.len());
    }

    let mut sorted = asked.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, ids);
}

#[test]
fn empty_category_pool_is_exhausted() {
    let conn = open_db_in_memory().unwrap();
    let mut quiz = QuizService::new(SqliteQuestionStore::new(&conn));

    let outcome = quiz.next_question(&QuizRequest::new(6, Vec::new())).unwrap();
    assert_eq!(outcome, QuizOutcome::Exhausted);
}

#[test]
fn malformed_quiz_request_is_bad_request() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    seed(&store, 1, 2);
    let mut quiz = QuizService::new(store);

    let body: QuizRequest = serde_json::from_str(r#"{"previous_questions":[]}"#).unwrap();
    let err = quiz.next_question(&body).unwrap_err();
    assert!(matches!(err, CatalogError::MalformedQuizRequest(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.public_message(), "Bad request");
}

#[test]
fn outcome_serializes_with_status_tag() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteQuestionStore::new(&conn);
    let ids = seed(&store, 1, 1);
    assert_eq!(store.count_questions().unwrap(), 1);
    let mut quiz = QuizService::new(store);

    let served = quiz.next_question(&QuizRequest::new(1, Vec::new())).unwrap();
    let json = serde_json::to_value(&served).unwrap();
    assert_eq!(json["status"], "question");
    assert_eq!(json["question"]["id"], ids[0]);

    let done = quiz.next_question(&QuizRequest::new(1, ids)).unwrap();
    let json = serde_json::to_value(&done).unwrap();
    assert_eq!(json["status"], "exhausted");
}
