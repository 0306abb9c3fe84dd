//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `trivia_core` linkage and open a catalog database.
//! - Print category and question counts for a quick sanity check.
//!
//! Usage: `trivia_cli [DB_PATH]`; an in-memory catalog is used when no
//! path is given. Logs go to `$TRIVIA_LOG_DIR`, or `trivia-logs` under the
//! system temp directory.

use std::path::PathBuf;
use std::process::ExitCode;
use trivia_core::db::{open_db, open_db_in_memory};
use trivia_core::{
    default_log_level, init_logging, QuestionService, QuestionStore, SqliteQuestionStore,
};

const LOG_DIR_ENV: &str = "TRIVIA_LOG_DIR";

fn main() -> ExitCode {
    let log_dir = log_dir();
    match init_logging(default_log_level().as_str(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("logging dir={}", log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    println!("trivia_core ping={}", trivia_core::ping());
    println!("trivia_core version={}", trivia_core::core_version());

    let opened = match std::env::args().nth(1) {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = SqliteQuestionStore::new(&conn);
    match store.count_questions() {
        Ok(count) => println!("questions={count}"),
        Err(err) => {
            eprintln!("failed to count questions: {err}");
            return ExitCode::FAILURE;
        }
    }

    let service = QuestionService::new(store);
    match service.list_categories() {
        Ok(categories) => {
            for (id, label) in categories {
                println!("category {id}={label}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to list categories: {err}");
            ExitCode::FAILURE
        }
    }
}

fn log_dir() -> PathBuf {
    std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("trivia-logs"))
}
