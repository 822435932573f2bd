//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows plus insert payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `QuizStorage`, the pool-backed repository used by handlers

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbOption, DbQuestion, DbQuiz, DbUser, NewQuiz, NewUser, QuestionDetail, QuizDetail};
pub use schema::SQLITE_INIT;
pub use sqlite::{QuizStorage, SqlitePool};
