use crate::db::models::{
    DbOption, DbQuestion, DbQuiz, DbUser, NewQuiz, NewUser, QuestionDetail, QuizDetail,
};
use crate::db::schema::SQLITE_INIT;
use crate::error::QuizError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct QuizStorage {
    pool: SqlitePool,
}

impl QuizStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the SQLite database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, QuizError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL. Safe to call repeatedly.
    pub async fn init_schema(&self) -> Result<(), QuizError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<DbUser>, QuizError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, email, phone, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a user. A duplicate email maps to `QuizError::EmailTaken`.
    pub async fn insert_user(&self, user: NewUser) -> Result<i64, QuizError> {
        let res = sqlx::query("INSERT INTO users (email, phone, password_hash) VALUES (?, ?, ?)")
            .bind(user.email)
            .bind(user.phone)
            .bind(user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(QuizError::from_user_insert)?;
        Ok(res.last_insert_rowid())
    }

    pub async fn count_users(&self) -> Result<i64, QuizError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    pub async fn insert_quiz(&self, quiz: NewQuiz) -> Result<i64, QuizError> {
        let res = sqlx::query(
            r#"INSERT INTO quizzes (title, start_time, end_time, duration_minutes)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(quiz.title)
        .bind(quiz.start_time)
        .bind(quiz.end_time)
        .bind(quiz.duration_minutes)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn get_quiz(&self, id: i64) -> Result<Option<DbQuiz>, QuizError> {
        let quiz = sqlx::query_as::<_, DbQuiz>(
            r#"SELECT id, title, start_time, end_time, duration_minutes
               FROM quizzes WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(quiz)
    }

    pub async fn insert_question(&self, quiz_id: i64, text: &str) -> Result<i64, QuizError> {
        let res = sqlx::query("INSERT INTO questions (quiz_id, text) VALUES (?, ?)")
            .bind(quiz_id)
            .bind(text)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn insert_option(
        &self,
        question_id: i64,
        text: &str,
        is_correct: bool,
    ) -> Result<i64, QuizError> {
        let res =
            sqlx::query("INSERT INTO options (question_id, text, is_correct) VALUES (?, ?, ?)")
                .bind(question_id)
                .bind(text)
                .bind(is_correct)
                .execute(&self.pool)
                .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<DbQuestion>, QuizError> {
        let question = sqlx::query_as::<_, DbQuestion>(
            "SELECT id, quiz_id, text FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    pub async fn get_option(&self, id: i64) -> Result<Option<DbOption>, QuizError> {
        let option = sqlx::query_as::<_, DbOption>(
            "SELECT id, question_id, text, is_correct FROM options WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(option)
    }

    /// Load a quiz with its questions and options, both ordered by id.
    pub async fn load_quiz_detail(&self, quiz_id: i64) -> Result<Option<QuizDetail>, QuizError> {
        let Some(quiz) = self.get_quiz(quiz_id).await? else {
            return Ok(None);
        };

        let questions = sqlx::query_as::<_, DbQuestion>(
            "SELECT id, quiz_id, text FROM questions WHERE quiz_id = ? ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, DbOption>(
            r#"SELECT o.id, o.question_id, o.text, o.is_correct
               FROM options o
               JOIN questions q ON q.id = o.question_id
               WHERE q.quiz_id = ?
               ORDER BY o.id"#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        let mut by_question: HashMap<i64, Vec<DbOption>> = HashMap::new();
        for opt in options {
            by_question.entry(opt.question_id).or_default().push(opt);
        }

        let questions = questions
            .into_iter()
            .map(|question| QuestionDetail {
                options: by_question.remove(&question.id).unwrap_or_default(),
                question,
            })
            .collect();

        Ok(Some(QuizDetail { quiz, questions }))
    }
}
