use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    pub phone: String,
    /// Argon2id PHC string, never the plaintext.
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbQuiz {
    pub id: i64,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i64,
}

impl DbQuiz {
    /// The window is inclusive on both ends.
    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        now >= self.start_time && now <= self.end_time
    }
}

#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbQuestion {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbOption {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// A question together with its options, ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDetail {
    pub question: DbQuestion,
    pub options: Vec<DbOption>,
}

/// Everything the take-quiz page needs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDetail {
    pub quiz: DbQuiz,
    pub questions: Vec<QuestionDetail>,
}
