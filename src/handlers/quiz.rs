use crate::db::NewQuiz;
use crate::views;
use crate::{QuizError, router::QuizState};
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

/// Format of `<input type="datetime-local">` values.
pub const QUIZ_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
pub struct CreateQuizForm {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}

impl CreateQuizForm {
    /// Parse and validate into an insertable quiz.
    pub fn validate(self) -> Result<NewQuiz, QuizError> {
        let start_time = parse_quiz_time(&self.start_time)?;
        let end_time = parse_quiz_time(&self.end_time)?;
        let duration_minutes = self
            .duration
            .trim()
            .parse::<i64>()
            .map_err(|_| QuizError::InvalidQuizInput)?;

        if start_time >= end_time {
            return Err(QuizError::EndBeforeStart);
        }

        Ok(NewQuiz {
            title: self.title,
            start_time,
            end_time,
            duration_minutes,
        })
    }
}

/// Exact `YYYY-MM-DDTHH:MM`; surrounding whitespace is rejected.
fn parse_quiz_time(raw: &str) -> Result<NaiveDateTime, QuizError> {
    if raw.trim() != raw {
        return Err(QuizError::InvalidQuizInput);
    }
    NaiveDateTime::parse_from_str(raw, QUIZ_TIME_FORMAT).map_err(|_| QuizError::InvalidQuizInput)
}

/// GET /create_quiz -> creation form.
pub async fn create_quiz_form() -> Html<String> {
    views::create_quiz_page()
}

/// POST /create_quiz -> persist and hand back the take link.
pub async fn create_quiz(
    State(state): State<QuizState>,
    form: Result<Form<CreateQuizForm>, FormRejection>,
) -> Result<String, QuizError> {
    // a missing field is reported like any other bad input
    let Form(form) = form.map_err(|_| QuizError::InvalidQuizInput)?;
    let quiz = form.validate()?;
    let title = quiz.title.clone();
    let id = state.storage.insert_quiz(quiz).await?;

    info!(quiz_id = id, title = %title, "quiz created");
    Ok(format!(
        "Quiz created successfully! Access link: /take_quiz/{id}"
    ))
}

/// GET /take_quiz/{quiz_id} -> quiz page while the window is open.
pub async fn take_quiz(
    State(state): State<QuizState>,
    Path(raw_id): Path<String>,
) -> Result<Response, QuizError> {
    let quiz_id = parse_quiz_id(&raw_id)?;
    let detail = state
        .storage
        .load_quiz_detail(quiz_id)
        .await?
        .ok_or(QuizError::QuizNotFound(quiz_id))?;

    if !detail.quiz.is_open_at(state.clock.now()) {
        return Err(QuizError::QuizUnavailable);
    }

    Ok(views::quiz_page(&detail).into_response())
}

/// Quiz ids in paths are unsigned decimal integers; anything else names no quiz.
pub fn parse_quiz_id(raw: &str) -> Result<i64, QuizError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuizError::UnknownQuizPath(raw.to_string()));
    }
    raw.parse::<i64>()
        .map_err(|_| QuizError::UnknownQuizPath(raw.to_string()))
}
