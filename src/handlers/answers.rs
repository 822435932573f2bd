use crate::service::grading::{grade, parse_answers, summarize};
use crate::handlers::quiz::parse_quiz_id;
use crate::service::notifications::notify_results;
use crate::views;
use crate::{QuizError, router::QuizState};
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use lettre::Address;
use tracing::info;

/// POST /submit_answers/{quiz_id}
///
/// Fields are read in form order; the results keep that order, which need not
/// match question order.
pub async fn submit_answers(
    State(state): State<QuizState>,
    Path(raw_id): Path<String>,
    fields: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, QuizError> {
    let quiz_id = parse_quiz_id(&raw_id)?;
    let Form(fields) = fields.map_err(|e| QuizError::MalformedForm(e.body_text()))?;
    let quiz = state
        .storage
        .get_quiz(quiz_id)
        .await?
        .ok_or(QuizError::QuizNotFound(quiz_id))?;
    if !quiz.is_open_at(state.clock.now()) {
        return Err(QuizError::QuizUnavailable);
    }

    let student = fields
        .iter()
        .find(|(name, _)| name == "email")
        .map(|(_, value)| value.trim())
        .filter(|email| email.parse::<Address>().is_ok())
        .ok_or(QuizError::InvalidStudentEmail)?
        .to_string();

    let answers = parse_answers(&fields)?;
    let results = grade(&state.storage, quiz_id, &answers).await?;
    let summary = summarize(&results);

    notify_results(
        state.mailer.as_ref(),
        &student,
        &state.teacher_email,
        &summary,
    )
    .await?;

    info!(
        quiz_id,
        student = %student,
        answered = results.len(),
        correct = results.iter().filter(|r| r.correct).count(),
        "answers submitted"
    );
    Ok(views::results_page(&results).into_response())
}
