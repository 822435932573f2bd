use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lettre::address::AddressError;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum QuizError {
    #[error("Email already registered!")]
    EmailTaken,

    #[error("Invalid date/time format or duration. Please check your input.")]
    InvalidQuizInput,

    #[error("End time must be after start time.")]
    EndBeforeStart,

    #[error("A valid email address is required.")]
    InvalidStudentEmail,

    #[error("Quiz is not available at this time.")]
    QuizUnavailable,

    #[error("Malformed answer field: {0}")]
    MalformedAnswer(String),

    #[error("Missing or malformed form field: {0}")]
    MalformedForm(String),

    #[error("No quiz at path segment {0:?}")]
    UnknownQuizPath(String),

    #[error("Quiz {0} not found")]
    QuizNotFound(i64),

    #[error("Question {0} not found")]
    QuestionNotFound(i64),

    #[error("Option {0} not found")]
    OptionNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Mail transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),

    #[error("Mail message error: {0}")]
    MailMessage(#[from] lettre::error::Error),

    #[error("Mail address error: {0}")]
    MailAddress(#[from] AddressError),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Unique-constraint violations on `users.email` surface as a duplicate signup.
    pub fn from_user_insert(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db) if db.is_unique_violation() => QuizError::EmailTaken,
            _ => QuizError::DatabaseError(e),
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        match self {
            QuizError::EmailTaken
            | QuizError::InvalidQuizInput
            | QuizError::EndBeforeStart
            | QuizError::InvalidStudentEmail
            | QuizError::QuizUnavailable => (StatusCode::OK, self.to_string()).into_response(),
            QuizError::MalformedAnswer(_) | QuizError::MalformedForm(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            QuizError::QuizNotFound(_)
            | QuizError::UnknownQuizPath(_)
            | QuizError::QuestionNotFound(_)
            | QuizError::OptionNotFound(_) => {
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            QuizError::DatabaseError(_)
            | QuizError::MailTransport(_)
            | QuizError::MailMessage(_)
            | QuizError::MailAddress(_)
            | QuizError::PasswordHash(_)
            | QuizError::Config(_)
            | QuizError::Io(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
                    .into_response()
            }
        }
    }
}
