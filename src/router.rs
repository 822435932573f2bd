use crate::db::QuizStorage;
use crate::handlers::{answers, quiz, signup};
use crate::mail::Mailer;
use crate::service::clock::Clock;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Application context handed to every handler.
#[derive(Clone)]
pub struct QuizState {
    pub storage: QuizStorage,
    pub mailer: Arc<dyn Mailer>,
    pub clock: Arc<dyn Clock>,
    pub teacher_email: Arc<str>,
}

impl QuizState {
    pub fn new(
        storage: QuizStorage,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        teacher_email: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            storage,
            mailer,
            clock,
            teacher_email: teacher_email.into(),
        }
    }
}

pub fn quiz_router(state: QuizState) -> Router {
    Router::new()
        .route("/", get(signup::home))
        .route("/signup", post(signup::signup))
        .route(
            "/create_quiz",
            get(quiz::create_quiz_form).post(quiz::create_quiz),
        )
        .route("/take_quiz/{quiz_id}", get(quiz::take_quiz))
        .route("/submit_answers/{quiz_id}", post(answers::submit_answers))
        .with_state(state)
}
