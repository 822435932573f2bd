use crate::db::NewUser;
use crate::service::password::hash_password;
use crate::views;
use crate::{QuizError, router::QuizState};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// GET / -> signup page.
pub async fn home() -> Html<String> {
    views::signup_page()
}

/// POST /signup -> create the user, then back to the signup page.
pub async fn signup(
    State(state): State<QuizState>,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Result<Response, QuizError> {
    let Form(form) = form.map_err(|e| QuizError::MalformedForm(e.body_text()))?;
    if state.storage.find_user_by_email(&form.email).await?.is_some() {
        return Err(QuizError::EmailTaken);
    }

    let password_hash = hash_password(&form.password)?;
    let id = state
        .storage
        .insert_user(NewUser {
            email: form.email.clone(),
            phone: form.phone,
            password_hash,
        })
        .await?;

    info!(user_id = id, email = %form.email, "user signed up");
    Ok(Redirect::to("/").into_response())
}
