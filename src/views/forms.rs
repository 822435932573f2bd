use axum::response::Html;

use super::layout;

pub fn signup_page() -> Html<String> {
    layout(
        "Sign up",
        r#"<h1>Sign up</h1>
<form method="post" action="/signup">
  <label>Email <input type="email" name="email" required /></label>
  <label>Phone <input type="tel" name="phone" required /></label>
  <label>Password <input type="password" name="password" required /></label>
  <button type="submit">Sign up</button>
</form>
<p><a href="/create_quiz">Create a quiz</a></p>"#,
    )
}

pub fn create_quiz_page() -> Html<String> {
    layout(
        "Create quiz",
        r#"<h1>Create quiz</h1>
<form method="post" action="/create_quiz">
  <label>Title <input type="text" name="title" required /></label>
  <label>Start <input type="datetime-local" name="start_time" required /></label>
  <label>End <input type="datetime-local" name="end_time" required /></label>
  <label>Duration (minutes) <input type="number" name="duration" min="1" required /></label>
  <button type="submit">Create</button>
</form>"#,
    )
}
