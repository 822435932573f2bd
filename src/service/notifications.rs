use crate::error::QuizError;
use crate::mail::{Mailer, OutgoingMail};
use tracing::info;

pub const STUDENT_SUBJECT: &str = "Your Quiz Results";
pub const TEACHER_SUBJECT: &str = "Student Quiz Results";

/// Mail the same summary to the student, then to the teacher. Stops at the
/// first failure.
pub async fn notify_results(
    mailer: &dyn Mailer,
    student: &str,
    teacher: &str,
    summary: &str,
) -> Result<(), QuizError> {
    mailer
        .send(OutgoingMail::new(student, STUDENT_SUBJECT, summary))
        .await?;
    mailer
        .send(OutgoingMail::new(teacher, TEACHER_SUBJECT, summary))
        .await?;
    info!(student = %student, teacher = %teacher, "results mailed");
    Ok(())
}
