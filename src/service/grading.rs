use crate::db::QuizStorage;
use crate::error::QuizError;

/// Answer fields are named `question_<question_id>` and carry an option id.
pub const ANSWER_FIELD_PREFIX: &str = "question_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub option_id: i64,
}

/// One graded line: the question text and whether the pick was right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub question: String,
    pub correct: bool,
}

impl AnswerResult {
    pub fn verdict(&self) -> &'static str {
        if self.correct { "Correct" } else { "Incorrect" }
    }
}

/// Pull answers out of raw form fields, keeping form order. Other fields are ignored.
pub fn parse_answers(fields: &[(String, String)]) -> Result<Vec<SubmittedAnswer>, QuizError> {
    fields
        .iter()
        .filter_map(|(name, value)| {
            name.strip_prefix(ANSWER_FIELD_PREFIX)
                .map(|raw_id| (name, raw_id, value))
        })
        .map(|(name, raw_id, value)| {
            let question_id = raw_id
                .trim()
                .parse::<i64>()
                .map_err(|_| QuizError::MalformedAnswer(name.clone()))?;
            let option_id = value
                .trim()
                .parse::<i64>()
                .map_err(|_| QuizError::MalformedAnswer(format!("{name}={value}")))?;
            Ok(SubmittedAnswer {
                question_id,
                option_id,
            })
        })
        .collect()
}

/// Grade answers for `quiz_id` in the order given. The first missing option or
/// question aborts the whole batch.
pub async fn grade(
    storage: &QuizStorage,
    quiz_id: i64,
    answers: &[SubmittedAnswer],
) -> Result<Vec<AnswerResult>, QuizError> {
    let mut results = Vec::with_capacity(answers.len());
    for answer in answers {
        let option = storage
            .get_option(answer.option_id)
            .await?
            .ok_or(QuizError::OptionNotFound(answer.option_id))?;
        let question = storage
            .get_question(answer.question_id)
            .await?
            .filter(|q| q.quiz_id == quiz_id)
            .ok_or(QuizError::QuestionNotFound(answer.question_id))?;

        // an option picked under the wrong question never counts
        let correct = option.is_correct && option.question_id == question.id;
        results.push(AnswerResult {
            question: question.text,
            correct,
        });
    }
    Ok(results)
}

/// Plain-text summary, one `<question>: Correct|Incorrect` line per result.
pub fn summarize(results: &[AnswerResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}: {}", r.question, r.verdict()))
        .collect::<Vec<_>>()
        .join("\n")
}
