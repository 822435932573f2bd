use axum::response::Html;

use super::{html_escape, layout};
use crate::db::QuizDetail;
use crate::service::grading::{ANSWER_FIELD_PREFIX, AnswerResult};

pub fn quiz_page(detail: &QuizDetail) -> Html<String> {
    let quiz = &detail.quiz;
    let mut body = format!(
        "<h1>{title}</h1>\n<p>Open {start} to {end}, {minutes} minutes.</p>\n\
         <form method=\"post\" action=\"/submit_answers/{id}\">\n\
         <label>Your email <input type=\"email\" name=\"email\" required /></label>\n",
        title = html_escape(&quiz.title),
        start = quiz.start_time.format("%Y-%m-%d %H:%M"),
        end = quiz.end_time.format("%Y-%m-%d %H:%M"),
        minutes = quiz.duration_minutes,
        id = quiz.id,
    );

    for q in &detail.questions {
        body.push_str(&format!(
            "<fieldset>\n<legend>{}</legend>\n",
            html_escape(&q.question.text)
        ));
        for opt in &q.options {
            body.push_str(&format!(
                "<label><input type=\"radio\" name=\"{prefix}{qid}\" value=\"{oid}\" /> {text}</label>\n",
                prefix = ANSWER_FIELD_PREFIX,
                qid = q.question.id,
                oid = opt.id,
                text = html_escape(&opt.text),
            ));
        }
        body.push_str("</fieldset>\n");
    }

    body.push_str("<button type=\"submit\">Submit answers</button>\n</form>");
    layout(&quiz.title, &body)
}

pub fn results_page(results: &[AnswerResult]) -> Html<String> {
    let rows: String = results
        .iter()
        .map(|r| {
            format!(
                "<li class=\"{class}\">{question}: {verdict}</li>\n",
                class = r.verdict().to_ascii_lowercase(),
                question = html_escape(&r.question),
                verdict = r.verdict(),
            )
        })
        .collect();
    layout(
        "Results",
        &format!("<h1>Results</h1>\n<ul>\n{rows}</ul>\n<p>A copy has been emailed to you.</p>"),
    )
}
