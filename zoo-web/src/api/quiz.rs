use actix_web::web;
use actix_web_validator::Json;
use zoo_error::WebResult;
use zoo_models::{
    constants::QUIZ_PAGE_SIZE,
    domain::prelude::{score_submission, QuizOutcome, QuizQuestion, QuizSubmission},
    web::WebResponse,
};
use zoo_repository::QuizRepository;

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/quiz", web::get().to(questions))
        .route("/quiz", web::post().to(submit));
}

/// The quiz questions presented for an attempt; correct answers stay server-side
async fn questions() -> WebResult<WebResponse<Vec<QuizQuestion>>> {
    let questions = QuizRepository::find_page(QUIZ_PAGE_SIZE)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(WebResponse::ok(questions))
}

/// Score a submission against the presented questions; nothing is persisted
async fn submit(payload: Json<QuizSubmission>) -> WebResult<WebResponse<QuizOutcome>> {
    let quizzes = QuizRepository::find_page(QUIZ_PAGE_SIZE).await?;
    Ok(WebResponse::ok(score_submission(
        &quizzes,
        &payload.answers,
    )))
}
