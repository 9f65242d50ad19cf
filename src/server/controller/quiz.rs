use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        quiz::{PlayQuizDto, QuizQuestionDto},
    },
    server::{
        error::AppError, model::quiz::PlayQuizParams, service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// Draw the next quiz question.
///
/// Picks uniformly at random among questions in `quiz_category` whose ids are not
/// in `previous_questions`. Running out of questions is a normal outcome and
/// returns a null question.
///
/// # Returns
/// - `200 OK` - The next question, or null when none remain
/// - `422 Unprocessable Entity` - Missing, empty or non-object body, non-array
///   `previous_questions`, or database error
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = QUIZ_TAG,
    request_body = PlayQuizDto,
    responses(
        (status = 200, description = "Next quiz question (null when exhausted)", body = QuizQuestionDto),
        (status = 422, description = "Unprocessable entity", body = ErrorDto)
    ),
)]
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    let params = PlayQuizParams::from_body(payload)?;

    let service = QuizService::new(&state.db, &state.picker);

    let question = service
        .next_question(params)
        .await
        .map_err(AppError::or_unprocessable)?;

    Ok((
        StatusCode::OK,
        Json(QuizQuestionDto {
            success: true,
            question: question.map(|q| q.into_dto()),
        }),
    ))
}
