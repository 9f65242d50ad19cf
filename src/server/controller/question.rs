use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        question::{
            CreateQuestionDto, CreatedQuestionDto, DeletedQuestionDto, PaginatedQuestionsDto,
            QuestionListDto, SearchQuestionsDto,
        },
    },
    server::{
        error::AppError,
        model::question::{CreateQuestionParams, Question, SearchQuestionsParams},
        service::question::QuestionService,
        state::AppState,
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PaginationParams {
    /// Page number requested, falling back to 1 when absent or not an integer.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Get a page of questions.
///
/// Returns up to ten questions ordered by id along with the total question count and
/// the full category mapping.
///
/// # Returns
/// - `200 OK` - Non-empty page of questions
/// - `404 Not Found` - Page below 1 or past the last question
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/questions",
    tag = QUESTION_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved questions", body = PaginatedQuestionsDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);

    let page = service.get_paginated(params.page()).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedQuestionsDto {
            success: true,
            questions: page.questions.into_iter().map(Question::into_dto).collect(),
            total_questions: page.total,
            categories: page.categories,
            current_category: None,
        }),
    ))
}

/// Delete a question.
///
/// Deleting a question that does not exist is reported as 422 rather than 404.
///
/// # Returns
/// - `200 OK` - Id of the deleted question
/// - `422 Unprocessable Entity` - No question has this id, or the delete failed
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted question", body = DeletedQuestionDto),
        (status = 404, description = "Question id is not an integer", body = ErrorDto),
        (status = 422, description = "Question does not exist", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(question_id) = question_id.map_err(|e| AppError::NotFound(e.body_text()))?;

    let service = QuestionService::new(&state.db);

    let deleted = service
        .delete(question_id)
        .await
        .map_err(AppError::or_unprocessable)?;

    Ok((
        StatusCode::OK,
        Json(DeletedQuestionDto {
            success: true,
            deleted,
        }),
    ))
}

/// Create a new question.
///
/// `question`, `answer`, `category` and `difficulty` must all be present and
/// truthy; a difficulty of 0 is rejected.
///
/// # Returns
/// - `200 OK` - Id of the created question
/// - `400 Bad Request` - Missing body or a field failed validation
/// - `422 Unprocessable Entity` - Insert failed
#[utoipa::path(
    post,
    path = "/questions",
    tag = QUESTION_TAG,
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Successfully created question", body = CreatedQuestionDto),
        (status = 400, description = "Invalid question data", body = ErrorDto),
        (status = 422, description = "Unprocessable entity", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let params = CreateQuestionParams::from_dto(payload)?;

    let service = QuestionService::new(&state.db);

    let question = service
        .create(params)
        .await
        .map_err(AppError::or_unprocessable)?;

    Ok((
        StatusCode::OK,
        Json(CreatedQuestionDto {
            success: true,
            created: question.id,
        }),
    ))
}

/// Search questions by text.
///
/// Case-insensitive substring match on the question text. An empty `searchTerm`
/// matches every question; an absent one is a bad request.
///
/// # Returns
/// - `200 OK` - Matching questions
/// - `400 Bad Request` - `searchTerm` missing from the body
/// - `422 Unprocessable Entity` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = QUESTION_TAG,
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Successfully searched questions", body = QuestionListDto),
        (status = 400, description = "searchTerm missing", body = ErrorDto),
        (status = 422, description = "Unprocessable entity", body = ErrorDto)
    ),
)]
pub async fn search_questions(
    State(state): State<AppState>,
    payload: Result<Json<SearchQuestionsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    let params = SearchQuestionsParams::from_dto(payload)?;

    let service = QuestionService::new(&state.db);

    let questions = service
        .search(params)
        .await
        .map_err(AppError::or_unprocessable)?;

    Ok((
        StatusCode::OK,
        Json(QuestionListDto {
            success: true,
            total_questions: questions.len() as u64,
            questions: questions.into_iter().map(Question::into_dto).collect(),
            current_category: None,
        }),
    ))
}
