use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, category::CategoriesDto, question::QuestionListDto},
    server::{
        error::AppError,
        model::{category::Category, question::Question},
        service::{category::CategoryService, question::QuestionService},
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List every category.
///
/// # Returns
/// - `200 OK` - Mapping of category id to display name
/// - `500 Internal Server Error` - Store unreachable or table missing
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = CategoriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CategoriesDto {
            success: true,
            categories: Category::into_map(categories),
        }),
    ))
}

/// List every question in a category.
///
/// The category must exist; an existing category without questions returns an
/// empty list. A non-integer id is treated as an unknown route.
///
/// # Returns
/// - `200 OK` - Questions in the category with `current_category` set to its id
/// - `404 Not Found` - No category has this id
/// - `422 Unprocessable Entity` - Any other failure
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved questions", body = QuestionListDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Unprocessable entity", body = ErrorDto)
    ),
)]
pub async fn get_questions_by_category(
    State(state): State<AppState>,
    category_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(category_id) = category_id.map_err(|e| AppError::NotFound(e.body_text()))?;

    let service = QuestionService::new(&state.db);

    let questions = service
        .get_by_category(category_id)
        .await
        .map_err(AppError::or_unprocessable)?;

    Ok((
        StatusCode::OK,
        Json(QuestionListDto {
            success: true,
            total_questions: questions.len() as u64,
            questions: questions.into_iter().map(Question::into_dto).collect(),
            current_category: Some(category_id),
        }),
    ))
}
