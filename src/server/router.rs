use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        category::CategoriesDto,
        question::{
            CreateQuestionDto, CreatedQuestionDto, DeletedQuestionDto, PaginatedQuestionsDto,
            QuestionDto, QuestionListDto, SearchQuestionsDto,
        },
        quiz::{PlayQuizDto, QuizQuestionDto},
    },
    server::{
        controller::{
            self,
            category::{self, CATEGORY_TAG},
            question::{self, QUESTION_TAG},
            quiz::{self, QUIZ_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Trivia question bank and quiz play"),
    paths(
        category::get_categories,
        category::get_questions_by_category,
        question::get_questions,
        question::create_question,
        question::delete_question,
        question::search_questions,
        quiz::play_quiz,
    ),
    components(schemas(
        ErrorDto,
        CategoriesDto,
        QuestionDto,
        PaginatedQuestionsDto,
        QuestionListDto,
        CreateQuestionDto,
        CreatedQuestionDto,
        DeletedQuestionDto,
        SearchQuestionsDto,
        PlayQuizDto,
        QuizQuestionDto,
    )),
    tags(
        (name = CATEGORY_TAG, description = "Question categories"),
        (name = QUESTION_TAG, description = "Question bank"),
        (name = QUIZ_TAG, description = "Quiz play"),
    )
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// Every route answers cross-origin requests from any origin. Paths without a route
/// fall through to the 404 error envelope.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(category::get_questions_by_category),
        )
        .route(
            "/questions",
            get(question::get_questions).post(question::create_question),
        )
        .route("/questions/search", post(question::search_questions))
        .route("/questions/{question_id}", delete(question::delete_question))
        .route("/quizzes", post(quiz::play_quiz))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(controller::not_found)
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
