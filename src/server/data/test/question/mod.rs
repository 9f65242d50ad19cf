use crate::server::{
    data::question::QuestionRepository,
    model::{question::CreateQuestionParams, quiz::QuizCategory},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_category;
mod get_page;
mod get_quiz_candidates;
mod search;
