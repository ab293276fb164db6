pub mod api;
pub mod client;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::comment;
pub use modules::topic;

use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::web;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub comment: CommentUseCases,
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::update_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
}
