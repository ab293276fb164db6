use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicsUseCase, UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}
