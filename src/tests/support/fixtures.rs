use chrono::Utc;
use uuid::Uuid;

use crate::comment::application::ports::outgoing::CommentResult;
use crate::topic::application::ports::outgoing::TopicResult;

pub fn sample_topic(created_by: &str, title: &str) -> TopicResult {
    let now = Utc::now();
    TopicResult {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("All about {title}"),
        created_by: created_by.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_comment(topic_id: Uuid, username: &str, content: &str) -> CommentResult {
    CommentResult {
        id: Uuid::new_v4(),
        topic_id,
        username: username.to_string(),
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
