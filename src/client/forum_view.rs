use uuid::Uuid;

use super::api::{Comment, ForumApi, Topic, TopicDraft};
use super::comment_cache::CommentCache;
use super::session::{CurrentUser, Session};

pub const LOAD_TOPICS_FAILED: &str = "Could not load topics. Please try again later.";
pub const MISSING_TITLE: &str = "Please provide a title for the topic.";
pub const MISSING_DESCRIPTION: &str = "Please provide a description for the topic.";
pub const SAVE_TOPIC_FAILED: &str = "Failed to save topic. Please try again.";
pub const DELETE_TOPIC_FAILED: &str = "Failed to delete topic. Please try again.";
pub const LOAD_COMMENTS_FAILED: &str = "Could not load comments. Please try again.";
pub const CREATE_COMMENT_FAILED: &str = "Failed to create comment. Please try again.";
pub const UPDATE_COMMENT_FAILED: &str = "Failed to update comment. Please try again.";
pub const DELETE_COMMENT_FAILED: &str = "Failed to delete comment. Please try again.";

pub const CONFIRM_DELETE_TOPIC: &str = "Are you sure you want to delete this topic?";
pub const CONFIRM_DELETE_COMMENT: &str = "Are you sure you want to delete this comment?";
pub const NO_COMMENTS_HINT: &str = "No comments yet. Be the first to comment!";

/// Asks the person at the screen a yes/no question before a destructive
/// action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What the detail pane shows for the selected topic.
#[derive(Debug, PartialEq)]
pub struct TopicDetails<'a> {
    pub topic: &'a Topic,
    pub comments: Option<&'a [Comment]>,
    pub empty_hint: Option<&'static str>,
}

/// View-model of the forum page.
///
/// Each action borrows the view mutably for the whole request, so a view
/// never has two requests in flight. Dropping an action's future abandons
/// the request and leaves the state as it was before the call.
pub struct ForumView<A: ForumApi> {
    api: A,
    current_user: Option<CurrentUser>,
    topics: Vec<Topic>,
    topic_draft: TopicDraft,
    editing_topic: Option<Uuid>,
    comments: CommentCache,
    comment_draft: String,
    editing_comment: Option<Uuid>,
    comment_edit_draft: String,
    selected_topic: Option<Uuid>,
    error: Option<String>,
}

impl<A: ForumApi> ForumView<A> {
    pub fn new(api: A, session: &Session) -> Self {
        Self {
            api,
            current_user: session.current_user().cloned(),
            topics: Vec::new(),
            topic_draft: TopicDraft::default(),
            editing_topic: None,
            comments: CommentCache::new(),
            comment_draft: String::new(),
            editing_comment: None,
            comment_edit_draft: String::new(),
            selected_topic: None,
            error: None,
        }
    }

    // ──────────────────────────────────────────────────────
    // State accessors
    // ──────────────────────────────────────────────────────

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    pub fn topic_draft(&self) -> &TopicDraft {
        &self.topic_draft
    }

    pub fn topic_draft_mut(&mut self) -> &mut TopicDraft {
        &mut self.topic_draft
    }

    pub fn editing_topic_id(&self) -> Option<Uuid> {
        self.editing_topic
    }

    pub fn selected_topic_id(&self) -> Option<Uuid> {
        self.selected_topic
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    pub fn editing_comment_id(&self) -> Option<Uuid> {
        self.editing_comment
    }

    pub fn comment_edit_draft(&self) -> &str {
        &self.comment_edit_draft
    }

    pub fn set_comment_edit_draft(&mut self, text: impl Into<String>) {
        self.comment_edit_draft = text.into();
    }

    pub fn cached_comments(&self, topic_id: Uuid) -> Option<&[Comment]> {
        self.comments.get(topic_id)
    }

    // ──────────────────────────────────────────────────────
    // Visibility
    // ──────────────────────────────────────────────────────

    /// Creation and edit forms render only for a recognized user.
    pub fn can_post(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn can_modify_topic(&self, topic: &Topic) -> bool {
        self.is_current_user(&topic.created_by)
    }

    pub fn can_modify_comment(&self, comment: &Comment) -> bool {
        self.is_current_user(&comment.username)
    }

    fn is_current_user(&self, author: &str) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|user| user.username == author)
    }

    // ──────────────────────────────────────────────────────
    // Topics
    // ──────────────────────────────────────────────────────

    pub async fn load_topics(&mut self) {
        match self.api.list_topics().await {
            Ok(topics) => self.topics = topics,
            Err(e) => {
                tracing::error!("Error fetching topics: {}", e);
                self.error = Some(LOAD_TOPICS_FAILED.to_string());
            }
        }
    }

    /// Updates the topic being edited, or creates a new one from the draft
    /// and selects it.
    pub async fn save_topic(&mut self) {
        if self.topic_draft.title.trim().is_empty() {
            self.error = Some(MISSING_TITLE.to_string());
            return;
        }
        if self.topic_draft.description.trim().is_empty() {
            self.error = Some(MISSING_DESCRIPTION.to_string());
            return;
        }

        match self.editing_topic {
            Some(topic_id) => match self.api.update_topic(topic_id, &self.topic_draft).await {
                Ok(updated) => {
                    for topic in self.topics.iter_mut().filter(|t| t.id == topic_id) {
                        *topic = updated.clone();
                    }
                    self.editing_topic = None;
                }
                Err(e) => {
                    tracing::error!("Error saving topic: {}", e);
                    self.error = Some(SAVE_TOPIC_FAILED.to_string());
                    return;
                }
            },
            None => match self.api.create_topic(&self.topic_draft).await {
                Ok(created) => {
                    self.selected_topic = Some(created.id);
                    self.topics.push(created);
                }
                Err(e) => {
                    tracing::error!("Error saving topic: {}", e);
                    self.error = Some(SAVE_TOPIC_FAILED.to_string());
                    return;
                }
            },
        }

        self.topic_draft = TopicDraft::default();
        self.error = None;
    }

    pub async fn delete_topic(&mut self, topic_id: Uuid, confirm: &impl Confirm) {
        if !confirm.confirm(CONFIRM_DELETE_TOPIC) {
            return;
        }

        match self.api.delete_topic(topic_id).await {
            Ok(()) => {
                self.topics.retain(|t| t.id != topic_id);
                self.comments.invalidate(topic_id);
                if self.editing_topic == Some(topic_id) {
                    self.editing_topic = None;
                }
                if self.selected_topic == Some(topic_id) {
                    self.selected_topic = None;
                    self.topic_draft = TopicDraft::default();
                }
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error deleting topic: {}", e);
                self.error = Some(DELETE_TOPIC_FAILED.to_string());
            }
        }
    }

    pub fn begin_topic_edit(&mut self, topic: &Topic) {
        self.editing_topic = Some(topic.id);
        self.topic_draft = TopicDraft {
            title: topic.title.clone(),
            description: topic.description.clone(),
        };
    }

    pub fn cancel_topic_edit(&mut self) {
        self.editing_topic = None;
    }

    /// Selecting a topic loads its comments; selecting nothing forgets every
    /// cached comment and the topic draft.
    pub async fn select_topic(&mut self, topic_id: Option<Uuid>) {
        self.selected_topic = topic_id;
        match topic_id {
            Some(id) => {
                self.editing_topic = None;
                self.fetch_comments(id).await;
            }
            None => {
                self.comments.clear();
                self.topic_draft = TopicDraft::default();
            }
        }
    }

    pub fn selected_details(&self) -> Option<TopicDetails<'_>> {
        let selected = self.selected_topic?;
        let topic = self.topics.iter().find(|t| t.id == selected)?;
        let comments = self.comments.get(selected);

        Some(TopicDetails {
            topic,
            comments,
            empty_hint: comments.is_none().then_some(NO_COMMENTS_HINT),
        })
    }

    // ──────────────────────────────────────────────────────
    // Comments
    // ──────────────────────────────────────────────────────

    pub async fn fetch_comments(&mut self, topic_id: Uuid) {
        match self.api.list_comments(topic_id).await {
            Ok(comments) => self.comments.store(topic_id, comments),
            Err(e) => {
                tracing::error!("Error fetching comments: {}", e);
                self.error = Some(LOAD_COMMENTS_FAILED.to_string());
            }
        }
    }

    pub async fn create_comment(&mut self, topic_id: Uuid) {
        if self.comment_draft.trim().is_empty() {
            return;
        }

        let username = self.current_user.as_ref().map(|u| u.username.as_str());
        match self
            .api
            .create_comment(topic_id, username, &self.comment_draft)
            .await
        {
            Ok(comment) => {
                self.comments.append(topic_id, comment);
                self.comment_draft.clear();
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error creating comment: {}", e);
                self.error = Some(CREATE_COMMENT_FAILED.to_string());
            }
        }
    }

    pub fn begin_comment_edit(&mut self, comment: &Comment) {
        self.editing_comment = Some(comment.id);
        self.comment_edit_draft = comment.content.clone();
    }

    pub fn cancel_comment_edit(&mut self) {
        self.editing_comment = None;
    }

    pub async fn update_comment(&mut self, topic_id: Uuid) {
        let Some(comment_id) = self.editing_comment else {
            return;
        };
        if self.comment_edit_draft.trim().is_empty() {
            return;
        }

        match self
            .api
            .update_comment(topic_id, comment_id, &self.comment_edit_draft)
            .await
        {
            Ok(updated) => {
                self.comments.replace(topic_id, updated);
                self.editing_comment = None;
                self.comment_edit_draft.clear();
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error updating comment: {}", e);
                self.error = Some(UPDATE_COMMENT_FAILED.to_string());
            }
        }
    }

    pub async fn delete_comment(&mut self, topic_id: Uuid, comment_id: Uuid, confirm: &impl Confirm) {
        if !confirm.confirm(CONFIRM_DELETE_COMMENT) {
            return;
        }

        match self.api.delete_comment(topic_id, comment_id).await {
            Ok(()) => {
                self.comments.remove(topic_id, comment_id);
                if self.editing_comment == Some(comment_id) {
                    self.editing_comment = None;
                    self.comment_edit_draft.clear();
                }
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error deleting comment: {}", e);
                self.error = Some(DELETE_COMMENT_FAILED.to_string());
            }
        }
    }
}
