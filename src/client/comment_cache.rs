use std::collections::HashMap;
use uuid::Uuid;

use super::api::Comment;

/// Comments the view has fetched, keyed by topic. A topic with no entry has
/// not been fetched; an empty list means it was fetched and has no comments.
#[derive(Debug, Clone, Default)]
pub struct CommentCache {
    by_topic: HashMap<Uuid, Vec<Comment>>,
}

impl CommentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was cached for the topic.
    pub fn store(&mut self, topic_id: Uuid, comments: Vec<Comment>) {
        self.by_topic.insert(topic_id, comments);
    }

    /// Adds a comment at the end of the topic's list, starting one if needed.
    pub fn append(&mut self, topic_id: Uuid, comment: Comment) {
        self.by_topic.entry(topic_id).or_default().push(comment);
    }

    /// Swaps in the server's version of a comment. Returns false when the
    /// comment is not cached.
    pub fn replace(&mut self, topic_id: Uuid, comment: Comment) -> bool {
        let Some(slot) = self
            .by_topic
            .get_mut(&topic_id)
            .and_then(|list| list.iter_mut().find(|c| c.id == comment.id))
        else {
            return false;
        };
        *slot = comment;
        true
    }

    pub fn remove(&mut self, topic_id: Uuid, comment_id: Uuid) -> bool {
        match self.by_topic.get_mut(&topic_id) {
            Some(list) => {
                let before = list.len();
                list.retain(|c| c.id != comment_id);
                list.len() != before
            }
            None => false,
        }
    }

    pub fn invalidate(&mut self, topic_id: Uuid) {
        self.by_topic.remove(&topic_id);
    }

    pub fn clear(&mut self) {
        self.by_topic.clear();
    }

    pub fn get(&self, topic_id: Uuid) -> Option<&[Comment]> {
        self.by_topic.get(&topic_id).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.by_topic.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maplit::hashmap;

    fn comment(topic_id: Uuid, username: &str, content: &str) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            topic_id,
            username: username.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    fn cache_with(topic_id: Uuid, comments: Vec<Comment>) -> CommentCache {
        CommentCache {
            by_topic: hashmap! { topic_id => comments },
        }
    }

    #[test]
    fn append_starts_list_for_unfetched_topic() {
        let topic_id = Uuid::new_v4();
        let mut cache = CommentCache::new();

        cache.append(topic_id, comment(topic_id, "alice", "Try Discogs"));

        let list = cache.get(topic_id).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].username, "alice");
    }

    #[test]
    fn replace_swaps_matching_comment_only() {
        let topic_id = Uuid::new_v4();
        let first = comment(topic_id, "alice", "one");
        let second = comment(topic_id, "bob", "two");
        let mut cache = cache_with(topic_id, vec![first.clone(), second.clone()]);

        let mut edited = first.clone();
        edited.content = "one, edited".to_string();

        assert!(cache.replace(topic_id, edited.clone()));
        assert_eq!(cache.get(topic_id).unwrap(), &[edited, second][..]);
    }

    #[test]
    fn replace_of_unknown_comment_changes_nothing() {
        let topic_id = Uuid::new_v4();
        let existing = comment(topic_id, "alice", "one");
        let mut cache = cache_with(topic_id, vec![existing.clone()]);

        assert!(!cache.replace(topic_id, comment(topic_id, "bob", "stray")));
        assert_eq!(cache.get(topic_id).unwrap(), &[existing][..]);
    }

    #[test]
    fn remove_and_invalidate() {
        let topic_id = Uuid::new_v4();
        let doomed = comment(topic_id, "alice", "one");
        let mut cache = cache_with(topic_id, vec![doomed.clone()]);

        assert!(cache.remove(topic_id, doomed.id));
        assert_eq!(cache.get(topic_id).map(<[Comment]>::len), Some(0));
        assert!(!cache.remove(topic_id, doomed.id));

        cache.invalidate(topic_id);
        assert!(cache.get(topic_id).is_none());
    }

    #[test]
    fn clear_drops_every_topic() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut cache = CommentCache {
            by_topic: hashmap! {
                a => vec![comment(a, "alice", "x")],
                b => vec![],
            },
        };

        cache.clear();

        assert!(cache.is_empty());
    }
}
