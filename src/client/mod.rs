//! Client side of the forum: the view-model a UI binds to, the HTTP
//! adapter it talks through and the navigation bar model.

pub mod api;
pub mod comment_cache;
pub mod config;
pub mod forum_view;
pub mod navbar;
pub mod session;

pub use api::{Comment, ForumApi, ForumApiError, HttpForumApi, Topic, TopicDraft};
pub use comment_cache::CommentCache;
pub use config::{ClientConfig, ClientConfigError};
pub use forum_view::{Confirm, ForumView, TopicDetails};
pub use navbar::{NavLink, Navbar, NavbarView};
pub use session::{CurrentUser, MemoryTokenStore, Session, TokenStore};
