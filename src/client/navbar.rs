use std::sync::Arc;

use super::session::{decode_payload, TokenStore};

pub const BRAND: &str = "Music Fan Zone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const HOME: NavLink = NavLink { label: "Home", href: "/" };
const PLAYLISTS: NavLink = NavLink { label: "Playlists", href: "/playlists" };
const FORUM: NavLink = NavLink { label: "Forum", href: "/forum" };
const INFO: NavLink = NavLink { label: "Info", href: "/help" };
const REGISTER: NavLink = NavLink { label: "Register", href: "/register" };
const LOGIN: NavLink = NavLink { label: "Login", href: "/login" };

/// One rendering of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub brand: &'static str,
    pub welcome: Option<String>,
    pub links: Vec<NavLink>,
    pub show_logout: bool,
}

pub struct Navbar<F: Fn()> {
    store: Arc<dyn TokenStore>,
    on_logout: F,
}

impl<F: Fn()> Navbar<F> {
    pub fn new(store: Arc<dyn TokenStore>, on_logout: F) -> Self {
        Self { store, on_logout }
    }

    /// Reads the stored token afresh. A token that cannot be decoded renders
    /// the logged-out view whatever `is_logged_in` says.
    pub fn render(&self, is_logged_in: bool) -> NavbarView {
        let mut username = None;
        let mut token_ok = true;

        if let Some(token) = self.store.token() {
            match decode_payload(&token) {
                Ok(payload) => username = payload.username.filter(|u| !u.is_empty()),
                Err(e) => {
                    tracing::error!("Token decoding error: {}", e);
                    token_ok = false;
                }
            }
        }

        let logged_in = is_logged_in && token_ok;
        let mut links = vec![HOME, PLAYLISTS, FORUM, INFO];
        if !logged_in {
            links.extend([REGISTER, LOGIN]);
        }

        NavbarView {
            brand: BRAND,
            welcome: username
                .filter(|_| logged_in)
                .map(|u| format!("Welcome, {u}!")),
            links,
            show_logout: logged_in,
        }
    }

    pub fn logout(&self) {
        (self.on_logout)();
    }
}
