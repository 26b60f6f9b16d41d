use mf_gateway::AuthContext;

use serde::Serialize;

pub const BRAND: &str = "Missing Finder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink { label, path }
}

const PRIMARY_LINKS: [NavLink; 4] = [
    link("Home", "/"),
    link("Map", "/map"),
    link("Report", "/report"),
    link("About", "/about"),
];

const USER_LINKS: [NavLink; 4] = [
    link("Profile", "/profile"),
    link("Dashboard", "/dashboard"),
    link("Settings", "/settings"),
    link("Logout", "/logout"),
];

const GUEST_LINKS: [NavLink; 2] = [link("Login", "/login"), link("Register", "/register")];

const FOOTER_LINKS: [NavLink; 5] = [
    link("Home", "/"),
    link("Missing Persons", "/missing-persons"),
    link("Report", "/report"),
    link("Sightings", "/sightings"),
    link("Map", "/map"),
];

/// Dropdown shown in place of the login links once signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMenu {
    pub name: String,
    /// Avatar fallback
    pub initials: String,
    /// Bell badge text, absent when there is nothing to show
    pub notifications: Option<String>,
    pub items: Vec<NavLink>,
}

/// Header navigation for the current authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    pub brand: &'static str,
    pub primary: Vec<NavLink>,
    pub user: Option<UserMenu>,
    pub guest: Vec<NavLink>,
}

impl NavMenu {
    pub fn for_auth(auth: &AuthContext) -> Self {
        match auth.user() {
            Some(user) => Self {
                brand: BRAND,
                primary: PRIMARY_LINKS.to_vec(),
                user: Some(UserMenu {
                    name: user.display_name(),
                    initials: user.initials(),
                    notifications: None,
                    items: USER_LINKS.to_vec(),
                }),
                guest: Vec::new(),
            },
            None => Self {
                brand: BRAND,
                primary: PRIMARY_LINKS.to_vec(),
                user: None,
                guest: GUEST_LINKS.to_vec(),
            },
        }
    }

    /// Set the bell badge; ignored when signed out
    pub fn with_notifications(mut self, count: u32) -> Self {
        if let Some(ref mut user) = self.user {
            user.notifications = notification_badge(count);
        }
        self
    }

    pub fn footer_links() -> &'static [NavLink] {
        &FOOTER_LINKS
    }
}

/// "1".."9", then "9+"; nothing for zero
pub fn notification_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some(String::from("9+")),
    }
}
