//! Layout and navigation: route table, auth-aware menu, current page.

mod layout;
mod nav_menu;
mod route;
mod route_table;

pub use layout::{Shell, sign_out};
pub use nav_menu::{NavLink, NavMenu, UserMenu, notification_badge};
pub use route::{DevPreview, Route};
pub use route_table::RouteTable;
