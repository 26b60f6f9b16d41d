use crate::shell::{DevPreview, Route};

use mf_config::AppConfig;

use log::debug;

const DEV_PREFIX: &str = "/dev/";

/// Path to page mapping. Unknown paths fall through to [`Route::Home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    dev_routes: bool,
}

impl RouteTable {
    pub fn new(dev_routes: bool) -> Self {
        let mut routes = Route::PUBLIC.to_vec();
        if dev_routes {
            routes.extend(DevPreview::ALL.map(Route::Dev));
        }
        Self { routes, dev_routes }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.dev_routes)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn dev_routes(&self) -> bool {
        self.dev_routes
    }

    /// Match a path, ignoring query string, fragment and trailing slash
    pub fn resolve(&self, path: &str) -> Route {
        let path = normalize(path);

        if let Some(route) = self.routes.iter().find(|r| r.path() == path) {
            return *route;
        }

        if self.dev_routes && path.starts_with(DEV_PREFIX) {
            return Route::Dev(DevPreview::Index);
        }

        debug!("No route for '{path}', showing home");
        Route::Home
    }

    /// Whether the path has its own page rather than hitting the catch-all
    pub fn is_mounted(&self, path: &str) -> bool {
        let path = normalize(path);
        self.routes.iter().any(|r| r.path() == path)
            || (self.dev_routes && path.starts_with(DEV_PREFIX))
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}
