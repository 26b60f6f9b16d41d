use crate::shell::{NavMenu, Route, RouteTable};
use crate::workflow::Redirect;
use crate::{AppError, AppResult};

use mf_gateway::{AuthContext, Gateway};

use log::{debug, error};

/// End the session: revoke it with the gateway, then clear the shared context.
///
/// The local session is cleared even when the gateway call fails; the error
/// is still returned so the caller can tell the user.
pub async fn sign_out(gateway: &dyn Gateway, auth: &AuthContext) -> AppResult<()> {
    let result = gateway.sign_out().await;
    auth.clear();

    result.map_err(|err| {
        error!("Error signing out: {err}");
        AppError::from(err)
    })
}

/// The page frame: which route is showing, and who is signed in.
pub struct Shell {
    routes: RouteTable,
    auth: AuthContext,
    current: Route,
}

impl Shell {
    pub fn new(routes: RouteTable, auth: AuthContext) -> Self {
        Self {
            routes,
            auth,
            current: Route::Home,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn navigate(&mut self, path: &str) -> Route {
        let route = self.routes.resolve(path);
        debug!("Navigate {path} -> {route}");
        self.current = route;
        route
    }

    /// Wait out a post-submit redirect, then show its target
    pub async fn follow(&mut self, redirect: Redirect) -> Route {
        let target = redirect.wait().await;
        self.navigate(target.path())
    }

    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::for_auth(&self.auth)
    }

    /// [`sign_out`], then back to the home page
    pub async fn sign_out(&mut self, gateway: &dyn Gateway) -> AppResult<()> {
        let result = sign_out(gateway, &self.auth).await;
        self.current = Route::Home;
        result
    }
}
