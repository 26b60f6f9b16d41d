use crate::shell::Route;

use std::time::Duration;

use log::debug;

/// Delayed navigation triggered by a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub target: Route,
    pub delay: Duration,
}

impl Redirect {
    pub fn new(target: Route, delay: Duration) -> Self {
        Self { target, delay }
    }

    pub fn immediate(target: Route) -> Self {
        Self::new(target, Duration::ZERO)
    }

    /// Sleep out the delay, then hand back the route to show
    pub async fn wait(self) -> Route {
        if !self.delay.is_zero() {
            debug!(
                "Redirecting to {} in {}ms",
                self.target.path(),
                self.delay.as_millis()
            );
            tokio::time::sleep(self.delay).await;
        }
        self.target
    }
}
