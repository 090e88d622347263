//! Splash screen redirect decision.

use crate::role::Role;
use crate::route_table::dashboard_path;
use crate::session::SessionStore;
use std::time::Duration;

/// How long the splash screen stays up before redirecting.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Splash,
    RedirectToLogin,
    RedirectToDashboard(Role),
}

impl SplashState {
    /// State after the delay elapses, read from the session at that moment.
    pub fn after_delay(session: &SessionStore) -> Self {
        if session.is_logged_in() {
            SplashState::RedirectToDashboard(session.role())
        } else {
            SplashState::RedirectToLogin
        }
    }

    /// Redirect target, `None` while still on the splash screen.
    pub fn target_path(&self) -> Option<String> {
        match self {
            SplashState::Splash => None,
            SplashState::RedirectToLogin => Some("/login".to_string()),
            SplashState::RedirectToDashboard(role) => Some(dashboard_path(*role)),
        }
    }
}
