//! Login session flow
//!
//! Wires the identity resolver to navigation: failed resolution leaves
//! the modal open and the user logged out; success closes the modal and
//! enters the dashboard.

use dyesabel_core::{Chapter, IdentityResolver, Result, User};

use crate::nav::NavState;

#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
    modal_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Attempt a login. On failure the modal stays open and the error is
    /// returned for the front end to surface; on success the modal
    /// closes and navigation moves to the dashboard.
    pub fn login(
        &mut self,
        resolver: &dyn IdentityResolver,
        nav: &mut NavState,
        username: &str,
        password: &str,
        chapters: &[Chapter],
    ) -> Result<&User> {
        let user = resolver.resolve(username, password, chapters)?;
        tracing::info!(username = %user.username, role = %user.role, "Login succeeded");

        self.modal_open = false;
        nav.enter_dashboard();
        Ok(self.current_user.insert(user))
    }

    /// Clear the user and return to Home
    pub fn logout(&mut self, nav: &mut NavState) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(username = %user.username, "Logged out");
        }
        nav.leave_dashboard();
    }
}
