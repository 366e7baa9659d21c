use crate::common::UserProfile;

/// Source of the current user. Views only read the profile and ask for it to
/// be cleared on logout.
pub trait SessionProvider {
    fn user(&self) -> Option<&UserProfile>;
    fn set_user(&mut self, user: UserProfile);
    fn clear_user(&mut self);
}

/// In-memory session seeded from configuration. Nothing is written to disk.
#[derive(Debug, Default)]
pub struct LocalSession {
    user: Option<UserProfile>,
}

impl LocalSession {
    pub fn new(user: Option<UserProfile>) -> Self {
        Self { user }
    }
}

impl SessionProvider for LocalSession {
    fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn set_user(&mut self, user: UserProfile) {
        log::info!(
            "Signed in as {}",
            user.name.as_deref().unwrap_or("<unnamed>")
        );
        self.user = Some(user);
    }

    fn clear_user(&mut self) {
        if self.user.take().is_some() {
            log::info!("Session cleared");
        }
    }
}
