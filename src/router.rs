pub const ROOT_ROUTE: &str = "/";
pub const CHAT_ROUTE: &str = "/chat";

/// Client-side navigation.
pub trait Router {
    fn push(&mut self, path: &str);
    fn current(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Chat,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::SignIn,
            CHAT_ROUTE => Route::Chat,
            _ => Route::NotFound,
        }
    }
}

#[derive(Debug)]
pub struct AppRouter {
    current: String,
}

impl AppRouter {
    pub fn new(start: &str) -> Self {
        Self {
            current: start.to_string(),
        }
    }
}

impl Router for AppRouter {
    fn push(&mut self, path: &str) {
        log::info!("Navigating {} -> {}", self.current, path);
        self.current = path.to_string();
    }

    fn current(&self) -> &str {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{AppRouter, CHAT_ROUTE, ROOT_ROUTE, Route, Router};

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path(ROOT_ROUTE), Route::SignIn);
        assert_eq!(Route::from_path(CHAT_ROUTE), Route::Chat);
        assert_eq!(Route::from_path("/chat/"), Route::Chat);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }

    #[test]
    fn push_updates_current_path() {
        let mut router = AppRouter::new(CHAT_ROUTE);
        assert_eq!(router.current(), CHAT_ROUTE);

        router.push(ROOT_ROUTE);
        assert_eq!(router.current(), ROOT_ROUTE);
    }
}
