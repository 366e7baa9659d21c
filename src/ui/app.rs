use eframe::egui;

use crate::common::UserProfile;
use crate::router::{CHAT_ROUTE, ROOT_ROUTE, Route, Router};
use crate::session::SessionProvider;

use super::chat_view::ChatView;
use super::components::sign_in;

pub struct ChatApp {
    session: Box<dyn SessionProvider>,
    router: Box<dyn Router>,
    /// Mounted only while the router is on the chat route.
    chat_view: Option<ChatView>,
    sign_in_name: String,
    default_avatar: Option<String>,
}

impl ChatApp {
    pub fn new(
        session: Box<dyn SessionProvider>,
        router: Box<dyn Router>,
        default_avatar: Option<String>,
    ) -> Self {
        Self {
            session,
            router,
            chat_view: None,
            sign_in_name: String::new(),
            default_avatar,
        }
    }

    fn sync_mounted_view(&mut self) {
        match Route::from_path(self.router.current()) {
            Route::Chat => {
                if self.chat_view.is_none() {
                    log::debug!("Mounting chat view");
                    self.chat_view = Some(ChatView::new());
                }
            }
            Route::SignIn | Route::NotFound => {
                if let Some(view) = self.chat_view.take() {
                    log::debug!(
                        "Unmounted chat view, discarded {} messages",
                        view.state().messages.len()
                    );
                }
            }
        }
    }

    fn sign_in(&mut self, name: String) {
        self.session.set_user(UserProfile {
            name: Some(name),
            avatar_url: self.default_avatar.clone(),
        });
        self.router.push(CHAT_ROUTE);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_mounted_view();
        let route_before = self.router.current().to_string();

        match Route::from_path(&route_before) {
            Route::Chat => {
                if let Some(view) = self.chat_view.as_mut() {
                    view.show(ctx, self.session.as_mut(), self.router.as_mut());
                }
            }
            Route::SignIn => {
                let submitted = egui::CentralPanel::default()
                    .show(ctx, |ui| sign_in::render(ui, &mut self.sign_in_name))
                    .inner;
                if let Some(name) = submitted {
                    self.sign_in(name);
                }
            }
            Route::NotFound => {
                let go_home = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        ui.label(format!("Page not found: {route_before}"));
                        ui.button("Back to sign in").clicked()
                    })
                    .inner;
                if go_home {
                    self.router.push(ROOT_ROUTE);
                }
            }
        }

        if self.router.current() != route_before {
            ctx.request_repaint();
        }
    }
}
